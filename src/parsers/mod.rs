//! # 解析器模块
//!
//! 读取 ab initio 能量文件、CBS 结果文件和 better energies 文件。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: json

pub mod json;

use crate::error::Result;
use crate::models::{AbInitioRecord, BetterEnergy, CbsRecord};
use std::path::Path;

/// 读取多基组 ab initio 数据集
pub fn load_ab_initio(path: &Path) -> Result<Vec<AbInitioRecord>> {
    json::read_json(path)
}

/// 读取单个基组的计算结果（`cbs delta` 使用）
pub fn load_single_record(path: &Path) -> Result<AbInitioRecord> {
    json::read_json(path)
}

/// 读取 CBS 结果
pub fn load_cbs(path: &Path) -> Result<CbsRecord> {
    json::read_json(path)
}

/// 读取 better energies 列表
pub fn load_better_energies(path: &Path) -> Result<Vec<BetterEnergy>> {
    json::read_json(path)
}
