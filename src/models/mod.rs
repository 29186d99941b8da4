//! # 数据模型模块
//!
//! 定义基组表、ab initio 输入记录、CBS 输出记录和 better energies 记录。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `dataset/`, `fitting/`, `report/` 和 `commands/` 使用
//! - 子模块: basis, record, cbs, better

pub mod basis;
pub mod better;
pub mod cbs;
pub mod record;

pub use basis::BasisSet;
pub use better::{BetterEnergy, EnergyUnit};
pub use cbs::{CbsRecord, EomCbs, CBS_BASIS_LABEL};
pub use record::{AbInitioRecord, Irrep};
