//! # 数据集模块
//!
//! 把 ab initio 记录整理为拟合所需的只读数据集。
//!
//! ## 依赖关系
//! - 被 `fitting/pipeline.rs`, `commands/fit.rs` 使用
//! - 使用 `models/`
//! - 子模块: assemble, eom

pub mod assemble;
pub mod eom;

pub use assemble::Dataset;
pub use eom::EomGroup;
