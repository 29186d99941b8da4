//! # 下游报告模块
//!
//! CBS 结果之后的处理步骤。
//!
//! ## 子模块
//! - `xsim`: CBS 结果转 better energies
//! - `summary`: 最终能量与误差估计汇总
//! - `merge`: 两份 better energies 相加
//! - `delta`: 同一基组下的高阶 CC 校正
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/`

pub mod delta;
pub mod merge;
pub mod summary;
pub mod xsim;
