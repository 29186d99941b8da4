//! # 外推拟合模块
//!
//! 基组极限外推的数值核心。
//!
//! ## 子模块
//! - `model`: 外推模型与参数
//! - `guess`: 末尾最少点的闭式解
//! - `refine`: Levenberg–Marquardt 精修
//! - `component`: 单分量拟合与误差估计
//! - `pipeline`: SCF / 相关能 / EOM 态的完整流程
//! - `plot`: 图表生成
//! - `export`: CSV 导出
//!
//! ## 依赖关系
//! - 被 `commands/fit.rs`, `dataset/` 使用
//! - 使用 `models/`, `dataset/`

pub mod component;
pub mod export;
pub mod guess;
pub mod model;
pub mod pipeline;
pub mod plot;
pub mod refine;

pub use component::ComponentFit;
pub use model::EnergyPoint;
pub use pipeline::CbsRun;
pub use refine::FitMode;
