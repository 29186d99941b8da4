//! # CBS 外推结果记录
//!
//! `cbs fit` 的输出，也是 `cbs xsim` / `cbs summary` 的输入。
//! 组装完成后不再修改。
//!
//! ## 依赖关系
//! - 由 `fitting/pipeline.rs` 生成
//! - 被 `report/xsim.rs`, `commands/` 使用

use crate::models::Irrep;

use serde::{Deserialize, Serialize};

/// CBS 记录中固定的基组标签
pub const CBS_BASIS_LABEL: &str = "CBS";

/// 单个 EOM 态的 CBS 相关能
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EomCbs {
    pub irrep: Irrep,
    pub model: String,
    pub correlation: f64,
    #[serde(rename = "correlation error est")]
    pub correlation_error_est: f64,
}

/// 完整 CBS 记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CbsRecord {
    pub basis: String,

    pub scf: f64,

    #[serde(
        rename = "scf error est",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub scf_error_est: Option<f64>,

    pub calclevel: Option<String>,

    pub cc_correlation: f64,

    #[serde(
        rename = "cc_correlation error est",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cc_correlation_error_est: Option<f64>,

    #[serde(rename = "EOM", default)]
    pub eom: Vec<EomCbs>,
}
