//! # ab initio 输入记录
//!
//! 每个基组一条记录：SCF 能量、可选的 CC 总能量与计算级别、
//! 以及可选的 EOM 激发态列表。JSON 键名与 CFOUR 后处理脚本保持一致。
//!
//! ## 依赖关系
//! - 被 `dataset/`, `report/summary.rs`, `report/delta.rs` 使用

use serde::{Deserialize, Serialize};
use std::fmt;

/// 不可约表示标识（能级序号 + 对称性名称）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Irrep {
    #[serde(rename = "energy #")]
    pub number: u32,
    pub name: String,
}

impl Irrep {
    pub fn new(number: u32, name: impl Into<String>) -> Self {
        Irrep {
            number,
            name: name.into(),
        }
    }
}

impl fmt::Display for Irrep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.name)
    }
}

/// 单个 EOM 激发态（总能量，a.u.）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EomRecord {
    pub irrep: Irrep,
    pub model: String,
    pub energy: f64,
}

/// 单个基组的计算结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbInitioRecord {
    /// 基组标签（见 `models::basis`）
    pub basis: String,

    /// SCF 能量 (a.u.)
    pub scf: f64,

    /// CC 总能量 (a.u.)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc_energy: Option<f64>,

    /// CC 计算级别，如 "CCSDT"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calclevel: Option<String>,

    /// EOM 激发态
    #[serde(rename = "EOM", default)]
    pub eom: Vec<EomRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_with_eom() {
        let content = r#"{
            "basis": "PWCVTZ",
            "scf": -224.34218395,
            "cc_energy": -225.30536808,
            "calclevel": "CCSDT",
            "EOM": [
                {"irrep": {"energy #": 1, "name": "B2"}, "model": "EOM-CCSDT", "energy": -225.1}
            ]
        }"#;
        let record: AbInitioRecord = serde_json::from_str(content).unwrap();
        assert_eq!(record.basis, "PWCVTZ");
        assert_eq!(record.calclevel.as_deref(), Some("CCSDT"));
        assert_eq!(record.eom.len(), 1);
        assert_eq!(record.eom[0].irrep, Irrep::new(1, "B2"));
        assert_eq!(record.eom[0].irrep.to_string(), "1B2");
    }

    #[test]
    fn test_parse_scf_only_record() {
        let record: AbInitioRecord =
            serde_json::from_str(r#"{"basis": "PWCV5Z", "scf": -224.36413383}"#).unwrap();
        assert!(record.cc_energy.is_none());
        assert!(record.calclevel.is_none());
        assert!(record.eom.is_empty());
    }
}
