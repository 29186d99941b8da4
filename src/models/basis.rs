//! # 基组标签与基数表
//!
//! 基组标签到基数 n 的固定映射表。该表是封闭的：
//! 未知标签直接报错，不做任何默认值回退。
//!
//! ## 依赖关系
//! - 被 `dataset/assemble.rs`, `report/summary.rs` 使用

use crate::error::{CbsError, Result};

use std::fmt;
use std::str::FromStr;

/// 支持的基组
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasisSet {
    Ano0,
    Ano1,
    Ano2,
    PwcvDz,
    PwcvTz,
    PwcvQz,
    Pwcv5z,
    AugPwcvDz,
    AugPwcvTz,
    AugPwcvQz,
    AugPwcv5z,
}

impl BasisSet {
    /// 全部基组（按表顺序）
    pub const ALL: [BasisSet; 11] = [
        BasisSet::Ano0,
        BasisSet::Ano1,
        BasisSet::Ano2,
        BasisSet::PwcvDz,
        BasisSet::PwcvTz,
        BasisSet::PwcvQz,
        BasisSet::Pwcv5z,
        BasisSet::AugPwcvDz,
        BasisSet::AugPwcvTz,
        BasisSet::AugPwcvQz,
        BasisSet::AugPwcv5z,
    ];

    /// 输入文件中使用的标签
    pub fn label(self) -> &'static str {
        match self {
            BasisSet::Ano0 => "ANO0",
            BasisSet::Ano1 => "ANO1",
            BasisSet::Ano2 => "ANO2",
            BasisSet::PwcvDz => "PWCVDZ",
            BasisSet::PwcvTz => "PWCVTZ",
            BasisSet::PwcvQz => "PWCVQZ",
            BasisSet::Pwcv5z => "PWCV5Z",
            BasisSet::AugPwcvDz => "aug-pwCVDZ",
            BasisSet::AugPwcvTz => "aug-pwCVTZ",
            BasisSet::AugPwcvQz => "aug-pwCVQZ",
            BasisSet::AugPwcv5z => "aug-pwCV5Z",
        }
    }

    /// 基数 n
    pub fn cardinality(self) -> u32 {
        match self {
            BasisSet::Ano0 => 1,
            BasisSet::Ano1 | BasisSet::PwcvDz | BasisSet::AugPwcvDz => 2,
            BasisSet::Ano2 | BasisSet::PwcvTz | BasisSet::AugPwcvTz => 3,
            BasisSet::PwcvQz | BasisSet::AugPwcvQz => 4,
            BasisSet::Pwcv5z | BasisSet::AugPwcv5z => 5,
        }
    }
}

impl FromStr for BasisSet {
    type Err = CbsError;

    fn from_str(label: &str) -> Result<Self> {
        BasisSet::ALL
            .iter()
            .copied()
            .find(|b| b.label() == label)
            .ok_or_else(|| CbsError::UnknownBasis {
                label: label.to_string(),
            })
    }
}

impl fmt::Display for BasisSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
