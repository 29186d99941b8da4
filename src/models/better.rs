//! # xsim "better energies" 记录与能量单位
//!
//! 跃迁能同时以 a.u. 和 eV 表示。单位换算常数固定。
//!
//! ## 依赖关系
//! - 被 `report/` 各模块使用

use crate::error::{CbsError, Result};
use crate::models::Irrep;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 1 Hartree 对应的 eV
pub const HARTREE_TO_EV: f64 = 27.211386245988;
/// 1 eV 对应的 cm⁻¹
pub const EV_TO_CM: f64 = 8065.543937;
/// 1 Hartree 对应的 cm⁻¹
pub const HARTREE_TO_CM: f64 = HARTREE_TO_EV * EV_TO_CM;

/// 能量单位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyUnit {
    Hartree,
    ElectronVolt,
    Wavenumber,
}

impl EnergyUnit {
    /// 从 a.u. 换算到本单位的因子
    pub fn factor(self) -> f64 {
        match self {
            EnergyUnit::Hartree => 1.0,
            EnergyUnit::ElectronVolt => HARTREE_TO_EV,
            EnergyUnit::Wavenumber => HARTREE_TO_CM,
        }
    }

    pub fn from_hartree(self, energy_au: f64) -> f64 {
        energy_au * self.factor()
    }
}

impl FromStr for EnergyUnit {
    type Err = CbsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "au" => Ok(EnergyUnit::Hartree),
            "eV" => Ok(EnergyUnit::ElectronVolt),
            "cm" => Ok(EnergyUnit::Wavenumber),
            other => Err(CbsError::UnknownUnit(other.to_string())),
        }
    }
}

impl fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnergyUnit::Hartree => write!(f, "au"),
            EnergyUnit::ElectronVolt => write!(f, "eV"),
            EnergyUnit::Wavenumber => write!(f, "cm"),
        }
    }
}

/// 跃迁能（两种单位冗余存储）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    #[serde(rename = "eV")]
    pub ev: f64,
    pub au: f64,
}

impl Transition {
    pub fn from_hartree(au: f64) -> Self {
        Transition {
            ev: au * HARTREE_TO_EV,
            au,
        }
    }
}

impl std::ops::Add for Transition {
    type Output = Transition;

    fn add(self, rhs: Transition) -> Transition {
        Transition {
            ev: self.ev + rhs.ev,
            au: self.au + rhs.au,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateEnergy {
    pub transition: Transition,
}

/// 单个态的 better energies 条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetterEnergy {
    pub irrep: Irrep,
    #[serde(alias = "eom model")]
    pub model: String,
    pub energy: StateEnergy,
}

impl BetterEnergy {
    pub fn new(irrep: Irrep, model: impl Into<String>, energy_au: f64) -> Self {
        BetterEnergy {
            irrep,
            model: model.into(),
            energy: StateEnergy {
                transition: Transition::from_hartree(energy_au),
            },
        }
    }

    /// 跃迁能 (eV)
    pub fn ev(&self) -> f64 {
        self.energy.transition.ev
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_parsing() {
        assert_eq!("au".parse::<EnergyUnit>().unwrap(), EnergyUnit::Hartree);
        assert_eq!("eV".parse::<EnergyUnit>().unwrap(), EnergyUnit::ElectronVolt);
        assert_eq!("cm".parse::<EnergyUnit>().unwrap(), EnergyUnit::Wavenumber);
        assert!(matches!(
            "kcal".parse::<EnergyUnit>(),
            Err(CbsError::UnknownUnit(_))
        ));
    }

    #[test]
    fn test_transition_from_hartree() {
        let t = Transition::from_hartree(0.1);
        assert_relative_eq!(t.ev, 2.7211386245988, epsilon = 1e-12);
        assert_relative_eq!(t.au, 0.1);
        assert_relative_eq!(
            EnergyUnit::Wavenumber.from_hartree(1.0),
            27.211386245988 * 8065.543937
        );
    }

    #[test]
    fn test_reads_legacy_eom_model_key() {
        let content = r#"{"irrep": {"energy #": 2, "name": "A1"}, "eom model": "EOM-CCSD",
                          "energy": {"transition": {"eV": 5.0, "au": 0.18}}}"#;
        let state: BetterEnergy = serde_json::from_str(content).unwrap();
        assert_eq!(state.model, "EOM-CCSD");
        assert_relative_eq!(state.ev(), 5.0);
    }
}
