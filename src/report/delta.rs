//! # 高阶 CC 校正（如 ΔT）
//!
//! 同一基组下两个 CC 级别的 EOM 跃迁能之差，例如
//! `ΔT/ANO1 := EOM-CCSDT/ANO1 - EOM-CCSD/ANO1`。
//!
//! 校验规则：
//! - 两份记录必须使用同一个基组
//! - 高级别的名称必须比低级别更长；若不以低级别名称开头只给出警告
//!
//! 校正名称为 `Δ<后缀>/<基组>`，误差估计为校正值绝对值的一半。
//!
//! ## 依赖关系
//! - 被 `commands/delta.rs` 调用
//! - 使用 `models/`

use crate::error::{CbsError, Result};
use crate::models::{AbInitioRecord, BetterEnergy, EnergyUnit, Irrep};

use std::fmt;
use tabled::Tabled;

/// 非致命警告
#[derive(Debug, Clone, PartialEq)]
pub enum DeltaWarning {
    /// 高级别名称不以低级别名称开头
    IncompatibleLevels { better: String, worse: String },
    /// 低级别计算中找不到该态
    UnmatchedState(Irrep),
}

impl fmt::Display for DeltaWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeltaWarning::IncompatibleLevels { better, worse } => write!(
                f,
                "Correcting {} with the seemingly incompatible {}",
                worse, better
            ),
            DeltaWarning::UnmatchedState(irrep) => write!(
                f,
                "No match in the lower level calculation for the state {}",
                irrep
            ),
        }
    }
}

/// 单个态的校正（a.u.）
#[derive(Debug, Clone, PartialEq)]
pub struct StateCorrection {
    pub irrep: Irrep,
    pub worse: f64,
    pub better: f64,
    pub correction: f64,
    pub error_est: f64,
}

/// 校正结果
#[derive(Debug, Clone, PartialEq)]
pub struct DeltaReport {
    pub name: String,
    pub basis: String,
    pub better_level: String,
    pub worse_level: String,
    pub states: Vec<StateCorrection>,
    pub warnings: Vec<DeltaWarning>,
}

impl DeltaReport {
    /// better energies 格式，模型名为校正名称
    pub fn better_energies(&self) -> Vec<BetterEnergy> {
        self.states
            .iter()
            .map(|s| BetterEnergy::new(s.irrep.clone(), self.name.clone(), s.correction))
            .collect()
    }

    /// 按 `unit` 换算后的表格行
    pub fn table_rows(&self, unit: EnergyUnit) -> Vec<DeltaRow> {
        let convert = |au: f64| format!("{:.3}", unit.from_hartree(au));
        self.states
            .iter()
            .map(|s| DeltaRow {
                state: s.irrep.to_string(),
                worse: convert(s.worse),
                better: convert(s.better),
                correction: convert(s.correction),
                error_est: convert(s.error_est),
            })
            .collect()
    }
}

/// 终端表格的一行
#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct DeltaRow {
    #[tabled(rename = "State")]
    pub state: String,
    #[tabled(rename = "Lower level")]
    pub worse: String,
    #[tabled(rename = "Higher level")]
    pub better: String,
    #[tabled(rename = "Correction")]
    pub correction: String,
    #[tabled(rename = "Err. est.")]
    pub error_est: String,
}

fn calclevel(record: &AbInitioRecord) -> Result<&str> {
    record
        .calclevel
        .as_deref()
        .ok_or_else(|| CbsError::MissingCalcLevel {
            basis: record.basis.clone(),
        })
}

fn cc_energy(record: &AbInitioRecord) -> Result<f64> {
    record.cc_energy.ok_or_else(|| CbsError::MissingCcEnergy {
        basis: record.basis.clone(),
    })
}

/// 计算 `better` 相对 `worse` 的校正
pub fn compute_delta(better: &AbInitioRecord, worse: &AbInitioRecord) -> Result<DeltaReport> {
    if better.basis != worse.basis {
        return Err(CbsError::BasisMismatch {
            better: better.basis.clone(),
            worse: worse.basis.clone(),
        });
    }

    let better_level = calclevel(better)?;
    let worse_level = calclevel(worse)?;

    let mut warnings = Vec::new();
    let suffix = match better_level.strip_prefix(worse_level) {
        Some(suffix) if !suffix.is_empty() => suffix.to_string(),
        _ => {
            // 按字符而非字节比较长度
            let worse_len = worse_level.chars().count();
            if worse_len >= better_level.chars().count() {
                return Err(CbsError::InvalidLevels {
                    better: better_level.to_string(),
                    worse: worse_level.to_string(),
                });
            }
            warnings.push(DeltaWarning::IncompatibleLevels {
                better: better_level.to_string(),
                worse: worse_level.to_string(),
            });
            better_level.chars().skip(worse_len).collect()
        }
    };
    let name = format!("Δ{}/{}", suffix, better.basis);

    let better_cc = cc_energy(better)?;
    let worse_cc = cc_energy(worse)?;

    let mut states = Vec::new();
    for better_state in &better.eom {
        let Some(worse_state) = worse.eom.iter().find(|w| w.irrep == better_state.irrep) else {
            warnings.push(DeltaWarning::UnmatchedState(better_state.irrep.clone()));
            continue;
        };

        let worse_eom = worse_state.energy - worse_cc;
        let better_eom = better_state.energy - better_cc;
        let correction = better_eom - worse_eom;
        states.push(StateCorrection {
            irrep: better_state.irrep.clone(),
            worse: worse_eom,
            better: better_eom,
            correction,
            error_est: 0.5 * correction.abs(),
        });
    }

    Ok(DeltaReport {
        name,
        basis: better.basis.clone(),
        better_level: better_level.to_string(),
        worse_level: worse_level.to_string(),
        states,
        warnings,
    })
}
