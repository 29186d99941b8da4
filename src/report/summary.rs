//! # 最终能量汇总
//!
//! 把 ab initio 数据集转换为每个基组的 EOM 跃迁能（态总能量 - CC 总能量），
//! 取最大基组的结果与 CBS 跃迁能逐态比较：
//! 误差估计 = ½·|E(最大基组) - E(CBS)|，单位 eV。
//!
//! 态的匹配要求不可约表示和模型标签都相同。
//!
//! ## 依赖关系
//! - 被 `commands/summary.rs` 调用
//! - 使用 `report/xsim.rs`, `models/`

use crate::error::{CbsError, Result};
use crate::models::{AbInitioRecord, BasisSet, BetterEnergy, CbsRecord};
use crate::report::xsim::prepare_xsim_input;

use std::fmt;

/// 单个基组下的全部跃迁能
#[derive(Debug, Clone, PartialEq)]
pub struct BasisTransitions {
    pub basis: BasisSet,
    pub states: Vec<BetterEnergy>,
}

/// 汇总表中的一行
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLine {
    /// 态名，如 "1B2"
    pub name: String,
    pub cbs_ev: f64,
    pub error_ev: f64,
}

impl fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:4} = {:6.3} ± {:5.3} eV",
            self.name, self.cbs_ev, self.error_ev
        )
    }
}

/// 汇总结果
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    pub lines: Vec<SummaryLine>,
    /// CBS 跃迁能（better energies 格式）
    pub better_energies: Vec<BetterEnergy>,
}

/// 把 ab initio 记录转换为每个基组的跃迁能，按基数升序
pub fn flip_data(dataset: &[AbInitioRecord]) -> Result<Vec<BasisTransitions>> {
    let mut out = Vec::with_capacity(dataset.len());

    for record in dataset {
        let cc_energy = record.cc_energy.ok_or_else(|| CbsError::MissingCcEnergy {
            basis: record.basis.clone(),
        })?;
        let basis: BasisSet = record.basis.parse()?;

        let states = record
            .eom
            .iter()
            .map(|state| {
                BetterEnergy::new(state.irrep.clone(), state.model.clone(), state.energy - cc_energy)
            })
            .collect();

        out.push(BasisTransitions { basis, states });
    }

    out.sort_by_key(|b| b.basis.cardinality());
    Ok(out)
}

/// 比较最大基组与 CBS 的跃迁能
pub fn summarize(dataset: &[AbInitioRecord], cbs: &CbsRecord) -> Result<Summary> {
    let cbs_final = prepare_xsim_input(cbs);
    let basis_data = flip_data(dataset)?;

    let Some(best) = basis_data.last() else {
        return Ok(Summary::default());
    };

    let mut summary = Summary::default();
    for ai_state in &best.states {
        for cbs_state in &cbs_final {
            if ai_state.irrep != cbs_state.irrep || ai_state.model != cbs_state.model {
                continue;
            }
            let ecbs = cbs_state.ev();
            summary.lines.push(SummaryLine {
                name: cbs_state.irrep.to_string(),
                cbs_ev: ecbs,
                error_ev: 0.5 * (ai_state.ev() - ecbs).abs(),
            });
            summary.better_energies.push(cbs_state.clone());
        }
    }

    Ok(summary)
}
