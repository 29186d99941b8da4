//! # CBS 结果转 xsim better energies
//!
//! EOM 跃迁能 = 态相关能 - CC 总相关能（两者均为 CBS 极限值）。
//!
//! ## 依赖关系
//! - 被 `commands/xsim.rs`, `report/summary.rs` 使用

use crate::models::{BetterEnergy, CbsRecord};

/// 把 CBS 记录中的每个 EOM 态转换为跃迁能
pub fn prepare_xsim_input(cbs: &CbsRecord) -> Vec<BetterEnergy> {
    cbs.eom
        .iter()
        .map(|state| {
            BetterEnergy::new(
                state.irrep.clone(),
                state.model.clone(),
                state.correlation - cbs.cc_correlation,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::better::HARTREE_TO_EV;
    use crate::models::{EomCbs, Irrep};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_transition_is_relative_to_ground_state_correlation() {
        let cbs = CbsRecord {
            basis: "CBS".to_string(),
            scf: -224.3656,
            scf_error_est: None,
            calclevel: Some("CCSDT".to_string()),
            cc_correlation: -1.10,
            cc_correlation_error_est: None,
            eom: vec![EomCbs {
                irrep: Irrep::new(1, "B2"),
                model: "EOM-CCSDT".to_string(),
                correlation: -0.90,
                correlation_error_est: 0.001,
            }],
        };

        let out = prepare_xsim_input(&cbs);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].model, "EOM-CCSDT");
        assert_abs_diff_eq!(out[0].energy.transition.au, 0.20, epsilon = 1e-12);
        assert_abs_diff_eq!(out[0].ev(), 0.20 * HARTREE_TO_EV, epsilon = 1e-10);
    }

    #[test]
    fn test_no_states_gives_empty_list() {
        let cbs = CbsRecord {
            basis: "CBS".to_string(),
            scf: -1.0,
            scf_error_est: None,
            calclevel: None,
            cc_correlation: -0.5,
            cc_correlation_error_est: None,
            eom: vec![],
        };
        assert!(prepare_xsim_input(&cbs).is_empty());
    }
}
