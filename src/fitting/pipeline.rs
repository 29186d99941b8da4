//! # CBS 外推流程
//!
//! 对数据集的各个能量分量分别拟合：
//! - SCF: 指数模型，使用全部基组
//! - CC 总相关能: 立方模型，仅使用有 CC 结果的基组
//! - 每个 EOM 态的相关能: 立方模型，逐态独立拟合
//!
//! SCF 或总相关能失败时整个流程失败；单个 EOM 态失败只记录错误，
//! 其他态照常拟合，失败的态不进入 CBS 记录。
//!
//! ## 依赖关系
//! - 被 `commands/fit.rs` 调用
//! - 使用 `dataset/`, `fitting/component.rs`

use crate::dataset::{Dataset, EomGroup};
use crate::error::{CbsError, Result};
use crate::fitting::component::{fit_component, ComponentFit};
use crate::fitting::model::{points_from_columns, FitModel};
use crate::fitting::refine::FitMode;
use crate::models::{CbsRecord, EomCbs, Irrep, CBS_BASIS_LABEL};

/// 单个 EOM 态的拟合结果
#[derive(Debug)]
pub struct EomFit {
    pub irrep: Irrep,
    pub model: String,
    /// 在部分基组中缺失该态时记录缺失的基数
    pub missing: Vec<u32>,
    pub outcome: Result<ComponentFit>,
}

/// 一次完整外推的全部输出
#[derive(Debug)]
pub struct CbsRun {
    pub calclevel: Option<String>,
    pub scf: ComponentFit,
    pub correlation: ComponentFit,
    pub eom: Vec<EomFit>,
}

impl CbsRun {
    /// 组装 CBS 记录（失败的 EOM 态被省略）
    pub fn record(&self) -> CbsRecord {
        CbsRecord {
            basis: CBS_BASIS_LABEL.to_string(),
            scf: self.scf.result.cbs_energy,
            scf_error_est: Some(self.scf.result.error_estimate),
            calclevel: self.calclevel.clone(),
            cc_correlation: self.correlation.result.cbs_energy,
            cc_correlation_error_est: Some(self.correlation.result.error_estimate),
            eom: self
                .eom
                .iter()
                .filter_map(|state| {
                    let fit = state.outcome.as_ref().ok()?;
                    Some(EomCbs {
                        irrep: state.irrep.clone(),
                        model: state.model.clone(),
                        correlation: fit.result.cbs_energy,
                        correlation_error_est: fit.result.error_estimate,
                    })
                })
                .collect(),
        }
    }

    /// 成功拟合的全部分量（SCF、总相关能、EOM 态）
    pub fn component_fits(&self) -> Vec<&ComponentFit> {
        let mut fits = vec![&self.scf, &self.correlation];
        fits.extend(self.eom.iter().filter_map(|s| s.outcome.as_ref().ok()));
        fits
    }

    /// 失败的 EOM 态
    pub fn failures(&self) -> impl Iterator<Item = (&Irrep, &CbsError)> {
        self.eom
            .iter()
            .filter_map(|s| s.outcome.as_ref().err().map(|e| (&s.irrep, e)))
    }
}

/// SCF 能量外推
pub fn fit_scf(dataset: &Dataset, mode: FitMode) -> Result<ComponentFit> {
    let points = points_from_columns(&dataset.cardinalities(), &dataset.scf_energies())?;
    fit_component("SCF", FitModel::Exponential, &points, mode)
}

/// CC 总相关能外推
pub fn fit_total_correlation(dataset: &Dataset, mode: FitMode) -> Result<ComponentFit> {
    let label = format!("{} correlation", dataset.calclevel().unwrap_or("CC"));
    fit_component(
        &label,
        FitModel::CubicDecay,
        &dataset.cc_correlation_points(),
        mode,
    )
}

/// 单个 EOM 态外推
pub fn fit_eom_state(group: &EomGroup, cardinalities: &[u32], mode: FitMode) -> EomFit {
    let outcome = group
        .points()
        .and_then(|points| fit_component(&group.label(), FitModel::CubicDecay, &points, mode));

    EomFit {
        irrep: group.irrep.clone(),
        model: group.reference_model.clone(),
        missing: group.missing_cardinalities(cardinalities),
        outcome,
    }
}

/// 完整外推流程
pub fn run(dataset: &Dataset, mode: FitMode) -> Result<CbsRun> {
    let scf = fit_scf(dataset, mode)?;
    let correlation = fit_total_correlation(dataset, mode)?;

    let index = dataset.eom_index();
    let eom = index
        .groups()
        .iter()
        .map(|group| fit_eom_state(group, index.cardinalities(), mode))
        .collect();

    Ok(CbsRun {
        calclevel: dataset.calclevel().map(str::to_string),
        scf,
        correlation,
        eom,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::EomRecord;
    use crate::models::AbInitioRecord;
    use approx::assert_abs_diff_eq;

    fn eom(num: u32, name: &str, model: &str, energy: f64) -> EomRecord {
        EomRecord {
            irrep: Irrep::new(num, name),
            model: model.to_string(),
            energy,
        }
    }

    /// TZ/QZ 有 CC 与 EOM 结果，5Z 只有 SCF
    fn sample_records() -> Vec<AbInitioRecord> {
        let scf = [-224.34218395, -224.35967856, -224.36413383];
        vec![
            AbInitioRecord {
                basis: "PWCVTZ".to_string(),
                scf: scf[0],
                cc_energy: Some(scf[0] - 0.96318413),
                calclevel: Some("CCSDT".to_string()),
                eom: vec![
                    eom(1, "B2", "EOM-CCSDT", scf[0] - 0.80),
                    eom(1, "A1", "EOM-CCSDT", scf[0] - 0.78),
                ],
            },
            AbInitioRecord {
                basis: "PWCVQZ".to_string(),
                scf: scf[1],
                cc_energy: Some(scf[1] - 1.02456663),
                calclevel: Some("CCSDT".to_string()),
                eom: vec![
                    eom(1, "B2", "EOM-CCSDT", scf[1] - 0.86),
                    eom(1, "A1", "EOM-CCSD", scf[1] - 0.84),
                ],
            },
            AbInitioRecord {
                basis: "PWCV5Z".to_string(),
                scf: scf[2],
                cc_energy: None,
                calclevel: None,
                eom: vec![],
            },
        ]
    }

    #[test]
    fn test_full_run_in_guess_mode() {
        let dataset = Dataset::assemble(sample_records()).unwrap();
        let run = run(&dataset, FitMode::Guess).unwrap();

        assert_eq!(run.scf.points.len(), 3);
        assert!(run.scf.result.cbs_energy < -224.36413383);
        assert_eq!(run.correlation.label, "CCSDT correlation");
        assert_eq!(run.correlation.points.len(), 2);

        let b = (-0.96318413 - -1.02456663) / (1.0 / 27.0 - 1.0 / 64.0);
        assert_abs_diff_eq!(
            run.correlation.result.cbs_energy,
            -1.02456663 + b / 64.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_failed_state_does_not_block_siblings() {
        let dataset = Dataset::assemble(sample_records()).unwrap();
        let run = run(&dataset, FitMode::Guess).unwrap();

        assert_eq!(run.eom.len(), 2);
        assert!(run.eom[0].outcome.is_ok());
        assert!(matches!(
            run.eom[1].outcome,
            Err(CbsError::InconsistentEomModel { .. })
        ));
        assert_eq!(run.failures().count(), 1);

        let record = run.record();
        assert_eq!(record.basis, "CBS");
        assert_eq!(record.calclevel.as_deref(), Some("CCSDT"));
        assert_eq!(record.eom.len(), 1);
        assert_eq!(record.eom[0].irrep, Irrep::new(1, "B2"));
        assert_eq!(record.eom[0].model, "EOM-CCSDT");
        assert_eq!(run.component_fits().len(), 3);
    }

    #[test]
    fn test_degenerate_state_does_not_block_siblings() {
        let mut records = sample_records();
        records[1].eom.retain(|s| s.irrep.name == "B2");
        records[0].eom.retain(|s| s.irrep.name == "B2");
        // 两点相关能之差溢出，闭式解不是有限值
        let (tz_scf, qz_scf) = (records[0].scf, records[1].scf);
        records[0].eom.push(eom(2, "B2", "EOM-CCSDT", tz_scf + 1.0e308));
        records[1].eom.push(eom(2, "B2", "EOM-CCSDT", qz_scf - 1.0e308));
        let dataset = Dataset::assemble(records).unwrap();
        let run = run(&dataset, FitMode::Guess).unwrap();

        let good = run.eom.iter().find(|s| s.irrep == Irrep::new(1, "B2")).unwrap();
        let bad = run.eom.iter().find(|s| s.irrep == Irrep::new(2, "B2")).unwrap();
        assert!(good.outcome.is_ok());
        assert!(matches!(bad.outcome, Err(CbsError::DegenerateData { .. })));

        let failures: Vec<_> = run.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(*failures[0].0, Irrep::new(2, "B2"));

        let record = run.record();
        assert_eq!(record.eom.len(), 1);
        assert_eq!(record.eom[0].irrep, Irrep::new(1, "B2"));
    }

    #[test]
    fn test_scf_needs_three_bases() {
        let mut records = sample_records();
        records.pop();
        let dataset = Dataset::assemble(records).unwrap();
        assert!(matches!(
            run(&dataset, FitMode::Guess),
            Err(CbsError::InsufficientPoints { .. })
        ));
    }

    #[test]
    fn test_state_missing_at_one_basis_is_reported() {
        let mut records = sample_records();
        records[1].eom.retain(|s| s.irrep.name == "B2");
        let tz_scf = records[0].scf;
        records[0].eom.push(eom(2, "B2", "EOM-CCSDT", tz_scf - 0.7));
        let dataset = Dataset::assemble(records).unwrap();
        let run = run(&dataset, FitMode::Guess).unwrap();

        let a1 = run.eom.iter().find(|s| s.irrep == Irrep::new(1, "A1")).unwrap();
        assert_eq!(a1.missing, vec![4]);
        assert!(matches!(a1.outcome, Err(CbsError::InsufficientPoints { .. })));
    }
}
