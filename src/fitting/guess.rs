//! # 初始猜测（闭式精确解）
//!
//! 用数据末尾最少的点精确求解模型参数：
//! - `E∞ - b/n³`: 最后两个点
//! - `E∞ - b·exp(-c·n)`: 最后三个点，要求基数连续（步长为 1）
//!
//! 这是代数反解，不是数值求解。默认模式下它就是最终结果；
//! 回归模式下作为 LM 的初值。
//!
//! ## 依赖关系
//! - 被 `fitting/component.rs` 调用
//! - 使用 `fitting/model.rs`

use crate::error::{CbsError, Result};
use crate::fitting::model::{EnergyPoint, FitModel, ModelParams};

use std::fmt;

/// 非致命的拟合警告
#[derive(Debug, Clone, PartialEq)]
pub enum FitWarning {
    /// 指数模型窗口内基数不是连续整数
    NonUnitStep { cardinalities: Vec<u32> },
}

impl fmt::Display for FitWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitWarning::NonUnitStep { cardinalities } => {
                let ns: Vec<String> = cardinalities.iter().map(|n| n.to_string()).collect();
                write!(
                    f,
                    "the exponential fit requires data in zeta steps of 1, got n = {}",
                    ns.join(", ")
                )
            }
        }
    }
}

/// 初始猜测及其警告
#[derive(Debug, Clone, PartialEq)]
pub struct Guess {
    pub params: ModelParams,
    pub warnings: Vec<FitWarning>,
}

/// 取末尾 `model.required_points()` 个点
pub fn trailing_window(model: FitModel, points: &[EnergyPoint]) -> &[EnergyPoint] {
    let k = model.required_points().min(points.len());
    &points[points.len() - k..]
}

/// 由末尾最少点数求初始猜测
///
/// `points` 需按基数升序排列。点数不足时直接报错，不做任何部分计算。
pub fn initial_guess(model: FitModel, points: &[EnergyPoint], component: &str) -> Result<Guess> {
    let required = model.required_points();
    if points.len() < required {
        return Err(CbsError::InsufficientPoints {
            component: component.to_string(),
            model: model.name().to_string(),
            required,
            found: points.len(),
        });
    }

    let window = trailing_window(model, points);
    let mut warnings = Vec::new();

    let params = match model {
        FitModel::CubicDecay => solve_cubic_decay(window[0], window[1]),
        FitModel::Exponential => {
            let (p1, p2, p3) = (window[0], window[1], window[2]);
            if p3.n.checked_sub(p2.n) != Some(1) || p2.n.checked_sub(p1.n) != Some(1) {
                warnings.push(FitWarning::NonUnitStep {
                    cardinalities: vec![p1.n, p2.n, p3.n],
                });
            }
            solve_exponential(p1, p2, p3)
        }
    };

    if !params.is_finite() {
        let reason = match model {
            FitModel::Exponential => format!(
                "energy differences ({:.8}, {:.8}) do not decay monotonically",
                window[1].energy - window[0].energy,
                window[2].energy - window[1].energy
            ),
            FitModel::CubicDecay => format!("{}", params),
        };
        return Err(CbsError::DegenerateData {
            component: component.to_string(),
            model: model.name().to_string(),
            reason,
        });
    }

    Ok(Guess { params, warnings })
}

/// `E∞ - b/n³` 过两点的精确解，`p2` 为基数较大者
pub fn solve_cubic_decay(p1: EnergyPoint, p2: EnergyPoint) -> ModelParams {
    let inv_n1 = 1.0 / (p1.n as f64).powi(3);
    let inv_n2 = 1.0 / (p2.n as f64).powi(3);

    let b = (p1.energy - p2.energy) / (inv_n1 - inv_n2);
    let cbs_energy = p2.energy + b * inv_n2;

    ModelParams::CubicDecay { cbs_energy, b }
}

/// `E∞ - b·exp(-c·n)` 过三点的精确解（基数步长为 1）
pub fn solve_exponential(p1: EnergyPoint, p2: EnergyPoint, p3: EnergyPoint) -> ModelParams {
    let (e1, e2, e3) = (p1.energy, p2.energy, p3.energy);
    let n2 = p2.n as f64;
    let n3 = p3.n as f64;

    let c = ((e2 - e1) / (e3 - e2)).ln();
    let b = (e2 - e3) / ((-n3 * c).exp() - (-n2 * c).exp());
    let cbs_energy = e3 + b * (-n3 * c).exp();

    ModelParams::Exponential { cbs_energy, b, c }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn scf_points() -> Vec<EnergyPoint> {
        vec![
            EnergyPoint::new(3, -224.34218395),
            EnergyPoint::new(4, -224.35967856),
            EnergyPoint::new(5, -224.36413383),
        ]
    }

    fn correlation_points() -> Vec<EnergyPoint> {
        vec![
            EnergyPoint::new(3, -0.96318413),
            EnergyPoint::new(4, -1.02456663),
        ]
    }

    #[test]
    fn test_cubic_guess_reproduces_both_points() {
        let points = correlation_points();
        let guess = initial_guess(FitModel::CubicDecay, &points, "CCSDT").unwrap();
        assert!(guess.warnings.is_empty());

        let ModelParams::CubicDecay { cbs_energy, b } = guess.params else {
            panic!("wrong model");
        };
        assert_abs_diff_eq!(cbs_energy - b / 27.0, -0.96318413, epsilon = 1e-12);
        assert_abs_diff_eq!(cbs_energy - b / 64.0, -1.02456663, epsilon = 1e-12);

        // closed form written out by hand
        let b_ref = (-0.96318413 - -1.02456663) / (1.0 / 27.0 - 1.0 / 64.0);
        assert_abs_diff_eq!(b, b_ref, epsilon = 1e-12);
        assert_abs_diff_eq!(cbs_energy, -1.02456663 + b_ref / 64.0, epsilon = 1e-12);
    }

    #[test]
    fn test_exponential_guess_reproduces_three_points() {
        let points = scf_points();
        let guess = initial_guess(FitModel::Exponential, &points, "SCF").unwrap();
        assert!(guess.warnings.is_empty());

        for p in &points {
            assert_abs_diff_eq!(guess.params.evaluate(p.n as f64), p.energy, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_exponential_limit_lies_below_last_point() {
        let guess = initial_guess(FitModel::Exponential, &scf_points(), "SCF").unwrap();
        assert!(guess.params.cbs_energy() < -224.36413383);
    }

    #[test]
    fn test_only_trailing_points_are_used() {
        let mut points = vec![EnergyPoint::new(2, -0.7)];
        points.extend(correlation_points());

        let short = initial_guess(FitModel::CubicDecay, &correlation_points(), "cc").unwrap();
        let long = initial_guess(FitModel::CubicDecay, &points, "cc").unwrap();
        assert_eq!(short, long);
        assert_eq!(trailing_window(FitModel::CubicDecay, &points), &points[1..]);
    }

    #[test]
    fn test_insufficient_points() {
        let points = &scf_points()[..2];
        let err = initial_guess(FitModel::Exponential, points, "SCF").unwrap_err();
        assert!(matches!(
            err,
            CbsError::InsufficientPoints {
                required: 3,
                found: 2,
                ..
            }
        ));

        let err = initial_guess(FitModel::CubicDecay, &[], "cc").unwrap_err();
        assert!(matches!(err, CbsError::InsufficientPoints { found: 0, .. }));
    }

    #[test]
    fn test_non_unit_step_warns_but_fits() {
        let points = vec![
            EnergyPoint::new(2, -224.30),
            EnergyPoint::new(3, -224.34218395),
            EnergyPoint::new(5, -224.36413383),
        ];
        let guess = initial_guess(FitModel::Exponential, &points, "SCF").unwrap();
        assert_eq!(
            guess.warnings,
            vec![FitWarning::NonUnitStep {
                cardinalities: vec![2, 3, 5]
            }]
        );
        assert!(guess.params.is_finite());
    }

    #[test]
    fn test_non_monotonic_data_is_degenerate() {
        let points = vec![
            EnergyPoint::new(3, -1.0),
            EnergyPoint::new(4, -1.1),
            EnergyPoint::new(5, -1.05),
        ];
        let err = initial_guess(FitModel::Exponential, &points, "SCF").unwrap_err();
        assert!(matches!(err, CbsError::DegenerateData { .. }));
    }
}
