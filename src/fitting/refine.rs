//! # 最小二乘精修
//!
//! 以闭式解为初值，对全部数据点做非线性最小二乘回归
//! （Levenberg–Marquardt，解析雅可比矩阵）。
//!
//! 是否精修由调用方通过 [`FitMode`] 显式指定；`Guess` 模式下原样返回初值。
//! 求解器未收敛对该分量是致命错误，不返回部分结果。
//!
//! ## 依赖关系
//! - 被 `fitting/component.rs` 调用
//! - 使用 `levenberg-marquardt` + `nalgebra`

use crate::error::{CbsError, Result};
use crate::fitting::model::{EnergyPoint, FitModel, ModelParams};

use levenberg_marquardt::{LeastSquaresProblem, LevenbergMarquardt};
use nalgebra::storage::Owned;
use nalgebra::{DMatrix, DVector, Dyn};
use std::fmt;

/// 拟合模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitMode {
    /// 仅用末尾最少点的闭式解
    #[default]
    Guess,
    /// 以闭式解为初值，对全部点做回归
    Refine,
}

impl fmt::Display for FitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitMode::Guess => write!(f, "guess"),
            FitMode::Refine => write!(f, "refined"),
        }
    }
}

/// 残差 `r_i = E(n_i; p) - E_i`
struct CurveProblem<'a> {
    model: FitModel,
    points: &'a [EnergyPoint],
    params: DVector<f64>,
}

impl LeastSquaresProblem<f64, Dyn, Dyn> for CurveProblem<'_> {
    type ResidualStorage = Owned<f64, Dyn>;
    type JacobianStorage = Owned<f64, Dyn, Dyn>;
    type ParameterStorage = Owned<f64, Dyn>;

    fn set_params(&mut self, params: &DVector<f64>) {
        self.params.copy_from(params);
    }

    fn params(&self) -> DVector<f64> {
        self.params.clone()
    }

    fn residuals(&self) -> Option<DVector<f64>> {
        let p = self.params.as_slice();
        Some(DVector::from_iterator(
            self.points.len(),
            self.points
                .iter()
                .map(|pt| self.model.evaluate(pt.n as f64, p) - pt.energy),
        ))
    }

    fn jacobian(&self) -> Option<DMatrix<f64>> {
        let p = self.params.as_slice();
        let k = self.model.param_count();
        let mut jacobian = DMatrix::zeros(self.points.len(), k);
        let mut row = vec![0.0; k];

        for (i, pt) in self.points.iter().enumerate() {
            self.model.fill_gradient(pt.n as f64, p, &mut row);
            for (j, value) in row.iter().enumerate() {
                jacobian[(i, j)] = *value;
            }
        }

        Some(jacobian)
    }
}

/// 按模式决定是否精修
pub fn apply(
    mode: FitMode,
    points: &[EnergyPoint],
    guess: ModelParams,
    component: &str,
) -> Result<ModelParams> {
    match mode {
        FitMode::Guess => Ok(guess),
        FitMode::Refine => refine(points, guess, component),
    }
}

/// 对全部点做 LM 回归，以 `guess` 为初值
pub fn refine(points: &[EnergyPoint], guess: ModelParams, component: &str) -> Result<ModelParams> {
    let model = guess.model();
    let problem = CurveProblem {
        model,
        points,
        params: DVector::from_vec(guess.to_vec()),
    };

    let (problem, report) = LevenbergMarquardt::new().minimize(problem);

    if !report.termination.was_successful() {
        return Err(CbsError::NonConvergence {
            component: component.to_string(),
            reason: format!("{:?}", report.termination),
        });
    }

    let params = ModelParams::from_slice(model, problem.params.as_slice())?;
    if !params.is_finite() || !report.objective_function.is_finite() {
        return Err(CbsError::NonConvergence {
            component: component.to_string(),
            reason: format!("solver returned non-finite parameters ({})", params),
        });
    }

    Ok(params)
}
