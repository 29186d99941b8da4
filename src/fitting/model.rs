//! # 外推模型
//!
//! 两种基组收敛模型：
//! - SCF 能量: `E(n) = E∞ - b·exp(-c·n)`
//! - 相关能:   `E(n) = E∞ - b/n³`
//!
//! 这里只包含纯函数：正向求值、对参数的偏导数（供 LM 雅可比矩阵使用）。
//! 由最少点数精确反解参数的闭式解在 `fitting/guess.rs`。
//!
//! ## 依赖关系
//! - 被 `fitting/` 其余子模块使用

use crate::error::{CbsError, Result};

use std::fmt;

/// 数据点 (基数 n, 能量 E/a.u.)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyPoint {
    pub n: u32,
    pub energy: f64,
}

impl EnergyPoint {
    pub fn new(n: u32, energy: f64) -> Self {
        EnergyPoint { n, energy }
    }
}

/// 由两列数据构造数据点，长度不一致时报错
pub fn points_from_columns(ns: &[u32], energies: &[f64]) -> Result<Vec<EnergyPoint>> {
    if ns.len() != energies.len() {
        return Err(CbsError::LengthMismatch {
            n_len: ns.len(),
            e_len: energies.len(),
        });
    }

    Ok(ns
        .iter()
        .zip(energies)
        .map(|(&n, &energy)| EnergyPoint::new(n, energy))
        .collect())
}

/// 外推模型种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitModel {
    /// `E∞ - b·exp(-c·n)`
    Exponential,
    /// `E∞ - b/n³`
    CubicDecay,
}

impl FitModel {
    /// 闭式解所需的最少点数（等于参数个数）
    pub fn required_points(self) -> usize {
        self.param_count()
    }

    pub fn param_count(self) -> usize {
        match self {
            FitModel::Exponential => 3,
            FitModel::CubicDecay => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FitModel::Exponential => "exponential",
            FitModel::CubicDecay => "1/n^3",
        }
    }

    pub fn formula(self) -> &'static str {
        match self {
            FitModel::Exponential => "E∞ - b·exp(-c·n)",
            FitModel::CubicDecay => "E∞ - b/n³",
        }
    }

    /// 给定参数向量求 `E(n)`
    ///
    /// # Panics
    /// `params` 长度必须等于 `self.param_count()`。
    pub fn evaluate(self, n: f64, params: &[f64]) -> f64 {
        match self {
            FitModel::Exponential => exponential(n, params[0], params[1], params[2]),
            FitModel::CubicDecay => cubic_decay(n, params[0], params[1]),
        }
    }

    /// 填充 `∂E/∂p`，顺序与参数向量一致
    ///
    /// # Panics
    /// `params` 和 `out` 长度必须等于 `self.param_count()`。
    pub fn fill_gradient(self, n: f64, params: &[f64], out: &mut [f64]) {
        match self {
            FitModel::Exponential => {
                let b = params[1];
                let decay = (-params[2] * n).exp();
                out[0] = 1.0;
                out[1] = -decay;
                out[2] = b * n * decay;
            }
            FitModel::CubicDecay => {
                out[0] = 1.0;
                out[1] = -1.0 / n.powi(3);
            }
        }
    }
}

impl fmt::Display for FitModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// `E(n) = E∞ - b·exp(-c·n)`
pub fn exponential(n: f64, cbs_energy: f64, b: f64, c: f64) -> f64 {
    cbs_energy - b * (-c * n).exp()
}

/// `E(n) = E∞ - b/n³`
pub fn cubic_decay(n: f64, cbs_energy: f64, b: f64) -> f64 {
    cbs_energy - b / n.powi(3)
}

/// 带数值的模型参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModelParams {
    Exponential { cbs_energy: f64, b: f64, c: f64 },
    CubicDecay { cbs_energy: f64, b: f64 },
}

impl ModelParams {
    pub fn model(&self) -> FitModel {
        match self {
            ModelParams::Exponential { .. } => FitModel::Exponential,
            ModelParams::CubicDecay { .. } => FitModel::CubicDecay,
        }
    }

    /// 外推得到的 CBS 极限 E∞
    pub fn cbs_energy(&self) -> f64 {
        match *self {
            ModelParams::Exponential { cbs_energy, .. } => cbs_energy,
            ModelParams::CubicDecay { cbs_energy, .. } => cbs_energy,
        }
    }

    pub fn b(&self) -> f64 {
        match *self {
            ModelParams::Exponential { b, .. } => b,
            ModelParams::CubicDecay { b, .. } => b,
        }
    }

    /// 指数模型的衰减常数；立方模型没有该参数
    pub fn c(&self) -> Option<f64> {
        match *self {
            ModelParams::Exponential { c, .. } => Some(c),
            ModelParams::CubicDecay { .. } => None,
        }
    }

    pub fn to_vec(&self) -> Vec<f64> {
        match *self {
            ModelParams::Exponential { cbs_energy, b, c } => vec![cbs_energy, b, c],
            ModelParams::CubicDecay { cbs_energy, b } => vec![cbs_energy, b],
        }
    }

    /// 由参数向量重建（LM 求解器返回的是裸向量）
    pub fn from_slice(model: FitModel, params: &[f64]) -> Result<Self> {
        if params.len() != model.param_count() {
            return Err(CbsError::InvalidParameters {
                model: model.name().to_string(),
                expected: model.param_count(),
                found: params.len(),
            });
        }

        Ok(match model {
            FitModel::Exponential => ModelParams::Exponential {
                cbs_energy: params[0],
                b: params[1],
                c: params[2],
            },
            FitModel::CubicDecay => ModelParams::CubicDecay {
                cbs_energy: params[0],
                b: params[1],
            },
        })
    }

    pub fn evaluate(&self, n: f64) -> f64 {
        match *self {
            ModelParams::Exponential { cbs_energy, b, c } => exponential(n, cbs_energy, b, c),
            ModelParams::CubicDecay { cbs_energy, b } => cubic_decay(n, cbs_energy, b),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.to_vec().iter().all(|v| v.is_finite())
    }
}

impl fmt::Display for ModelParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ModelParams::Exponential { cbs_energy, b, c } => {
                write!(f, "E cbs = {:.6}, B = {:.6}, c = {:.6}", cbs_energy, b, c)
            }
            ModelParams::CubicDecay { cbs_energy, b } => {
                write!(f, "E cbs = {:.6}, B = {:.6}", cbs_energy, b)
            }
        }
    }
}
