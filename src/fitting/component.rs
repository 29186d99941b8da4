//! # 单分量拟合
//!
//! 对一个能量分量（SCF、总相关能或某个 EOM 态的相关能）执行：
//! 1. 末尾最少点求闭式初值（任何模式下都执行）
//! 2. 按模式选择数据子集并（可选）精修
//! 3. 误差估计 = ½·|E∞ - E(n_max)|，E(n_max) 为最大基组的实际计算值
//!
//! 误差估计是经验规则，不是统计置信区间。
//!
//! ## 依赖关系
//! - 被 `fitting/pipeline.rs` 调用
//! - 使用 `fitting/guess.rs`, `fitting/refine.rs`

use crate::error::Result;
use crate::fitting::guess::{self, FitWarning};
use crate::fitting::model::{EnergyPoint, FitModel, ModelParams};
use crate::fitting::refine::{self, FitMode};

/// 单分量拟合结果（创建后不再修改）
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult {
    pub model: FitModel,
    pub cbs_energy: f64,
    pub parameters: ModelParams,
    pub mode: FitMode,
    pub error_estimate: f64,
    pub points_used: usize,
}

/// 单分量拟合的完整输出，供报告与绘图使用
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentFit {
    /// 分量名称，如 "SCF", "CCSDT correlation", "EOM-CCSDT 1B2"
    pub label: String,
    /// 该分量的全部数据点
    pub points: Vec<EnergyPoint>,
    pub guess: ModelParams,
    pub result: FitResult,
    pub warnings: Vec<FitWarning>,
}

/// 半残差误差估计
pub fn half_residual(cbs_energy: f64, last_energy: f64) -> f64 {
    0.5 * (cbs_energy - last_energy).abs()
}

/// 拟合单个分量，`points` 按基数升序
pub fn fit_component(
    label: &str,
    model: FitModel,
    points: &[EnergyPoint],
    mode: FitMode,
) -> Result<ComponentFit> {
    let guess = guess::initial_guess(model, points, label)?;

    let subset = match mode {
        FitMode::Guess => guess::trailing_window(model, points),
        FitMode::Refine => points,
    };
    let parameters = refine::apply(mode, subset, guess.params, label)?;

    // initial_guess 已保证 points 非空
    let last = points[points.len() - 1];
    let cbs_energy = parameters.cbs_energy();

    Ok(ComponentFit {
        label: label.to_string(),
        points: points.to_vec(),
        guess: guess.params,
        result: FitResult {
            model,
            cbs_energy,
            parameters,
            mode,
            error_estimate: half_residual(cbs_energy, last.energy),
            points_used: subset.len(),
        },
        warnings: guess.warnings,
    })
}
