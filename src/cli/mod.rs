//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `fit`: 基组极限外推
//! - `xsim`: CBS 结果转 better energies
//! - `summary`: 最终能量与误差估计
//! - `merge`: 合并两份 better energies
//! - `delta`: 同一基组下的高阶 CC 校正
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: fit, xsim, summary, merge, delta

pub mod delta;
pub mod fit;
pub mod merge;
pub mod summary;
pub mod xsim;

use clap::{Parser, Subcommand};

/// cbs - 完全基组极限外推工具
#[derive(Parser)]
#[command(name = "cbs")]
#[command(version)]
#[command(
    about = "Complete basis set extrapolation of SCF, CC and EOM-CC energies",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Extrapolate SCF, CC correlation and EOM state energies to the CBS limit
    Fit(fit::FitArgs),

    /// Convert a CBS result into xsim's 'better energies' input
    Xsim(xsim::XsimArgs),

    /// Print the CBS transition energies with half the CBS / largest basis gap
    Summary(summary::SummaryArgs),

    /// Add two 'better energies' files together: energies and model names
    Merge(merge::MergeArgs),

    /// Print the higher CC level correction to the EOM energies, e.g. ΔT/ANO1
    Delta(delta::DeltaArgs),
}
