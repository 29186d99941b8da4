//! # fit 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/fit.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 图像输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum PlotFormat {
    /// PNG image
    #[default]
    Png,
    /// SVG vector image
    Svg,
}

impl std::fmt::Display for PlotFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlotFormat::Png => write!(f, "png"),
            PlotFormat::Svg => write!(f, "svg"),
        }
    }
}

/// fit 子命令参数
#[derive(Args, Debug)]
pub struct FitArgs {
    /// JSON file with ab initio energies for each basis set
    pub ab_initio: PathBuf,

    /// Name of the basis set family (used in plot axis labels)
    #[arg(short, long, default_value = "")]
    pub basis: String,

    /// Fit using all data points. Default: only the minimal number of the largest basis sets
    #[arg(short = 'a', long, default_value_t = false)]
    pub use_all: bool,

    /// Write the CBS JSON to this file instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory for one extrapolation chart per component
    #[arg(long)]
    pub plot_dir: Option<PathBuf>,

    /// Chart image format
    #[arg(long, value_enum, default_value = "png")]
    pub plot_format: PlotFormat,

    /// Export the per-component fit table as CSV
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 700)]
    pub height: u32,
}
