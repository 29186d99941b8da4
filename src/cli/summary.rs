//! # summary 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/summary.rs`

use clap::Args;
use std::path::PathBuf;

/// summary 子命令参数
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// JSON file with ab initio energies for each basis set
    pub ab_initio: PathBuf,

    /// JSON file with CBS energies
    pub cbs: PathBuf,

    /// Print output as a 'better energies' input for xsim
    #[arg(short, long, default_value_t = false)]
    pub xsim: bool,

    /// Print the summary lines to standard output
    #[arg(short, long, default_value_t = false)]
    pub summary: bool,
}
