//! # delta 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/delta.rs`

use clap::Args;
use std::path::PathBuf;

/// delta 子命令参数
#[derive(Args, Debug)]
pub struct DeltaArgs {
    /// JSON file with ab initio energies at a higher level of theory
    pub better: PathBuf,

    /// JSON file with ab initio energies at a lower level of theory
    pub worse: PathBuf,

    /// Energy units: au, eV or cm
    #[arg(short, long, default_value = "eV")]
    pub units: String,

    /// Print the correction in xsim's 'better energies' format
    #[arg(short, long, default_value_t = false)]
    pub xsim: bool,
}
