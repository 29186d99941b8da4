//! # xsim 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/xsim.rs`

use clap::Args;
use std::path::PathBuf;

/// xsim 子命令参数
#[derive(Args, Debug)]
pub struct XsimArgs {
    /// JSON file with CBS energies
    pub cbs: PathBuf,

    /// Write the 'better energies' JSON to this file instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
