//! # merge 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/merge.rs`

use clap::Args;
use std::path::PathBuf;

/// merge 子命令参数
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// File in xsim's 'better energies' format
    pub first: PathBuf,

    /// File in xsim's 'better energies' format, added to the first
    pub second: PathBuf,

    /// Write the merged JSON to this file instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
