//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `dataset/`, `fitting/`, `report/`, `utils/`
//! - 子模块: fit, xsim, summary, merge, delta

pub mod delta;
pub mod fit;
pub mod merge;
pub mod summary;
pub mod xsim;

use crate::cli::Commands;
use crate::error::Result;
use crate::parsers::json;
use crate::utils::output;

use serde::Serialize;
use std::path::Path;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Fit(args) => fit::execute(args),
        Commands::Xsim(args) => xsim::execute(args),
        Commands::Summary(args) => summary::execute(args),
        Commands::Merge(args) => merge::execute(args),
        Commands::Delta(args) => delta::execute(args),
    }
}

/// JSON 结果写到文件，或以单行形式打印到 stdout
fn emit_json<T: Serialize>(value: &T, output_path: Option<&Path>) -> Result<()> {
    match output_path {
        Some(path) => {
            json::write_json(value, path)?;
            output::print_success(&format!("Written to '{}'", path.display()));
        }
        None => println!("{}", json::to_json_string(value)?),
    }
    Ok(())
}
