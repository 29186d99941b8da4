//! # cbs - 完全基组极限外推工具
//!
//! 把 SCF、CC 相关能和 EOM-CC 激发态能量外推到完全基组 (CBS) 极限，
//! 并提供面向 xsim 的后续处理。
//!
//! ## 子命令
//! - `fit`     - 基组极限外推
//! - `xsim`    - CBS 结果转 better energies
//! - `summary` - 最终能量与误差估计
//! - `merge`   - 合并两份 better energies
//! - `delta`   - 同一基组下的高阶 CC 校正
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (JSON 读写)
//!   │     ├── dataset/   (数据集组装)
//!   │     ├── fitting/   (外推拟合、绘图、导出)
//!   │     ├── report/    (下游报告)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod dataset;
mod error;
mod fitting;
mod models;
mod parsers;
mod report;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
