//! # summary 子命令实现
//!
//! 打印每个 EOM 态的 CBS 跃迁能和误差估计，
//! 或输出 better energies JSON。两个开关都未指定时只给出提示。
//!
//! ## 依赖关系
//! - 使用 `cli/summary.rs` 定义的参数
//! - 使用 `report/summary.rs`
//! - 使用 `utils/output.rs`

use crate::cli::summary::SummaryArgs;
use crate::error::Result;
use crate::parsers;
use crate::report::summary::summarize;
use crate::utils::output;

/// 执行汇总
pub fn execute(args: SummaryArgs) -> Result<()> {
    let dataset = parsers::load_ab_initio(&args.ab_initio)?;
    let cbs = parsers::load_cbs(&args.cbs)?;
    let summary = summarize(&dataset, &cbs)?;

    if !args.summary && !args.xsim {
        output::print_warning("Nothing to print: pass --summary and/or --xsim");
        return Ok(());
    }

    if args.summary {
        for line in &summary.lines {
            println!("{}", line);
        }
        println!();
    }

    if args.xsim {
        super::emit_json(&summary.better_energies, None)?;
    }

    Ok(())
}
