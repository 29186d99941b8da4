//! # merge 子命令实现
//!
//! 把两份 better energies 相加。第二份中缺失的态给出警告。
//!
//! ## 依赖关系
//! - 使用 `cli/merge.rs` 定义的参数
//! - 使用 `report/merge.rs`
//! - 使用 `utils/output.rs`

use crate::cli::merge::MergeArgs;
use crate::error::Result;
use crate::parsers;
use crate::report::merge::merge;
use crate::utils::output;

/// 执行合并
pub fn execute(args: MergeArgs) -> Result<()> {
    let first = parsers::load_better_energies(&args.first)?;
    let second = parsers::load_better_energies(&args.second)?;

    let merged = merge(first, &second);
    for irrep in &merged.missing {
        output::print_warning(&format!(
            "Second file is missing data about {}; kept unchanged",
            irrep
        ));
    }

    super::emit_json(&merged.states, args.output.as_deref())
}
