//! # xsim 子命令实现
//!
//! 把 CBS 记录转换为 xsim 的 better energies 输入。
//!
//! ## 依赖关系
//! - 使用 `cli/xsim.rs` 定义的参数
//! - 使用 `report/xsim.rs`

use crate::cli::xsim::XsimArgs;
use crate::error::Result;
use crate::parsers;
use crate::report::xsim::prepare_xsim_input;

/// 执行转换
pub fn execute(args: XsimArgs) -> Result<()> {
    let cbs = parsers::load_cbs(&args.cbs)?;
    let better_energies = prepare_xsim_input(&cbs);
    super::emit_json(&better_energies, args.output.as_deref())
}
