//! # delta 子命令实现
//!
//! 打印同一基组下高阶 CC 级别对 EOM 跃迁能的校正，
//! 或以 better energies 格式输出。
//!
//! ## 依赖关系
//! - 使用 `cli/delta.rs` 定义的参数
//! - 使用 `report/delta.rs`
//! - 使用 `utils/output.rs`

use crate::cli::delta::DeltaArgs;
use crate::error::Result;
use crate::models::EnergyUnit;
use crate::parsers;
use crate::report::delta::compute_delta;
use crate::utils::output;

use tabled::Table;

/// 执行校正计算
pub fn execute(args: DeltaArgs) -> Result<()> {
    let unit: EnergyUnit = args.units.parse()?;

    let better = parsers::load_single_record(&args.better)?;
    let worse = parsers::load_single_record(&args.worse)?;
    let report = compute_delta(&better, &worse)?;

    for warning in &report.warnings {
        output::print_warning(&warning.to_string());
    }

    if args.xsim {
        return super::emit_json(&report.better_energies(), None);
    }

    output::print_header(&format!("The {} correction", report.name));
    output::print_info(&format!(
        "{} corrected with {} at {}",
        report.worse_level, report.better_level, report.basis
    ));
    output::print_info(&format!("Energies in {}", unit));
    println!("{}", Table::new(report.table_rows(unit)));
    output::print_separator();

    Ok(())
}
