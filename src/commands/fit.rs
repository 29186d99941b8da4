//! # fit 子命令实现
//!
//! 读取 ab initio 数据集并外推到基组极限。
//!
//! ## 功能
//! - 组装并校验数据集
//! - 拟合 SCF、CC 总相关能和每个 EOM 态
//! - 打印初值、精修结果和汇总表
//! - 可选输出图表与 CSV
//! - 输出 CBS 记录 JSON
//!
//! ## 依赖关系
//! - 使用 `cli/fit.rs` 定义的参数
//! - 使用 `dataset/`, `fitting/`
//! - 使用 `utils/output.rs`

use crate::cli::fit::{FitArgs, PlotFormat};
use crate::dataset::Dataset;
use crate::error::{CbsError, Result};
use crate::fitting::plot::{self, PlotOptions};
use crate::fitting::pipeline::EomFit;
use crate::fitting::{export, pipeline, CbsRun, ComponentFit, FitMode};
use crate::parsers;
use crate::utils::output;

use std::fs;
use std::path::Path;
use tabled::{Table, Tabled};

/// 汇总表的一行
#[derive(Debug, Clone, Tabled)]
struct FitRow {
    #[tabled(rename = "Component")]
    component: String,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Points")]
    points: usize,
    #[tabled(rename = "E cbs (Eh)")]
    cbs_energy: String,
    #[tabled(rename = "Error est. (Eh)")]
    error_est: String,
}

impl From<&ComponentFit> for FitRow {
    fn from(fit: &ComponentFit) -> Self {
        FitRow {
            component: fit.label.clone(),
            model: fit.result.model.formula().to_string(),
            points: fit.result.points_used,
            cbs_energy: format!("{:.8}", fit.result.cbs_energy),
            error_est: format!("{:.8}", fit.result.error_estimate),
        }
    }
}

/// 执行外推
pub fn execute(args: FitArgs) -> Result<()> {
    output::print_header("CBS Extrapolation");

    output::print_info(&format!("Reading '{}'", args.ab_initio.display()));
    let records = parsers::load_ab_initio(&args.ab_initio)?;
    let dataset = Dataset::assemble(records)?;

    let ns: Vec<String> = dataset.cardinalities().iter().map(|n| n.to_string()).collect();
    output::print_info(&format!(
        "{} basis sets (n = {}), {} with {} results",
        dataset.rows().len(),
        ns.join(", "),
        dataset.correlated_rows().count(),
        dataset.calclevel().unwrap_or("CC"),
    ));

    let mode = if args.use_all {
        FitMode::Refine
    } else {
        FitMode::Guess
    };
    output::print_info(&format!("Fit mode: {}", mode));

    let run = pipeline::run(&dataset, mode)?;

    for fit in run.component_fits() {
        print_component(fit);
    }
    report_problems(&run);

    output::print_header("CBS Limits");
    let rows: Vec<FitRow> = run.component_fits().into_iter().map(FitRow::from).collect();
    println!("{}", Table::new(&rows));

    if let Some(ref dir) = args.plot_dir {
        write_plots(&run, dir, &args)?;
    }

    if let Some(ref csv_path) = args.csv {
        export::to_csv(&run.component_fits(), csv_path)?;
        output::print_success(&format!("Fit table saved to '{}'", csv_path.display()));
    }

    output::print_done(&format!(
        "{} of {} EOM states extrapolated",
        run.eom.len() - run.failures().count(),
        run.eom.len()
    ));

    super::emit_json(&run.record(), args.output.as_deref())
}

/// 打印单个分量的拟合参数
fn print_component(fit: &ComponentFit) {
    println!();
    output::print_info(&format!(
        "Fitting {} to the {} model",
        fit.label,
        fit.result.model.formula()
    ));
    output::print_params("Initial guess", &fit.guess.to_string());
    if fit.result.mode == FitMode::Refine {
        output::print_params("Fitting result", &fit.result.parameters.to_string());
    }
    for warning in &fit.warnings {
        output::print_warning(&format!("{}: {}", fit.label, warning));
    }
}

/// 缺失的态与失败的态
fn report_problems(run: &CbsRun) {
    for note in run.eom.iter().filter_map(missing_basis_note) {
        output::print_warning(&note);
    }
    for (irrep, err) in run.failures() {
        output::print_warning(&format!("State {} skipped: {}", irrep, err));
    }
}

/// 部分基组缺失、但仍拟合成功的态
fn missing_basis_note(state: &EomFit) -> Option<String> {
    if state.missing.is_empty() || state.outcome.is_err() {
        return None;
    }
    let ns: Vec<String> = state.missing.iter().map(|n| n.to_string()).collect();
    Some(format!(
        "State {} is missing for n = {}; fitted on the remaining basis sets",
        state.irrep,
        ns.join(", ")
    ))
}

/// 每个成功的分量一张图
fn write_plots(run: &CbsRun, dir: &Path, args: &FitArgs) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| CbsError::FileWriteError {
        path: dir.display().to_string(),
        source: e,
    })?;

    let options = PlotOptions {
        width: args.width,
        height: args.height,
        use_svg: args.plot_format == PlotFormat::Svg,
        basis_family: args.basis.clone(),
    };

    let fits = run.component_fits();
    for (fit, path) in fits.iter().zip(options.paths_for(dir, &fits)) {
        plot::generate_fit_plot(fit, &path, &options)?;
    }

    output::print_success(&format!(
        "{} {} charts saved to '{}'",
        fits.len(),
        args.plot_format,
        dir.display()
    ));
    Ok(())
}
