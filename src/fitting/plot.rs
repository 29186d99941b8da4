//! # 外推曲线绘图
//!
//! 使用 `plotters` 为每个分量生成一张图：
//! - 实际计算的数据点
//! - 拟合模型曲线
//! - E∞ 水平线
//!
//! 支持 PNG 和 SVG 输出。
//!
//! ## 依赖关系
//! - 被 `commands/fit.rs` 调用
//! - 使用 `fitting/component.rs` 的 ComponentFit
//! - 使用 `plotters` 渲染图表

use crate::error::{CbsError, Result};
use crate::fitting::component::ComponentFit;

use plotters::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// 曲线采样点数
const CURVE_SAMPLES: usize = 200;

/// 曲线右端的最小基数
const CURVE_MIN_END: f64 = 7.0;

/// 绘图选项
#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub width: u32,
    pub height: u32,
    pub use_svg: bool,
    /// 基组家族名，用于横轴标签 "n, <family>"
    pub basis_family: String,
}

impl PlotOptions {
    pub fn extension(&self) -> &'static str {
        if self.use_svg {
            "svg"
        } else {
            "png"
        }
    }

    /// 一组分量的图片路径，文件名冲突时追加序号 `_2`, `_3`, ...
    pub fn paths_for(&self, dir: &Path, fits: &[&ComponentFit]) -> Vec<PathBuf> {
        let mut used: HashSet<String> = HashSet::new();
        fits.iter()
            .map(|fit| {
                let slug = slugify(&fit.label);
                let mut name = slug.clone();
                let mut suffix = 2;
                while !used.insert(name.clone()) {
                    name = format!("{}_{}", slug, suffix);
                    suffix += 1;
                }
                dir.join(format!("{}.{}", name, self.extension()))
            })
            .collect()
    }
}

/// 把分量名转为文件名，如 "EOM-CCSDT 1B2" -> "eom-ccsdt_1b2"
///
/// Cs 群的撇号保留为字母：`A'` -> "ap"，`A"` 与 `A''` -> "app"。
pub fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '\'' => slug.push('p'),
            '"' => slug.push_str("pp"),
            c if c.is_ascii_alphanumeric() || c == '-' => slug.push(c.to_ascii_lowercase()),
            _ => slug.push('_'),
        }
    }
    let trimmed = slug.trim_matches('_');
    if trimmed.is_empty() {
        "component".to_string()
    } else {
        trimmed.to_string()
    }
}

/// 模型曲线的采样点
pub fn curve_samples(fit: &ComponentFit) -> Vec<(f64, f64)> {
    let (start, end) = curve_range(fit);
    let step = (end - start) / (CURVE_SAMPLES - 1) as f64;
    (0..CURVE_SAMPLES)
        .map(|i| {
            let n = start + step * i as f64;
            (n, fit.result.parameters.evaluate(n))
        })
        .collect()
}

/// 横轴范围：第一个点左侧半格到 max(7, 最后一个点 + 1)
fn curve_range(fit: &ComponentFit) -> (f64, f64) {
    let first = fit.points.first().map(|p| f64::from(p.n)).unwrap_or(1.0);
    let last = fit.points.last().map(|p| f64::from(p.n)).unwrap_or(1.0);
    let start = (first - 0.5).max(0.5);
    let end = CURVE_MIN_END.max(last + 1.0);
    (start, end)
}

/// 生成单个分量的拟合图
pub fn generate_fit_plot(fit: &ComponentFit, output_path: &Path, options: &PlotOptions) -> Result<()> {
    let plot_err = |reason: String| CbsError::PlotError {
        path: output_path.display().to_string(),
        reason,
    };

    if options.use_svg {
        let root =
            SVGBackend::new(output_path, (options.width, options.height)).into_drawing_area();
        draw_fit_chart(&root, fit, &options.basis_family).map_err(plot_err)?;
        root.present().map_err(|e| plot_err(e.to_string()))?;
    } else {
        let root =
            BitMapBackend::new(output_path, (options.width, options.height)).into_drawing_area();
        draw_fit_chart(&root, fit, &options.basis_family).map_err(plot_err)?;
        root.present().map_err(|e| plot_err(e.to_string()))?;
    }
    Ok(())
}

/// 绘制拟合图，错误以字符串返回，由调用方附加路径
fn draw_fit_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    fit: &ComponentFit,
    basis_family: &str,
) -> std::result::Result<(), String>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(|e| format!("{:?}", e))?;

    let curve = curve_samples(fit);
    let cbs = fit.result.cbs_energy;
    let (x_min, x_max) = curve_range(fit);

    // 纵轴范围包含数据点、可见曲线与 E∞
    let mut y_min = cbs;
    let mut y_max = cbs;
    for p in &fit.points {
        y_min = y_min.min(p.energy);
        y_max = y_max.max(p.energy);
    }
    let first_n = fit.points.first().map(|p| f64::from(p.n)).unwrap_or(x_min);
    for (n, e) in &curve {
        if *n >= first_n && e.is_finite() {
            y_min = y_min.min(*e);
            y_max = y_max.max(*e);
        }
    }
    let pad = ((y_max - y_min) * 0.1).max(1e-6);
    let (y_lo, y_hi) = (y_min - pad, y_max + pad);

    let caption = format!("{} ({})", fit.label, fit.result.model.formula());
    let mut chart = ChartBuilder::on(root)
        .caption(caption, ("sans-serif", 24).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(90)
        .build_cartesian_2d(x_min..x_max, y_lo..y_hi)
        .map_err(|e| format!("{:?}", e))?;

    chart
        .configure_mesh()
        .x_desc(format!("n, {}", basis_family))
        .y_desc("Energy (Eh)")
        .y_label_formatter(&|y| format!("{:.4}", y))
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| format!("{:?}", e))?;

    // 模型曲线（超出纵轴范围的部分裁掉）
    let line_color = RGBColor(0, 102, 204);
    chart
        .draw_series(LineSeries::new(
            curve
                .iter()
                .copied()
                .filter(|(_, e)| e.is_finite() && *e >= y_lo && *e <= y_hi),
            line_color.stroke_width(2),
        ))
        .map_err(|e| format!("{:?}", e))?
        .label(format!("fit ({})", fit.result.mode))
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_color));

    // E∞
    let limit_color = RGBColor(204, 51, 0);
    chart
        .draw_series(LineSeries::new(
            vec![(x_min, cbs), (x_max, cbs)],
            limit_color.stroke_width(1),
        ))
        .map_err(|e| format!("{:?}", e))?
        .label(format!("E cbs = {:.6}", cbs))
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], limit_color));

    // 数据点
    chart
        .draw_series(
            fit.points
                .iter()
                .map(|p| Circle::new((f64::from(p.n), p.energy), 5, BLACK.filled())),
        )
        .map_err(|e| format!("{:?}", e))?
        .label("ab initio")
        .legend(|(x, y)| Circle::new((x + 10, y), 4, BLACK.filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 14))
        .draw()
        .map_err(|e| format!("{:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitting::component::fit_component;
    use crate::fitting::model::{EnergyPoint, FitModel};
    use crate::fitting::refine::FitMode;

    fn fit_named(label: &str) -> ComponentFit {
        let points = vec![
            EnergyPoint::new(3, -0.96318413),
            EnergyPoint::new(4, -1.02456663),
        ];
        fit_component(label, FitModel::CubicDecay, &points, FitMode::Guess).unwrap()
    }

    fn sample_fit() -> ComponentFit {
        fit_named("EOM-CCSDT 1B2")
    }

    fn options(use_svg: bool) -> PlotOptions {
        PlotOptions {
            width: 640,
            height: 480,
            use_svg,
            basis_family: "pwCVXZ".to_string(),
        }
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("EOM-CCSDT 1B2"), "eom-ccsdt_1b2");
        assert_eq!(slugify("SCF"), "scf");
        assert_eq!(slugify("  "), "component");
    }

    #[test]
    fn test_slugify_keeps_primed_irreps_apart() {
        assert_eq!(slugify("EOM-CCSD 1A'"), "eom-ccsd_1ap");
        assert_eq!(slugify("EOM-CCSD 1A\""), "eom-ccsd_1app");
        assert_ne!(slugify("EOM-CCSD 1A'"), slugify("EOM-CCSD 1A"));
    }

    #[test]
    fn test_curve_spans_past_the_data() {
        let fit = sample_fit();
        let curve = curve_samples(&fit);
        assert_eq!(curve.len(), CURVE_SAMPLES);
        assert!((curve[0].0 - 2.5).abs() < 1e-12);
        assert!((curve[curve.len() - 1].0 - 7.0).abs() < 1e-12);

        // 曲线经过数据点所在位置
        let at_four = fit.result.parameters.evaluate(4.0);
        assert!((at_four - -1.02456663).abs() < 1e-10);
    }

    #[test]
    fn test_plot_path_uses_slug_and_extension() {
        let fit = sample_fit();
        let dir = Path::new("plots");
        assert_eq!(
            options(true).paths_for(dir, &[&fit]),
            vec![dir.join("eom-ccsdt_1b2.svg")]
        );
        assert_eq!(
            options(false).paths_for(dir, &[&fit]),
            vec![dir.join("eom-ccsdt_1b2.png")]
        );
    }

    #[test]
    fn test_primed_irreps_get_separate_charts() {
        let single = fit_named("EOM-CCSD 1A'");
        let double = fit_named("EOM-CCSD 1A\"");
        let dir = Path::new("d");
        let paths = options(false).paths_for(dir, &[&single, &double]);
        assert_eq!(
            paths,
            vec![dir.join("eom-ccsd_1ap.png"), dir.join("eom-ccsd_1app.png")]
        );
    }

    #[test]
    fn test_colliding_slugs_get_numbered() {
        let a = fit_named("EOM-CCSD 1B2");
        let b = fit_named("EOM-CCSD_1B2");
        let c = fit_named("EOM-CCSD  1B2");
        let dir = Path::new("d");
        let paths = options(true).paths_for(dir, &[&a, &b, &c]);
        assert_eq!(
            paths,
            vec![
                dir.join("eom-ccsd_1b2.svg"),
                dir.join("eom-ccsd_1b2_2.svg"),
                dir.join("eom-ccsd__1b2.svg"),
            ]
        );
    }

    #[test]
    fn test_renders_png_and_svg() {
        let fit = sample_fit();
        let dir = tempfile::tempdir().unwrap();

        for use_svg in [false, true] {
            let options = options(use_svg);
            let path = options.paths_for(dir.path(), &[&fit]).remove(0);
            generate_fit_plot(&fit, &path, &options).unwrap();

            let size = std::fs::metadata(&path).unwrap().len();
            assert!(size > 0, "{} is empty", path.display());
        }

        let svg = std::fs::read_to_string(dir.path().join("eom-ccsdt_1b2.svg")).unwrap();
        assert!(svg.contains("<svg"));
    }
}
