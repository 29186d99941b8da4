//! # 拟合结果导出
//!
//! 把各分量的拟合结果写成 CSV 表格，每个分量一行。
//! 列: component, model, mode, points, E_cbs, error_est, b, c（立方模型 c 为空）
//!
//! ## 依赖关系
//! - 被 `commands/fit.rs` 调用
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{CbsError, Result};
use crate::fitting::component::ComponentFit;

use std::path::Path;

const HEADER: [&str; 8] = [
    "component",
    "model",
    "mode",
    "points",
    "E_cbs",
    "error_est",
    "b",
    "c",
];

/// 导出为 CSV 文件
pub fn to_csv(fits: &[&ComponentFit], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(HEADER)?;

    for fit in fits {
        let params = &fit.result.parameters;
        wtr.write_record(&[
            fit.label.clone(),
            fit.result.model.name().to_string(),
            fit.result.mode.to_string(),
            fit.result.points_used.to_string(),
            format!("{:.10}", fit.result.cbs_energy),
            format!("{:.10}", fit.result.error_estimate),
            format!("{:.10}", params.b()),
            params.c().map(|c| format!("{:.10}", c)).unwrap_or_default(),
        ])?;
    }

    wtr.flush().map_err(|e| CbsError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitting::component::fit_component;
    use crate::fitting::model::{EnergyPoint, FitModel};
    use crate::fitting::refine::FitMode;

    #[test]
    fn test_csv_rows() {
        let scf = fit_component(
            "SCF",
            FitModel::Exponential,
            &[
                EnergyPoint::new(3, -224.34218395),
                EnergyPoint::new(4, -224.35967856),
                EnergyPoint::new(5, -224.36413383),
            ],
            FitMode::Guess,
        )
        .unwrap();
        let cc = fit_component(
            "CCSDT correlation",
            FitModel::CubicDecay,
            &[
                EnergyPoint::new(3, -0.96318413),
                EnergyPoint::new(4, -1.02456663),
            ],
            FitMode::Guess,
        )
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fits.csv");
        to_csv(&[&scf, &cc], &path).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), HEADER.to_vec());

        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "SCF");
        assert_eq!(&rows[0][1], "exponential");
        assert_eq!(&rows[0][2], "guess");
        assert_eq!(&rows[0][3], "3");
        assert!(!rows[0][7].is_empty());
        assert_eq!(&rows[1][1], "1/n^3");
        assert_eq!(&rows[1][7], "");
    }
}
