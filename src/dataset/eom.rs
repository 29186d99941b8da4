//! # EOM 态分组
//!
//! 把各基组下的 EOM 态按不可约表示分组，每组按基数升序。
//! 分组只建立索引；模型标签和重复项的校验推迟到取数据点时，
//! 这样某个态的错误只影响该态本身。
//!
//! 参考模型标签取第一个（最小）基组中的第一个 EOM 态。
//!
//! ## 依赖关系
//! - 被 `dataset/assemble.rs`, `fitting/pipeline.rs` 使用

use crate::dataset::assemble::BasisRow;
use crate::error::{CbsError, Result};
use crate::fitting::EnergyPoint;
use crate::models::{BasisSet, Irrep};

use std::collections::HashMap;

/// 某个态在某基组下的一行
#[derive(Debug, Clone, PartialEq)]
pub struct EomRow {
    pub basis: BasisSet,
    pub n: u32,
    pub model: String,
    pub correlation: f64,
}

/// 同一不可约表示的全部行
#[derive(Debug, Clone, PartialEq)]
pub struct EomGroup {
    pub irrep: Irrep,
    pub reference_model: String,
    rows: Vec<EomRow>,
}

impl EomGroup {
    /// 显示名称，如 "EOM-CCSDT 1B2"
    pub fn label(&self) -> String {
        format!("{} {}", self.reference_model, self.irrep)
    }

    /// 校验后的相关能数据点
    pub fn points(&self) -> Result<Vec<EnergyPoint>> {
        let mut points: Vec<EnergyPoint> = Vec::with_capacity(self.rows.len());

        for row in &self.rows {
            if row.model != self.reference_model {
                return Err(CbsError::InconsistentEomModel {
                    state: self.irrep.to_string(),
                    expected: self.reference_model.clone(),
                    found: row.model.clone(),
                });
            }
            if points.last().is_some_and(|p| p.n == row.n) {
                return Err(CbsError::DuplicateState {
                    state: self.irrep.to_string(),
                    basis: row.basis.to_string(),
                });
            }
            points.push(EnergyPoint::new(row.n, row.correlation));
        }

        Ok(points)
    }

    /// 在 `cardinalities` 中缺失该态的基数
    pub fn missing_cardinalities(&self, cardinalities: &[u32]) -> Vec<u32> {
        cardinalities
            .iter()
            .copied()
            .filter(|n| !self.rows.iter().any(|row| row.n == *n))
            .collect()
    }
}

/// EOM 态索引（按首次出现顺序）
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EomIndex {
    groups: Vec<EomGroup>,
    cardinalities: Vec<u32>,
}

impl EomIndex {
    /// 由按基数升序排列的行建立索引
    pub fn build<'a>(rows: impl Iterator<Item = &'a BasisRow>) -> Self {
        let mut groups: Vec<EomGroup> = Vec::new();
        let mut lookup: HashMap<Irrep, usize> = HashMap::new();
        let mut cardinalities = Vec::new();
        let mut reference_model: Option<String> = None;

        for row in rows {
            cardinalities.push(row.n);

            for state in &row.eom {
                let reference = reference_model
                    .get_or_insert_with(|| state.model.clone())
                    .clone();

                let idx = *lookup.entry(state.irrep.clone()).or_insert_with(|| {
                    groups.push(EomGroup {
                        irrep: state.irrep.clone(),
                        reference_model: reference,
                        rows: Vec::new(),
                    });
                    groups.len() - 1
                });

                groups[idx].rows.push(EomRow {
                    basis: row.basis,
                    n: row.n,
                    model: state.model.clone(),
                    correlation: state.correlation,
                });
            }
        }

        EomIndex {
            groups,
            cardinalities,
        }
    }

    pub fn groups(&self) -> &[EomGroup] {
        &self.groups
    }

    /// 参与分组的基数
    pub fn cardinalities(&self) -> &[u32] {
        &self.cardinalities
    }
}
