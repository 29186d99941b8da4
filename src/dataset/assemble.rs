//! # 数据集组装
//!
//! 把 ab initio 记录整理成按基数升序排列的数据集：
//! - 基组标签映射为基数（未知标签报错）
//! - 基数必须互不相同
//! - 所有记录的 CC 计算级别必须一致
//! - 相关能 = 该级别总能量 - 同一基组的 SCF 能量
//!
//! ## 依赖关系
//! - 被 `fitting/pipeline.rs`, `commands/fit.rs` 使用
//! - 使用 `models/basis.rs`, `models/record.rs`

use crate::dataset::eom::EomIndex;
use crate::error::{CbsError, Result};
use crate::fitting::EnergyPoint;
use crate::models::{AbInitioRecord, BasisSet, Irrep};

/// 单个 EOM 态在某基组下的相关能
#[derive(Debug, Clone, PartialEq)]
pub struct EomCorrelation {
    pub irrep: Irrep,
    pub model: String,
    pub correlation: f64,
}

/// 单个基组的一行数据
#[derive(Debug, Clone, PartialEq)]
pub struct BasisRow {
    pub basis: BasisSet,
    pub n: u32,
    pub scf: f64,
    /// CC 相关能（无 CC 结果时为 `None`）
    pub cc_correlation: Option<f64>,
    pub eom: Vec<EomCorrelation>,
}

/// 按基数升序排列、只读的数据集
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    rows: Vec<BasisRow>,
    calclevel: Option<String>,
}

impl Dataset {
    /// 校验并组装记录
    pub fn assemble(records: Vec<AbInitioRecord>) -> Result<Self> {
        let mut calclevel: Option<String> = None;
        let mut rows = Vec::with_capacity(records.len());

        for record in records {
            let basis: BasisSet = record.basis.parse()?;

            if let Some(level) = record.calclevel {
                match &calclevel {
                    None => calclevel = Some(level),
                    Some(first) if *first != level => {
                        return Err(CbsError::InconsistentCalcLevel {
                            first: first.clone(),
                            second: level,
                        });
                    }
                    Some(_) => {}
                }
            }

            let scf = record.scf;
            rows.push(BasisRow {
                basis,
                n: basis.cardinality(),
                scf,
                cc_correlation: record.cc_energy.map(|cc| cc - scf),
                eom: record
                    .eom
                    .into_iter()
                    .map(|state| EomCorrelation {
                        irrep: state.irrep,
                        model: state.model,
                        correlation: state.energy - scf,
                    })
                    .collect(),
            });
        }

        // 稳定排序，同基数的记录保持输入顺序以便报错
        rows.sort_by_key(|row| row.n);

        for pair in rows.windows(2) {
            if pair[0].n == pair[1].n {
                return Err(CbsError::DuplicateCardinality {
                    first: pair[0].basis.to_string(),
                    second: pair[1].basis.to_string(),
                    n: pair[0].n,
                });
            }
        }

        Ok(Dataset { rows, calclevel })
    }

    pub fn rows(&self) -> &[BasisRow] {
        &self.rows
    }

    pub fn calclevel(&self) -> Option<&str> {
        self.calclevel.as_deref()
    }

    pub fn cardinalities(&self) -> Vec<u32> {
        self.rows.iter().map(|row| row.n).collect()
    }

    pub fn scf_energies(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.scf).collect()
    }

    /// 有 CC 结果的行（SCF 可以比相关能多若干个大基组）
    pub fn correlated_rows(&self) -> impl Iterator<Item = &BasisRow> {
        self.rows.iter().filter(|row| row.cc_correlation.is_some())
    }

    /// CC 相关能数据点
    pub fn cc_correlation_points(&self) -> Vec<EnergyPoint> {
        self.rows
            .iter()
            .filter_map(|row| row.cc_correlation.map(|e| EnergyPoint::new(row.n, e)))
            .collect()
    }

    /// 按不可约表示分组的 EOM 态（仅统计有 CC 结果的基组）
    pub fn eom_index(&self) -> EomIndex {
        EomIndex::build(self.correlated_rows())
    }
}
