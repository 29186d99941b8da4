//! # 统一错误处理模块
//!
//! 定义 cbs-limit 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// cbs-limit 统一错误类型
#[derive(Error, Debug)]
pub enum CbsError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse JSON file: {path}\nReason: {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 输入数据校验错误
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown basis set label '{label}'")]
    UnknownBasis { label: String },

    #[error("Basis sets '{first}' and '{second}' share the cardinality n = {n}")]
    DuplicateCardinality {
        first: String,
        second: String,
        n: u32,
    },

    #[error("{model} fit needs at least {required} points, only {found} available ({component})")]
    InsufficientPoints {
        component: String,
        model: String,
        required: usize,
        found: usize,
    },

    #[error("Data of different lengths: {n_len} cardinalities but {e_len} energies")]
    LengthMismatch { n_len: usize, e_len: usize },

    #[error("Data set contains varying CC level: {first}, and {second}")]
    InconsistentCalcLevel { first: String, second: String },

    #[error("Varying EOM models for state {state}: {expected} and {found}")]
    InconsistentEomModel {
        state: String,
        expected: String,
        found: String,
    },

    #[error("State {state} is listed more than once for basis {basis}")]
    DuplicateState { state: String, basis: String },

    #[error(
        "Basis {basis} is missing the 'cc_energy' value. Most likely you used the SCF \
         at a basis where CC is not possible. Remove the extra point from the ab initio json file."
    )]
    MissingCcEnergy { basis: String },

    #[error("Both calculations need to use the same basis set: {better} vs {worse}")]
    BasisMismatch { better: String, worse: String },

    #[error(
        "The better level of theory, {better}, is expected to have a longer name than the worse one, {worse}"
    )]
    InvalidLevels { better: String, worse: String },

    #[error("Record for basis {basis} has no calculation level")]
    MissingCalcLevel { basis: String },

    #[error("Unknown units '{0}', choose from: au, eV, cm")]
    UnknownUnit(String),

    #[error("{model} expects {expected} parameters, got {found}")]
    InvalidParameters {
        model: String,
        expected: usize,
        found: usize,
    },

    // ─────────────────────────────────────────────────────────────
    // 数值错误
    // ─────────────────────────────────────────────────────────────
    #[error("Closed-form {model} solution for {component} is not finite: {reason}")]
    DegenerateData {
        component: String,
        model: String,
        reason: String,
    },

    #[error("Least-squares refinement of {component} did not converge: {reason}")]
    NonConvergence { component: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Failed to render plot {path}: {reason}")]
    PlotError { path: String, reason: String },

    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, CbsError>;
