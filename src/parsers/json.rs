//! # JSON 读写
//!
//! 所有输入输出文件都是 JSON。这里统一处理文件错误与解析错误，
//! 保证报错时带上文件路径。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 和 `commands/` 使用
//! - 使用 `serde_json`

use crate::error::{CbsError, Result};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// 读取并解析 JSON 文件
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(CbsError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| CbsError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| CbsError::JsonError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 序列化为单行 JSON 字符串
pub fn to_json_string<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| CbsError::Other(e.to_string()))
}

/// 写入 JSON 文件（缩进格式）
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let content =
        serde_json::to_string_pretty(value).map_err(|e| CbsError::Other(e.to_string()))?;

    fs::write(path, content + "\n").map_err(|e| CbsError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}
