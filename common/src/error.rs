//! 错误类型

use thiserror::Error;

/// 共通库错误
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// Result 别名
pub type Result<T> = std::result::Result<T, Error>;
