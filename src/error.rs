use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrashSortError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("JSON解析错误: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("终端交互错误: {0}")]
    Prompt(String),

    #[error(transparent)]
    Common(#[from] trash_sort_common::Error),
}

pub type Result<T> = std::result::Result<T, TrashSortError>;
