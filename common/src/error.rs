//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No data to export")]
    EmptyExport,

    #[error("Product not found: {0}")]
    NotFound(i64),

    #[error("Invalid session transition: {0}")]
    InvalidTransition(&'static str),

    #[error("Unknown sort field: {0} (use id, title, price, description, category)")]
    UnknownSortField(String),

    #[error("Unknown form field: {0} (use title, price, desc)")]
    UnknownFormField(String),

    #[error("Excel generation error: {0}")]
    Excel(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
