//! Export core modules shared across the CLI and the dashboard.

pub mod csv_core;

#[cfg(feature = "excel")]
pub mod excel_core;

/// ダウンロード用の成果物
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// 出力列（順序固定）
pub const EXPORT_HEADERS: [&str; 5] = ["ID", "Title", "Price", "Category", "Description"];
