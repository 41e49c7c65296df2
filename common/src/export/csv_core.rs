//! CSV生成（共通ライブラリ）
//!
//! 列区切りを壊さないよう、タイトルと説明のカンマ・改行は空白1つに置き換える。
//! それ以外のエスケープ（引用符など）は行わない。

use super::{ExportArtifact, EXPORT_HEADERS};
use crate::error::{Error, Result};
use crate::types::Record;

pub const CSV_FILE_NAME: &str = "products_export.csv";
pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// カンマと改行を空白に置換
pub fn sanitize_field(value: &str) -> String {
    value.replace(&[',', '\n'][..], " ")
}

fn csv_row(record: &Record) -> String {
    format!(
        "{},{},{},{},{}",
        record.id,
        sanitize_field(&record.title),
        record.price,
        record.category_name(),
        sanitize_field(&record.description),
    )
}

/// 検索後の集合（ページングとは無関係）をCSV文字列にする
///
/// 空なら `EmptyExport`。
pub fn render_csv(records: &[Record]) -> Result<String> {
    if records.is_empty() {
        return Err(Error::EmptyExport);
    }

    let mut csv = EXPORT_HEADERS.join(",");
    csv.push('\n');
    for record in records {
        csv.push_str(&csv_row(record));
        csv.push('\n');
    }
    Ok(csv)
}

pub fn csv_artifact(records: &[Record]) -> Result<ExportArtifact> {
    Ok(ExportArtifact {
        file_name: CSV_FILE_NAME,
        content_type: CSV_CONTENT_TYPE,
        bytes: render_csv(records)?.into_bytes(),
    })
}
