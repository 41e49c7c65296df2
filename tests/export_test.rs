//! CSV/Excel出力の統合テスト

use catalog_common::{Category, Record};
use catalog_dashboard::error::DashboardError;
use catalog_dashboard::export::{build_artifact, export_records, ExportFormat};
use tempfile::tempdir;

fn create_test_record(index: i64) -> Record {
    Record {
        id: index,
        title: format!("Product {}", index),
        price: index as f64 * 1.5,
        description: format!("Line one\nline two of {}", index),
        category: Some(Category { id: Some(2), name: "Electronics".to_string() }),
        images: vec![],
    }
}

#[test]
fn test_csv_export_to_directory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let records: Vec<Record> = (1..=3).map(create_test_record).collect();

    let path = export_records(&records, ExportFormat::Csv, dir.path()).expect("CSV出力失敗");
    assert_eq!(path, dir.path().join("products_export.csv"));

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "ID,Title,Price,Category,Description");
    assert_eq!(lines[1], "1,Product 1,1.5,Electronics,Line one line two of 1");
}

#[test]
fn test_csv_export_creates_missing_directory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let nested = dir.path().join("exports").join("today");
    let records = vec![create_test_record(1)];

    let path = export_records(&records, ExportFormat::Csv, &nested).expect("CSV出力失敗");
    assert!(path.exists());
}

#[test]
fn test_export_empty_is_error() {
    let dir = tempdir().expect("Failed to create temp dir");

    let result = export_records(&[], ExportFormat::Csv, dir.path());
    assert!(matches!(
        result,
        Err(DashboardError::Catalog(catalog_common::Error::EmptyExport))
    ));
    assert!(!dir.path().join("products_export.csv").exists());
}

#[test]
fn test_excel_export() {
    let dir = tempdir().expect("Failed to create temp dir");
    let records: Vec<Record> = (1..=5).map(create_test_record).collect();

    let path = export_records(&records, ExportFormat::Excel, dir.path()).expect("Excel出力失敗");
    assert_eq!(path.file_name().unwrap(), "products_export.xlsx");

    let metadata = std::fs::metadata(&path).expect("ファイルメタデータ取得失敗");
    assert!(metadata.len() > 0, "Excelファイルが空");
}

#[test]
fn test_artifact_content_types() {
    let records = vec![create_test_record(1)];

    let csv = build_artifact(&records, ExportFormat::Csv).unwrap();
    assert_eq!(csv.content_type, "text/csv");

    let excel = build_artifact(&records, ExportFormat::Excel).unwrap();
    assert!(excel.content_type.contains("spreadsheetml"));
}

/// 拡張子が形式と合わないファイル名は形式側に合わせる
#[test]
fn test_excel_export_to_csv_named_file_uses_xlsx_extension() {
    let dir = tempdir().expect("Failed to create temp dir");
    let records = vec![create_test_record(1)];

    let requested = dir.path().join("report.csv");
    let path = export_records(&records, ExportFormat::Excel, &requested).expect("Excel出力失敗");
    assert_eq!(path, dir.path().join("report.xlsx"));
    assert!(!requested.exists());

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}
