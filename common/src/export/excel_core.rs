//! Excel生成（共通ライブラリ）
//!
//! CSVと同じ列で1シートに書き出す。価格は数値セルとして書く。

use super::{ExportArtifact, EXPORT_HEADERS};
use crate::error::{Error, Result};
use crate::types::Record;
use rust_xlsxwriter::*;

pub const EXCEL_FILE_NAME: &str = "products_export.xlsx";
pub const EXCEL_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const SHEET_NAME: &str = "Products";
const COLUMN_WIDTHS: [f64; 5] = [8.0, 40.0, 10.0, 16.0, 80.0];

fn xlsx_err(context: &str, e: XlsxError) -> Error {
    Error::Excel(format!("{}: {}", context, e))
}

/// Excelをバッファに生成
pub fn generate_excel_buffer(records: &[Record]) -> Result<Vec<u8>> {
    if records.is_empty() {
        return Err(Error::EmptyExport);
    }

    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xAAAAAA));
    let price_format = Format::new().set_num_format("0.00");

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| xlsx_err("sheet name", e))?;

    for (col, (header, width)) in EXPORT_HEADERS.iter().zip(COLUMN_WIDTHS).enumerate() {
        let col = col as u16;
        worksheet
            .set_column_width(col, width)
            .map_err(|e| xlsx_err("column width", e))?;
        worksheet
            .write_string_with_format(0, col, *header, &header_format)
            .map_err(|e| xlsx_err("header", e))?;
    }

    for (idx, record) in records.iter().enumerate() {
        let row = idx as u32 + 1;
        worksheet
            .write_number(row, 0, record.id as f64)
            .map_err(|e| xlsx_err("id", e))?;
        worksheet
            .write_string(row, 1, record.title.as_str())
            .map_err(|e| xlsx_err("title", e))?;
        worksheet
            .write_number_with_format(row, 2, record.price, &price_format)
            .map_err(|e| xlsx_err("price", e))?;
        worksheet
            .write_string(row, 3, record.category_name())
            .map_err(|e| xlsx_err("category", e))?;
        worksheet
            .write_string(row, 4, record.description.as_str())
            .map_err(|e| xlsx_err("description", e))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| xlsx_err("save", e))
}

pub fn excel_artifact(records: &[Record]) -> Result<ExportArtifact> {
    Ok(ExportArtifact {
        file_name: EXCEL_FILE_NAME,
        content_type: EXCEL_CONTENT_TYPE,
        bytes: generate_excel_buffer(records)?,
    })
}
