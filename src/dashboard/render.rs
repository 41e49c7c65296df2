//! 端末向けの描画
//!
//! 一覧ビュー状態からの純粋な投影。状態は持たない。

use catalog_common::images::{PLACEHOLDER_DETAIL, PLACEHOLDER_THUMB};
use catalog_common::{
    EditSession, Pagination, Record, SessionMode, SortDirection, SortField, TableView, ViewState,
};

pub const NO_RESULTS: &str = "No products found";

const COLUMNS: [(SortField, &str, usize); 4] = [
    (SortField::Id, "ID", 6),
    (SortField::Title, "Title", 34),
    (SortField::Price, "Price", 10),
    (SortField::Category, "Category", 16),
];
const IMAGE_HEADER: &str = "Image";
const IMAGE_WIDTH: usize = 40;

/// 幅に収まるよう切り詰める（文字単位）
fn fit(value: &str, width: usize) -> String {
    let count = value.chars().count();
    if count <= width {
        format!("{:<width$}", value, width = width)
    } else {
        let cut: String = value.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

fn sort_marker(view: &ViewState, field: SortField) -> &'static str {
    match view.sort() {
        Some(s) if s.field == field => match s.direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        },
        _ => "",
    }
}

fn header_line(view: &ViewState) -> String {
    let mut cells: Vec<String> = COLUMNS
        .iter()
        .map(|(field, label, width)| fit(&format!("{}{}", label, sort_marker(view, *field)), *width))
        .collect();
    cells.push(IMAGE_HEADER.to_string());
    cells.join(" ")
}

fn row_line(record: &Record) -> String {
    let image = record.first_image().unwrap_or(PLACEHOLDER_THUMB);
    [
        fit(&record.id.to_string(), COLUMNS[0].2),
        fit(&record.title, COLUMNS[1].2),
        fit(&format!("${}", record.price), COLUMNS[2].2),
        fit(record.category_name(), COLUMNS[3].2),
        fit(image, IMAGE_WIDTH).trim_end().to_string(),
    ]
    .join(" ")
}

pub fn render_table(view: &ViewState) -> String {
    let mut out = header_line(view);
    out.push('\n');
    out.push_str(&"-".repeat(out.chars().count().saturating_sub(1)));
    out.push('\n');

    match view.table_view() {
        TableView::Rows(rows) => {
            for record in rows {
                out.push_str(&row_line(record));
                out.push('\n');
            }
        }
        TableView::NoResults => {
            out.push_str(NO_RESULTS);
            out.push('\n');
        }
    }
    out
}

/// `« Prev  1 [2] 3  Next »` 形式。無効なリンクは括弧で囲む。
pub fn render_pagination(pagination: &Pagination) -> String {
    let prev = if pagination.previous.enabled { "« Prev" } else { "(« Prev)" };
    let next = if pagination.next.enabled { "Next »" } else { "(Next »)" };

    let pages: Vec<String> = pagination
        .pages
        .iter()
        .map(|p| if p.active { format!("[{}]", p.target) } else { p.target.to_string() })
        .collect();

    if pages.is_empty() {
        format!("{}  {}", prev, next)
    } else {
        format!("{}  {}  {}", prev, pages.join(" "), next)
    }
}

pub fn render_status(view: &ViewState) -> String {
    let mut status = format!(
        "{} of {} products | page {}/{} | {} per page",
        view.filtered_set().len(),
        view.full_set().len(),
        view.page(),
        view.page_count(),
        view.page_size(),
    );
    if !view.keyword().is_empty() {
        status.push_str(&format!(" | search \"{}\"", view.keyword()));
    }
    status
}

pub fn render_detail(session: &EditSession) -> Option<String> {
    let form = session.form()?;
    let mode = match session.mode() {
        Some(SessionMode::Edit) => "editing",
        _ => "read-only",
    };
    let image = form.image.as_deref().unwrap_or(PLACEHOLDER_DETAIL);

    Some(format!(
        "Product #{} ({})\n  Title:       {}\n  Price:       {}\n  Description: {}\n  Image:       {}",
        form.id, mode, form.title, form.price, form.description, image
    ))
}

/// 表・ページング・状態行・詳細をまとめて描画
pub fn render_screen(view: &ViewState, session: &EditSession) -> String {
    let mut out = render_table(view);
    out.push_str(&render_pagination(&view.pagination()));
    out.push('\n');
    out.push_str(&render_status(view));
    out.push('\n');
    if let Some(detail) = render_detail(session) {
        out.push('\n');
        out.push_str(&detail);
        out.push('\n');
    }
    out
}
