//! Catalog Common Library
//!
//! CLIとダッシュボードで共有される型・一覧ビュー状態・エクスポート

pub mod types;
pub mod images;
pub mod forms;
pub mod view;
pub mod session;
pub mod export;
pub mod error;

pub use types::{Category, CreatePayload, Record, UpdatePayload};
pub use forms::{parse_int, CreateForm, EditForm, FormField};
pub use view::{
    PageLink, Pagination, SortDirection, SortDirective, SortField, TableView, ViewState,
    DEFAULT_PAGE_SIZE,
};
pub use session::{EditSession, SessionMode};
pub use export::ExportArtifact;
pub use error::{Error, Result};
