//! ダッシュボード本体
//!
//! 一覧ビュー状態・詳細/編集セッション・新規作成フォームを所有し、
//! コマンドを受けて状態を更新する。失敗はすべて発生した操作の中で
//! 利用者向けの `Notice` 1件に変換し、それ以上は伝播させない。

pub mod command;
pub mod render;
pub mod repl;

pub use command::Command;

use crate::client::CatalogApi;
use crate::error::DashboardError;
use crate::export::{self, ExportFormat};
use catalog_common::{
    CreateForm, EditSession, Error as CatalogError, FormField, SortField, ViewState,
};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::{debug, error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// 利用者向けメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.level {
            NoticeLevel::Info => "-",
            NoticeLevel::Success => "✔",
            NoticeLevel::Error => "✖",
        };
        write!(f, "{} {}", prefix, self.message)
    }
}

pub const MSG_LOAD_FAILED: &str = "Could not load product data!";
pub const MSG_UPDATED: &str = "Updated successfully!";
pub const MSG_UPDATE_FAILED: &str = "Failed to update!";
pub const MSG_CREATED: &str = "Created successfully!";
pub const MSG_CREATE_FAILED: &str = "Failed to create!";
pub const MSG_UNEXPECTED: &str = "An error occurred.";
pub const MSG_NOTHING_TO_EXPORT: &str = "No data to export!";

pub struct Dashboard<C: CatalogApi> {
    client: C,
    view: ViewState,
    session: EditSession,
    create_form: CreateForm,
    export_dir: PathBuf,
    notices: Vec<Notice>,
}

impl<C: CatalogApi> Dashboard<C> {
    pub fn new(client: C, page_size: NonZeroUsize, export_dir: PathBuf) -> Self {
        Self {
            client,
            view: ViewState::new(page_size),
            session: EditSession::new(),
            create_form: CreateForm::default(),
            export_dir,
            notices: Vec::new(),
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn create_form(&self) -> &CreateForm {
        &self.create_form
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// 溜まった通知を取り出す
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// コマンドを実行
    ///
    /// `Help` / `Quit` / `NewProduct` は入力側で扱うため、ここでは何もしない。
    pub async fn dispatch(&mut self, command: Command) {
        debug!(?command, "dispatch");
        match command {
            Command::Search(keyword) => self.search(&keyword),
            Command::ClearSearch => self.search(""),
            Command::Sort(field) => self.sort(field),
            Command::PageSize(size) => self.view.set_page_size(size),
            Command::GoToPage(page) => self.view.go_to_page(page),
            Command::NextPage => self.follow_link(false),
            Command::PrevPage => self.follow_link(true),
            Command::Open(id) => self.open(id),
            Command::Edit => self.begin_edit(),
            Command::Set(field, value) => self.set_field(field, value),
            Command::Save => self.save().await,
            Command::Close => self.session.dismiss(),
            Command::Create(form) => {
                self.create_form = form;
                self.submit_create().await;
            }
            Command::Export(format) => self.export(format),
            Command::Reload => self.reload().await,
            Command::NewProduct | Command::Help | Command::Quit => {}
        }
    }

    /// 全件を再取得して一覧を置き換える
    pub async fn reload(&mut self) {
        match self.client.fetch_all().await {
            Ok(records) => {
                debug!(count = records.len(), "catalog reloaded");
                self.view.replace_all(records);
            }
            Err(e) => {
                error!(error = %e, "failed to load products");
                self.notify(Notice::error(MSG_LOAD_FAILED));
            }
        }
    }

    pub fn search(&mut self, keyword: &str) {
        self.view.apply_search(keyword);
    }

    pub fn sort(&mut self, field: SortField) {
        self.view.apply_sort(field, true);
    }

    /// 前へ/次へリンクを辿る（無効なリンクは押せない）
    fn follow_link(&mut self, previous: bool) {
        let pagination = self.view.pagination();
        let link = if previous { pagination.previous } else { pagination.next };
        if link.enabled {
            self.view.go_to_page(link.target);
        } else {
            self.notify(Notice::info("No more pages in that direction"));
        }
    }

    /// 詳細を開く。存在しないIDは何も表示しない。
    pub fn open(&mut self, id: i64) {
        if let Err(e) = self.session.open(&self.view, id) {
            debug!(id, error = %e, "detail not opened");
        }
    }

    pub fn begin_edit(&mut self) {
        if let Err(e) = self.session.begin_edit() {
            self.notify(Notice::info(e.to_string()));
        }
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        if let Err(e) = self.session.set_field(field, value) {
            self.notify(Notice::info(e.to_string()));
        }
    }

    /// 編集内容を書き戻す
    ///
    /// 成功: 閉じて全件再取得。失敗: 編集モードのまま通知。
    pub async fn save(&mut self) {
        let (id, payload) = match self.session.prepare_save() {
            Ok(prepared) => prepared,
            Err(e) => {
                self.notify(Notice::info(e.to_string()));
                return;
            }
        };

        match self.client.update(id, &payload).await {
            Ok(()) => {
                self.notify(Notice::success(MSG_UPDATED));
                self.session.complete_save();
                self.reload().await;
            }
            Err(e) => {
                warn!(id, error = %e, "update failed");
                self.notify(Notice::error(write_failure_message(&e, MSG_UPDATE_FAILED)));
            }
        }
    }

    /// 新規作成フォームを送信
    pub async fn submit_create(&mut self) {
        let payload = self.create_form.to_payload();

        match self.client.create(&payload).await {
            Ok(()) => {
                self.notify(Notice::success(MSG_CREATED));
                self.create_form.reset();
                self.reload().await;
            }
            Err(e) => {
                warn!(title = %payload.title, error = %e, "create failed");
                self.notify(Notice::error(write_failure_message(&e, MSG_CREATE_FAILED)));
            }
        }
    }

    /// 検索後の集合をエクスポート先に保存
    pub fn export(&mut self, format: ExportFormat) {
        let records = self.view.filtered_set();
        let count = records.len();
        match export::export_records(records, format, &self.export_dir) {
            Ok(path) => {
                self.notify(Notice::success(format!(
                    "Exported {} products to {}",
                    count,
                    path.display()
                )));
            }
            Err(DashboardError::Catalog(CatalogError::EmptyExport)) => {
                self.notify(Notice::info(MSG_NOTHING_TO_EXPORT));
            }
            Err(e) => {
                error!(error = %e, "export failed");
                self.notify(Notice::error(format!("Export failed: {}", e)));
            }
        }
    }
}

/// ステータスでの失敗と通信自体の失敗で文言を分ける
fn write_failure_message(error: &DashboardError, status_message: &str) -> String {
    match error {
        DashboardError::Request { .. } => status_message.to_string(),
        _ => MSG_UNEXPECTED.to_string(),
    }
}
