//! 詳細表示・編集セッション
//!
//! 状態遷移:
//! - Closed → Viewing(id)      `open`
//! - Viewing(id) → Editing(id) `begin_edit`
//! - Editing(id) → Closed      `complete_save` / `dismiss`
//! - Viewing(id) → Closed      `dismiss`
//!
//! 編集中もレコード本体には触れない。書き戻しはAPI経由で行い、
//! 成功後に全件を再取得する。

use crate::error::{Error, Result};
use crate::forms::{EditForm, FormField};
use crate::types::UpdatePayload;
use crate::view::ViewState;

/// 表示モード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    View,
    Edit,
}

#[derive(Debug, Clone, Default, PartialEq)]
enum SessionState {
    #[default]
    Closed,
    Viewing(EditForm),
    Editing(EditForm),
}

/// 詳細/編集セッション
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditSession {
    state: SessionState,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// レコードを開いて閲覧モードにする
    ///
    /// `id` が全件に存在しなければ `NotFound`（状態は変えない）。
    pub fn open(&mut self, view: &ViewState, id: i64) -> Result<()> {
        let record = view.find(id).ok_or(Error::NotFound(id))?;
        self.state = SessionState::Viewing(EditForm::from_record(record));
        Ok(())
    }

    pub fn begin_edit(&mut self) -> Result<()> {
        match std::mem::take(&mut self.state) {
            SessionState::Viewing(form) => {
                self.state = SessionState::Editing(form);
                Ok(())
            }
            other => {
                let reason = match other {
                    SessionState::Editing(_) => "already editing",
                    _ => "no product is open",
                };
                self.state = other;
                Err(Error::InvalidTransition(reason))
            }
        }
    }

    /// 編集モードでのみ値を変更できる
    pub fn set_field(&mut self, field: FormField, value: String) -> Result<()> {
        match &mut self.state {
            SessionState::Editing(form) => {
                form.set(field, value);
                Ok(())
            }
            SessionState::Viewing(_) => Err(Error::InvalidTransition("fields are read-only until edit")),
            SessionState::Closed => Err(Error::InvalidTransition("no product is open")),
        }
    }

    /// 保存用の (id, payload) を作る。状態は変えない。
    pub fn prepare_save(&self) -> Result<(i64, UpdatePayload)> {
        match &self.state {
            SessionState::Editing(form) => Ok((form.id, form.to_payload())),
            _ => Err(Error::InvalidTransition("save requires edit mode")),
        }
    }

    /// 書き戻し成功後に閉じる
    pub fn complete_save(&mut self) {
        self.state = SessionState::Closed;
    }

    pub fn dismiss(&mut self) {
        self.state = SessionState::Closed;
    }

    pub fn target_id(&self) -> Option<i64> {
        self.form().map(|f| f.id)
    }

    pub fn mode(&self) -> Option<SessionMode> {
        match self.state {
            SessionState::Closed => None,
            SessionState::Viewing(_) => Some(SessionMode::View),
            SessionState::Editing(_) => Some(SessionMode::Edit),
        }
    }

    pub fn form(&self) -> Option<&EditForm> {
        match &self.state {
            SessionState::Closed => None,
            SessionState::Viewing(form) | SessionState::Editing(form) => Some(form),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, SessionState::Closed)
    }
}
