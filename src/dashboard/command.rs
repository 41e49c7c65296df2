//! ダッシュボード操作コマンド
//!
//! 画面イベントの代わりに、名前付き操作を型付き引数で表す。
//! 対話モードでは1行の入力をここでパースする。

use crate::error::{DashboardError, Result};
use crate::export::ExportFormat;
use catalog_common::{CreateForm, FormField, SortField};
use std::num::NonZeroUsize;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// タイトル検索
    Search(String),
    /// 検索を解除
    ClearSearch,
    /// 列ヘッダのクリック相当（同じ列なら方向を反転）
    Sort(SortField),
    PageSize(NonZeroUsize),
    GoToPage(usize),
    NextPage,
    PrevPage,
    /// 詳細を開く
    Open(i64),
    /// 編集モードへ
    Edit,
    /// 編集中の項目を変更
    Set(FormField, String),
    Save,
    /// 詳細を閉じる（編集中ならキャンセル）
    Close,
    /// 入力済みフォームで新規作成
    Create(CreateForm),
    /// 対話的に新規作成フォームを入力
    NewProduct,
    Export(ExportFormat),
    Reload,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  search <keyword>          filter by title (case-insensitive)
  clear                     clear the search
  sort <field>              sort by id|title|price|description|category (repeat to flip)
  size <n>                  items per page
  page <n> | next | prev    pagination
  open <id>                 show product detail
  edit                      unlock the open product for editing
  set <title|price|desc> <value>
  save                      write the edited product back
  close                     close the detail view
  new                       create a product
  export [csv|excel]        export the filtered products
  reload                    fetch the catalog again
  help | quit";

fn invalid(line: &str) -> DashboardError {
    DashboardError::InvalidCommand(line.trim().to_string())
}

fn parse_number<T: std::str::FromStr>(arg: &str, line: &str) -> Result<T> {
    arg.trim().parse().map_err(|_| invalid(line))
}

impl Command {
    /// 1行の入力をコマンドにする
    pub fn parse(line: &str) -> Result<Command> {
        // 検索語は部分一致するので末尾の空白も語の一部として残す
        let leading = line.trim_start();
        let (word, raw_rest) = match leading.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim_start()),
            None => (leading.trim_end(), ""),
        };
        let rest = raw_rest.trim_end();

        let command = match (word.to_lowercase().as_str(), rest) {
            ("search" | "s", _) if !rest.is_empty() => Command::Search(raw_rest.to_string()),
            ("search" | "s", _) | ("clear", "") => Command::ClearSearch,
            ("sort", field) if !field.is_empty() => Command::Sort(field.parse()?),
            ("size", n) if !n.is_empty() => {
                let size: usize = parse_number(n, line)?;
                Command::PageSize(NonZeroUsize::new(size).ok_or_else(|| invalid(line))?)
            }
            ("page" | "p", n) if !n.is_empty() => Command::GoToPage(parse_number(n, line)?),
            ("next" | "n", "") => Command::NextPage,
            ("prev" | "previous", "") => Command::PrevPage,
            ("open" | "o", id) if !id.is_empty() => Command::Open(parse_number(id, line)?),
            ("edit" | "e", "") => Command::Edit,
            ("set", args) => {
                let (field, value) = args.split_once(char::is_whitespace).unwrap_or((args, ""));
                if field.is_empty() {
                    return Err(invalid(line));
                }
                Command::Set(field.parse()?, value.trim().to_string())
            }
            ("save", "") => Command::Save,
            ("close" | "cancel", "") => Command::Close,
            ("new" | "create", "") => Command::NewProduct,
            ("export", "") => Command::Export(ExportFormat::Csv),
            ("export", format) => Command::Export(format.parse().map_err(|_| invalid(line))?),
            ("reload" | "r", "") => Command::Reload,
            ("help" | "h" | "?", _) => Command::Help,
            ("quit" | "exit" | "q", "") => Command::Quit,
            _ => return Err(invalid(line)),
        };
        Ok(command)
    }
}
