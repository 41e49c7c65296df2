//! 対話式ダッシュボード
//!
//! 1行ずつコマンドを読み、実行し、画面を描き直す。

use super::command::HELP_TEXT;
use super::{render, Command, Dashboard};
use crate::client::CatalogApi;
use crate::error::{DashboardError, Result};
use catalog_common::CreateForm;
use dialoguer::Input;

fn prompt(label: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| DashboardError::Prompt(e.to_string()))
}

/// 新規作成フォームを入力
fn prompt_create_form() -> Result<CreateForm> {
    println!("New product");
    Ok(CreateForm {
        title: prompt("  Title")?,
        price: prompt("  Price")?,
        description: prompt("  Description")?,
        category_id: prompt("  Category ID")?,
        image: prompt("  Image URL")?,
    })
}

fn print_notices<C: CatalogApi>(dashboard: &mut Dashboard<C>) {
    for notice in dashboard.take_notices() {
        println!("{}", notice);
    }
}

pub async fn run<C: CatalogApi>(dashboard: &mut Dashboard<C>) -> Result<()> {
    println!("🛒 catalog-dashboard\n");
    dashboard.reload().await;

    loop {
        println!("{}", render::render_screen(dashboard.view(), dashboard.session()));
        print_notices(dashboard);

        let line = prompt("command (help)")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("✖ {}", e);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{}\n", HELP_TEXT),
            Command::NewProduct => {
                let form = prompt_create_form()?;
                dashboard.dispatch(Command::Create(form)).await;
            }
            other => dashboard.dispatch(other).await,
        }
    }

    print_notices(dashboard);
    Ok(())
}
