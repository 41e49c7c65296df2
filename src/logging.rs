//! ログ初期化
//!
//! 開発者向けの診断ログは `tracing` で stderr に出す。
//! 表やメッセージなど利用者向けの出力は stdout に `println!` で出す。

use std::sync::Once;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// `RUST_LOG` があればそれを使い、なければ `--verbose` で debug、通常は warn。
///
/// 複数回呼んでも2回目以降は何もしない。
pub fn init_logging(verbose: bool) {
    INIT.call_once(|| {
        let default_level = if verbose { "debug" } else { "warn" };
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    });
}
