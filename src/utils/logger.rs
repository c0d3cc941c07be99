use crate::config::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("portfolio_site=debug,info")
        } else {
            EnvFilter::new("portfolio_site=info")
        }
    })
}

/// Installs the compact console subscriber. Returns `false` if a global
/// subscriber was already set.
pub fn init_logger(verbose: bool) -> bool {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .is_ok()
}

/// JSON 格式，給收集結構化日誌的託管環境使用
pub fn init_json_logger() -> bool {
    tracing_subscriber::registry()
        .with(default_filter(false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .try_init()
        .is_ok()
}

/// 依設定檔的 `[logging]` 區段初始化；沒有設定時使用精簡格式
pub fn init_from_config(config: Option<&LoggingConfig>) -> bool {
    match config {
        Some(logging) if logging.json.unwrap_or(false) => init_json_logger(),
        Some(logging) => init_logger(logging.verbose()),
        None => init_logger(false),
    }
}
