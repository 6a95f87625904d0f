//! CLI command implementations.

pub mod config;
pub mod deliveries;
pub mod quote;

use std::future::Future;

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use tracing::warn;

use direct_api::{CancelToken, DirectClient};
use direct_core::config::ConfigHandle;
use direct_core::constants::MAX_NOTES_LEN;
use direct_core::error::{DirectError, DirectResult};

/// Helper to create an API client from config.
pub async fn create_api_client(config: &ConfigHandle) -> DirectResult<DirectClient> {
    let config = config.read().await;
    config.validate()?;
    DirectClient::from_config(&config.api)
}

/// Run one client call, cancelling it when the user presses Ctrl-C.
pub async fn with_ctrl_c<T, F, Fut>(call: F) -> DirectResult<T>
where
    F: FnOnce(CancelToken) -> Fut,
    Fut: Future<Output = DirectResult<T>>,
{
    let token = CancelToken::new();
    let watcher = {
        let token = token.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("interrupted, cancelling request");
                token.cancel();
            }
        })
    };

    let result = call(token).await;
    watcher.abort();
    result
}

/// Reject notes the service would refuse.
pub fn check_notes(field: &str, notes: Option<&str>) -> DirectResult<()> {
    match notes {
        Some(n) if n.chars().count() > MAX_NOTES_LEN => Err(DirectError::Other(anyhow::anyhow!(
            "{field} is limited to {MAX_NOTES_LEN} characters"
        ))),
        _ => Ok(()),
    }
}

/// Pretty-print any payload as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> DirectResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| DirectError::Serialization(e.to_string()))?;
    println!("{json}");
    Ok(())
}

/// Table with the CLI's standard look.
pub fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Format an amount in minor units, e.g. `599` + `usd` -> `5.99 USD`.
pub fn format_money(amount: i64, currency: &str) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!(
        "{sign}{}.{:02} {}",
        abs / 100,
        abs % 100,
        currency.to_uppercase()
    )
    .trim_end()
    .to_string()
}

/// Truncate a string to a maximum number of characters, appending an
/// ellipsis if truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    } else {
        s.chars().take(max_len).collect()
    }
}
