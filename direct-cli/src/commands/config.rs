//! Configuration commands.

use std::path::Path;

use clap::Subcommand;
use console::style;

use direct_core::config::{ConfigHandle, DirectConfig};
use direct_core::error::{DirectError, DirectResult};

use super::{new_table, print_json};
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration (token masked).
    Show,
    /// Write a configuration file.
    Init {
        /// Customer ID to store.
        #[arg(long)]
        customer_id: Option<String>,
        /// API origin to store.
        #[arg(long)]
        base_url: Option<String>,
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

pub async fn run(
    config: ConfigHandle,
    action: ConfigAction,
    path: &Path,
    format: OutputFormat,
) -> DirectResult<()> {
    match action {
        ConfigAction::Show => {
            let masked = masked(&*config.read().await);
            match format {
                OutputFormat::Json => print_json(&masked)?,
                OutputFormat::Text => {
                    println!("{} {}", style("Config file:").bold(), path.display());
                    let mut table = new_table();
                    table.set_header(vec!["Key", "Value"]);
                    table.add_row(vec!["api.base_url".to_string(), masked.api.base_url.clone()]);
                    table.add_row(vec!["api.customer_id".to_string(), masked.api.customer_id.clone()]);
                    table.add_row(vec!["api.access_token".to_string(), masked.api.access_token.clone()]);
                    table.add_row(vec!["api.timeout_ms".to_string(), masked.api.timeout_ms.to_string()]);
                    table.add_row(vec![
                        "api.connect_timeout_ms".to_string(),
                        masked.api.connect_timeout_ms.to_string(),
                    ]);
                    table.add_row(vec!["logging.level".to_string(), masked.logging.level.clone()]);
                    table.add_row(vec!["logging.directory".to_string(), masked.logging.directory.clone()]);
                    table.add_row(vec![
                        "logging.json_output".to_string(),
                        masked.logging.json_output.to_string(),
                    ]);
                    println!("{table}");
                }
            }
        }
        ConfigAction::Init { customer_id, base_url, force } => {
            if path.exists() && !force {
                return Err(DirectError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }

            let file_config = init_contents(path, customer_id, base_url)?;
            file_config.save_to_file(path)?;
            println!("{} Wrote {}", style("✓").green(), path.display());
        }
    }

    Ok(())
}

/// File contents for `config init`: the file on disk (or defaults) plus the
/// explicit flags. Environment and `--token` overrides never reach the file.
fn init_contents(
    path: &Path,
    customer_id: Option<String>,
    base_url: Option<String>,
) -> DirectResult<DirectConfig> {
    let mut file_config = if path.exists() {
        DirectConfig::load_from_file(path)?
    } else {
        DirectConfig::default()
    };
    if let Some(id) = customer_id {
        file_config.api.customer_id = id;
    }
    if let Some(url) = base_url {
        file_config.api.base_url = DirectConfig::sanitize_base_url(&url);
    }
    Ok(file_config)
}

/// Copy of the config safe to print.
fn masked(config: &DirectConfig) -> DirectConfig {
    let mut copy = config.clone();
    if !copy.api.access_token.is_empty() {
        copy.api.access_token = "********".into();
    }
    copy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_hides_token() {
        let mut cfg = DirectConfig::default();
        cfg.api.access_token = "secret".into();
        assert_eq!(masked(&cfg).api.access_token, "********");

        cfg.api.access_token.clear();
        assert_eq!(masked(&cfg).api.access_token, "");
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let handle = ConfigHandle::new(DirectConfig::default());
        let action = ConfigAction::Init { customer_id: None, base_url: None, force: false };
        let err = run(handle, action, &path, OutputFormat::Text).await.unwrap_err();
        assert!(matches!(err, DirectError::Config(_)));
    }

    #[tokio::test]
    async fn test_init_does_not_persist_runtime_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut effective = DirectConfig::default();
        effective.apply_overrides(|key| match key {
            "DIRECT_ACCESS_TOKEN" => Some("env-secret".into()),
            "DIRECT_BASE_URL" => Some("https://env.example.com".into()),
            _ => None,
        });
        effective.api.customer_id = "cust_env".into();
        let handle = ConfigHandle::new(effective);

        let action = ConfigAction::Init {
            customer_id: Some("cust_flag".into()),
            base_url: None,
            force: false,
        };
        run(handle, action, &path, OutputFormat::Text).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("env-secret"));
        assert!(!raw.contains("env.example.com"));
        let loaded = DirectConfig::load_from_file(&path).unwrap();
        assert!(loaded.api.access_token.is_empty());
        assert_eq!(loaded.api.customer_id, "cust_flag");
        assert_eq!(loaded.api.base_url, DirectConfig::default().api.base_url);
    }

    #[tokio::test]
    async fn test_init_force_keeps_existing_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut on_disk = DirectConfig::default();
        on_disk.api.customer_id = "cust_disk".into();
        on_disk.logging.level = "debug".into();
        on_disk.save_to_file(&path).unwrap();

        let handle = ConfigHandle::new(DirectConfig::default());
        let action = ConfigAction::Init {
            customer_id: None,
            base_url: Some("https://sandbox.example.com".into()),
            force: true,
        };
        run(handle, action, &path, OutputFormat::Text).await.unwrap();

        let loaded = DirectConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.api.customer_id, "cust_disk");
        assert_eq!(loaded.logging.level, "debug");
        assert_eq!(loaded.api.base_url, "https://sandbox.example.com");
    }

    #[tokio::test]
    async fn test_init_writes_customer_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let handle = ConfigHandle::new(DirectConfig::default());
        let action = ConfigAction::Init {
            customer_id: Some("cust_9".into()),
            base_url: Some("https://sandbox.example.com/".into()),
            force: false,
        };
        run(handle, action, &path, OutputFormat::Text).await.unwrap();

        let loaded = DirectConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.api.customer_id, "cust_9");
        assert_eq!(loaded.api.base_url, "https://sandbox.example.com");
    }
}
