//! Delivery commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;
use tracing::info;

use direct_api::{decode_proof_image, ListDeliveriesQuery};
use direct_core::config::ConfigHandle;
use direct_core::error::DirectResult;
use direct_models::{
    CreateDeliveryRequest, DeliverableAction, Delivery, ItemSize, ManifestItem,
    UndeliverableAction, UpdateDeliveryRequest,
};

use super::{
    check_notes, create_api_client, format_money, new_table, print_json, truncate, with_ctrl_c,
};
use crate::OutputFormat;

/// Dropoff handling selectable from the command line.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum DropoffMode {
    /// Hand the items to the recipient.
    MeetAtDoor,
    /// Contactless; the courier takes a photo.
    LeaveAtDoor,
}

impl From<DropoffMode> for DeliverableAction {
    fn from(mode: DropoffMode) -> Self {
        match mode {
            DropoffMode::MeetAtDoor => DeliverableAction::MeetAtDoor,
            DropoffMode::LeaveAtDoor => DeliverableAction::LeaveAtDoor,
        }
    }
}

/// Fallback when the recipient cannot be reached.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum FallbackMode {
    LeaveAtDoor,
    Return,
    Discard,
}

impl From<FallbackMode> for UndeliverableAction {
    fn from(mode: FallbackMode) -> Self {
        match mode {
            FallbackMode::LeaveAtDoor => UndeliverableAction::LeaveAtDoor,
            FallbackMode::Return => UndeliverableAction::Return,
            FallbackMode::Discard => UndeliverableAction::Discard,
        }
    }
}

#[derive(Args)]
pub struct CreateArgs {
    /// Quote to book (from `direct quote`).
    #[arg(long)]
    pub quote_id: Option<String>,

    #[arg(long)]
    pub pickup_name: String,
    #[arg(long)]
    pub pickup_address: String,
    #[arg(long)]
    pub pickup_phone: String,
    #[arg(long)]
    pub pickup_notes: Option<String>,

    #[arg(long)]
    pub dropoff_name: String,
    #[arg(long)]
    pub dropoff_address: String,
    #[arg(long)]
    pub dropoff_phone: String,
    #[arg(long)]
    pub dropoff_notes: Option<String>,

    /// Manifest item as NAME[:QTY[:SIZE]]; repeat for several items.
    #[arg(long = "item", required = true, value_parser = parse_item)]
    pub items: Vec<ManifestItem>,

    /// Value of the items in minor currency units.
    #[arg(long)]
    pub value: Option<i64>,

    /// Courier tip in minor currency units.
    #[arg(long)]
    pub tip: Option<i64>,

    /// Caller-side reference for this delivery.
    #[arg(long)]
    pub external_id: Option<String>,

    #[arg(long, value_enum)]
    pub dropoff_mode: Option<DropoffMode>,

    #[arg(long, value_enum)]
    pub fallback: Option<FallbackMode>,
}

impl CreateArgs {
    fn into_request(self) -> DirectResult<CreateDeliveryRequest> {
        check_notes("pickup_notes", self.pickup_notes.as_deref())?;
        check_notes("dropoff_notes", self.dropoff_notes.as_deref())?;

        Ok(CreateDeliveryRequest {
            quote_id: self.quote_id,
            pickup_name: self.pickup_name,
            pickup_address: self.pickup_address,
            pickup_phone_number: self.pickup_phone,
            pickup_notes: self.pickup_notes,
            dropoff_name: self.dropoff_name,
            dropoff_address: self.dropoff_address,
            dropoff_phone_number: self.dropoff_phone,
            dropoff_notes: self.dropoff_notes,
            manifest_items: self.items,
            manifest_total_value: self.value,
            tip: self.tip,
            external_id: self.external_id,
            deliverable_action: self.dropoff_mode.map(Into::into),
            undeliverable_action: self.fallback.map(Into::into),
            ..Default::default()
        })
    }
}

#[derive(Subcommand)]
pub enum DeliveriesAction {
    /// Create a delivery, usually from a quote.
    Create(CreateArgs),
    /// List deliveries.
    List {
        /// Filter expression, e.g. "status:active".
        #[arg(long)]
        filter: Option<String>,
        /// Page size.
        #[arg(short = 'n', long)]
        limit: Option<u32>,
        /// Number of deliveries to skip.
        #[arg(long)]
        offset: Option<u32>,
    },
    /// Show a delivery.
    Get {
        /// Delivery ID.
        id: String,
    },
    /// Update the pickup notes of a delivery.
    Update {
        /// Delivery ID.
        id: String,
        #[arg(long)]
        pickup_notes: String,
    },
    /// Cancel a delivery.
    Cancel {
        /// Delivery ID.
        id: String,
    },
    /// Fetch the proof-of-delivery image.
    Proof {
        /// Delivery ID.
        id: String,
        /// Write the decoded PNG here instead of printing base64.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub async fn run(
    config: ConfigHandle,
    action: DeliveriesAction,
    format: OutputFormat,
) -> DirectResult<()> {
    let client = create_api_client(&config).await?;

    match action {
        DeliveriesAction::Create(args) => {
            let request = args.into_request()?;
            let delivery = with_ctrl_c(|token| async move {
                client.create_delivery(&request, Some(&token)).await
            })
            .await?;
            info!("created delivery {}", delivery.id);
            print_delivery(&delivery, format)?;
        }
        DeliveriesAction::List { filter, limit, offset } => {
            let query = ListDeliveriesQuery { filter, limit, offset };
            let page = with_ctrl_c(|token| async move {
                client.list_deliveries(&query, Some(&token)).await
            })
            .await?;

            match format {
                OutputFormat::Json => print_json(&page)?,
                OutputFormat::Text => {
                    if page.data.is_empty() {
                        println!("No deliveries found.");
                    } else {
                        let mut table = new_table();
                        table.set_header(vec!["ID", "Status", "Dropoff", "Fee", "Created"]);
                        for d in &page.data {
                            let dropoff = d
                                .dropoff
                                .as_ref()
                                .and_then(|s| s.address.as_deref())
                                .unwrap_or("-");
                            table.add_row(vec![
                                d.id.clone(),
                                d.status.clone(),
                                truncate(dropoff, 40),
                                fee_text(d),
                                d.created.clone().unwrap_or_else(|| "-".into()),
                            ]);
                        }
                        println!("{table}");
                        println!("\n{} of {} deliveries", page.data.len(), page.count);
                    }
                }
            }
        }
        DeliveriesAction::Get { id } => {
            let delivery = with_ctrl_c(|token| async move {
                client.get_delivery(&id, Some(&token)).await
            })
            .await?;
            print_delivery(&delivery, format)?;
        }
        DeliveriesAction::Update { id, pickup_notes } => {
            check_notes("pickup_notes", Some(&pickup_notes))?;
            let update = UpdateDeliveryRequest {
                pickup_notes: Some(pickup_notes),
            };
            let delivery = with_ctrl_c(|token| async move {
                client.update_delivery(&id, &update, Some(&token)).await
            })
            .await?;
            print_delivery(&delivery, format)?;
        }
        DeliveriesAction::Cancel { id } => {
            let delivery = with_ctrl_c(|token| async move {
                client.cancel_delivery(&id, Some(&token)).await
            })
            .await?;
            info!("cancel requested for delivery {}", delivery.id);
            print_delivery(&delivery, format)?;
        }
        DeliveriesAction::Proof { id, output } => {
            let body = with_ctrl_c(|token| {
                let id = id.clone();
                async move { client.proof_of_delivery(&id, Some(&token)).await }
            })
            .await?;

            match output {
                Some(path) => {
                    let bytes = decode_proof_image(&body)?;
                    std::fs::write(&path, &bytes)?;
                    match format {
                        OutputFormat::Json => print_json(&serde_json::json!({
                            "delivery_id": id,
                            "path": path.display().to_string(),
                            "bytes": bytes.len(),
                        }))?,
                        OutputFormat::Text => println!(
                            "{} Wrote {} bytes to {}",
                            style("✓").green(),
                            bytes.len(),
                            path.display()
                        ),
                    }
                }
                None => match format {
                    OutputFormat::Json => print_json(&serde_json::json!({
                        "delivery_id": id,
                        "document": body,
                    }))?,
                    OutputFormat::Text => println!("{body}"),
                },
            }
        }
    }

    Ok(())
}

fn print_delivery(delivery: &Delivery, format: OutputFormat) -> DirectResult<()> {
    if let OutputFormat::Json = format {
        return print_json(delivery);
    }

    let status = if delivery.is_complete() {
        style(delivery.status.as_str()).green()
    } else if delivery.status == "canceled" || delivery.status == "returned" {
        style(delivery.status.as_str()).red()
    } else {
        style(delivery.status.as_str()).cyan()
    };
    println!("{} {}", style(&delivery.id).bold(), status);

    let mut table = new_table();
    table.set_header(vec!["Field", "Value"]);
    let mut row = |label: &str, value: Option<String>| {
        if let Some(v) = value {
            table.add_row(vec![label.to_string(), v]);
        }
    };

    row("Quote", delivery.quote_id.clone());
    row(
        "Pickup",
        delivery.pickup.as_ref().and_then(|s| s.address.clone()),
    );
    row("Pickup ETA", delivery.pickup_eta.clone());
    row(
        "Dropoff",
        delivery.dropoff.as_ref().and_then(|s| s.address.clone()),
    );
    row("Dropoff ETA", delivery.dropoff_eta.clone());
    row("Fee", delivery.fee.map(|_| fee_text(delivery)));
    row("Tracking", delivery.tracking_url.clone());
    row("Undeliverable", delivery.undeliverable_reason.clone());
    row("Updated", delivery.updated.clone());

    println!("{table}");
    Ok(())
}

fn fee_text(delivery: &Delivery) -> String {
    match delivery.fee {
        Some(fee) => format_money(fee, delivery.currency.as_deref().unwrap_or("")),
        None => "-".into(),
    }
}

/// Parse `NAME[:QTY[:SIZE]]` into a manifest item.
fn parse_item(raw: &str) -> Result<ManifestItem, String> {
    let mut parts = raw.splitn(3, ':');
    let name = parts.next().unwrap_or_default().trim();
    if name.is_empty() {
        return Err("item name must not be empty".into());
    }

    let quantity = match parts.next() {
        Some(q) => q
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|q| *q > 0)
            .ok_or_else(|| format!("invalid quantity: {q}"))?,
        None => 1,
    };

    let mut item = ManifestItem::new(name, quantity);
    if let Some(size) = parts.next() {
        item.size = Some(size.trim().parse::<ItemSize>()?);
    }
    Ok(item)
}
