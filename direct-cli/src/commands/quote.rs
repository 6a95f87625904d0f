//! Quote command.

use chrono::Utc;
use clap::Args;
use console::style;

use direct_core::config::ConfigHandle;
use direct_core::error::DirectResult;
use direct_models::{CreateQuoteRequest, Quote};

use super::{create_api_client, format_money, new_table, print_json, with_ctrl_c};
use crate::OutputFormat;

#[derive(Args)]
pub struct QuoteArgs {
    /// Pickup address.
    #[arg(long)]
    pub pickup: String,
    /// Dropoff address.
    #[arg(long)]
    pub dropoff: String,
    /// Recipient phone number (+E.164).
    #[arg(long)]
    pub dropoff_phone: Option<String>,
    /// Pickup phone number (+E.164).
    #[arg(long)]
    pub pickup_phone: Option<String>,
    /// Value of the items in minor currency units (1099 for $10.99).
    #[arg(long)]
    pub value: Option<i64>,
    /// Partner store reference.
    #[arg(long)]
    pub store_id: Option<String>,
}

impl QuoteArgs {
    fn into_request(self) -> CreateQuoteRequest {
        CreateQuoteRequest {
            dropoff_phone_number: self.dropoff_phone,
            pickup_phone_number: self.pickup_phone,
            manifest_total_value: self.value,
            external_store_id: self.store_id,
            ..CreateQuoteRequest::new(self.pickup, self.dropoff)
        }
    }
}

pub async fn run(config: ConfigHandle, args: QuoteArgs, format: OutputFormat) -> DirectResult<()> {
    let client = create_api_client(&config).await?;
    let request = args.into_request();

    let quote = with_ctrl_c(|token| async move { client.create_quote(&request, Some(&token)).await })
        .await?;

    match format {
        OutputFormat::Json => print_json(&quote)?,
        OutputFormat::Text => print_quote(&quote),
    }
    Ok(())
}

fn print_quote(quote: &Quote) {
    let mut table = new_table();
    table.set_header(vec!["Field", "Value"]);

    table.add_row(vec!["Quote ID".to_string(), quote.id.clone()]);
    table.add_row(vec!["Fee".to_string(), format_money(quote.fee, &quote.currency)]);
    if let Some(duration) = quote.duration {
        table.add_row(vec!["Duration".to_string(), format!("{duration} min")]);
    }
    if let Some(pickup) = quote.pickup_duration {
        table.add_row(vec!["Pickup in".to_string(), format!("{pickup} min")]);
    }
    if let Some(eta) = &quote.dropoff_eta {
        table.add_row(vec!["Dropoff ETA".to_string(), eta.clone()]);
    }
    if let Some(expires) = &quote.expires {
        table.add_row(vec!["Expires".to_string(), expires.clone()]);
    }

    println!("{table}");

    if quote.is_expired_at(Utc::now()) {
        println!("{}", style("Quote has already expired; request a new one.").yellow());
    } else {
        println!(
            "Book it with: {}",
            style(format!("direct deliveries create --quote-id {} ...", quote.id)).cyan()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_request_maps_flags() {
        let args = QuoteArgs {
            pickup: "A".into(),
            dropoff: "B".into(),
            dropoff_phone: Some("+15555550100".into()),
            pickup_phone: None,
            value: Some(1099),
            store_id: None,
        };
        let req = args.into_request();
        assert_eq!(req.pickup_address, "A");
        assert_eq!(req.dropoff_address, "B");
        assert_eq!(req.dropoff_phone_number.as_deref(), Some("+15555550100"));
        assert_eq!(req.manifest_total_value, Some(1099));
        assert!(req.pickup_phone_number.is_none());
    }
}
