//! Non-interactive event listing.

use anyhow::{Result, anyhow};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use turnstile_core::api::ApiClient;
use turnstile_core::filter::{EventFilter, filter_events};

/// Fetches the collection and prints the filtered subset as a table, using
/// the same pure filter as the interactive events view.
pub async fn list(
    api: &ApiClient,
    search: Option<String>,
    category: Option<String>,
) -> Result<()> {
    let events = api
        .list_events()
        .await
        .map_err(|err| anyhow!("Could not list events: {}", err.message()))?;

    let filter = EventFilter {
        search: search.unwrap_or_default(),
        category,
    };
    let visible = filter_events(&events, &filter);

    if visible.is_empty() {
        println!("No events found.");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(["ID", "Title", "Date", "Location", "Category", "Price"]);

    for event in visible {
        table.add_row([
            event.id.to_string(),
            event.title.clone(),
            event.date.format("%Y-%m-%d %H:%M").to_string(),
            event.location.clone(),
            event.category.clone(),
            format!("${:.2}", event.price),
        ]);
    }

    println!("{table}");
    Ok(())
}
