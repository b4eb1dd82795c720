//! Journal commands: journal, summarize.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use crate::state::AppState;

/// Print the journal, optionally only the last `limit` entries.
pub async fn journal(state: &AppState, limit: Option<usize>, json: bool) -> Result<()> {
    let entries = state.session.journal().await;
    let total = entries.len();
    let start = limit.map_or(0, |n| total.saturating_sub(n));
    let shown = &entries[start..];

    if json {
        println!("{}", serde_json::to_string_pretty(shown)?);
        return Ok(());
    }

    if shown.is_empty() {
        println!();
        println!("  The journal is empty.");
        println!();
        return Ok(());
    }

    let name = &state.config.persona.name;
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("When").fg(Color::White),
            Cell::new("You").fg(Color::White),
            Cell::new(name).fg(Color::White),
        ]);

    for entry in shown {
        // Seconds are enough on screen.
        let when = entry.timestamp.split('.').next().unwrap_or(&entry.timestamp);
        table.add_row(vec![
            Cell::new(when.replace('T', " ")).fg(Color::DarkGrey),
            Cell::new(&entry.user),
            Cell::new(&entry.nova).fg(Color::Cyan),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    if shown.len() < total {
        println!(
            "  Showing {} of {} entries",
            style(shown.len()).bold(),
            style(total).bold()
        );
    } else {
        println!("  {} entries", style(total).bold());
    }
    println!();

    Ok(())
}

/// Ask the model to summarize the most recent journal entries.
pub async fn summarize(state: &AppState, json: bool) -> Result<()> {
    let result = state.session.summarize_journal().await;

    if json {
        let body = match &result {
            Ok(summary) => serde_json::json!({ "summary": summary }),
            Err(err) => serde_json::json!({ "error": err.to_string() }),
        };
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!();
    match result {
        Ok(summary) => {
            println!("  {}", style("── Recent conversations ──").dim());
            println!();
            for line in summary.lines() {
                println!("  {line}");
            }
        }
        Err(err) => {
            println!("  {} Could not summarize: {}", style("✗").red(), err);
        }
    }
    println!();

    Ok(())
}
