//! Conversation commands: ask, history, clear-history.

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use nova_core::session::TurnOutcome;

use crate::state::AppState;

/// Send one message through the full pipeline and print the reply.
pub async fn ask(state: &AppState, message: &str, json: bool) -> Result<()> {
    let outcome = state.session.respond(message).await;
    let name = &state.config.persona.name;

    if json {
        let body = match &outcome {
            TurnOutcome::Replied {
                reply,
                mood,
                remembered,
            } => serde_json::json!({
                "response": reply,
                "mood": mood,
                "remembered": remembered,
            }),
            TurnOutcome::Snag { reply, cause } => serde_json::json!({
                "response": reply,
                "error": cause.to_string(),
            }),
        };
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!();
    match &outcome {
        TurnOutcome::Replied {
            reply,
            mood,
            remembered,
        } => {
            println!(
                "  {} {}",
                style(format!("{name}:")).cyan().bold(),
                reply
            );
            println!();
            println!("  {}", style(format!("mood: {mood}")).dim());
            if *remembered {
                println!("  {} Saved to memory", style("✓").green());
            }
        }
        TurnOutcome::Snag { reply, cause } => {
            println!("  {} {}", style("✗").red(), reply);
            if cause.is_transient() {
                println!("  {}", style("The model may just be busy. Try again shortly.").dim());
            }
        }
    }
    println!();

    Ok(())
}

/// Print the rolling chat history.
pub async fn history(state: &AppState, json: bool) -> Result<()> {
    let turns = state.session.history().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&turns)?);
        return Ok(());
    }

    if turns.is_empty() {
        println!();
        println!("  No chat history yet.");
        println!(
            "  Say hi with: {}",
            style("nova ask \"hello\"").yellow()
        );
        println!();
        return Ok(());
    }

    let name = &state.config.persona.name;
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#").fg(Color::White),
            Cell::new("You").fg(Color::White),
            Cell::new(name).fg(Color::White),
        ]);

    for (i, turn) in turns.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1).fg(Color::DarkGrey),
            Cell::new(&turn.user),
            Cell::new(&turn.nova).fg(Color::Cyan),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!("  {} turns", style(turns.len()).bold());
    println!();

    Ok(())
}

/// Empty the rolling chat history.
pub async fn clear_history(state: &AppState, json: bool) -> Result<()> {
    state
        .session
        .clear_history()
        .await
        .context("failed to clear chat history")?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "status": "History cleared" }))?
        );
    } else {
        println!();
        println!("  {} History cleared", style("✓").green().bold());
        println!("  {}", style("The journal was left untouched.").dim());
        println!();
    }

    Ok(())
}
