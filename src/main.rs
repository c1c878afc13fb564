//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use fixture_tracker::{
    cli::{Commands, Tracker},
    commands::{
        comments::{handle_add_comment, handle_delete_comment, handle_edit_comment},
        matches::{handle_add_match, handle_edit_match, handle_show_match},
        round::handle_round,
        schedule::handle_schedule,
        standings::handle_standings,
        CommandContext,
    },
    storage::NewGame,
};
use tracing_subscriber::{fmt, EnvFilter};

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("tracing init failed: {e}");
    }

    let app = Tracker::parse();
    let mut ctx =
        CommandContext::from_opts(app.global).context("failed to load tournament data")?;

    match app.command {
        Commands::Schedule => handle_schedule(&ctx)?,

        Commands::Standings => handle_standings(&ctx)?,

        Commands::Round { round } => handle_round(&ctx, round)?,

        Commands::ShowMatch { match_id } => handle_show_match(&ctx, match_id)?,

        Commands::AddMatch {
            round,
            team_1,
            team_2,
            scores,
            match_time,
        } => handle_add_match(
            &mut ctx,
            NewGame {
                round_num: round,
                team_1,
                team_2,
                team_1_score: scores.team_1_score,
                team_2_score: scores.team_2_score,
                match_time: match_time.as_datetime(),
            },
        )?,

        Commands::EditMatch { match_id, scores } => handle_edit_match(&mut ctx, match_id, scores)?,

        Commands::AddComment {
            round,
            text,
            username,
        } => handle_add_comment(&mut ctx, round, text, username)?,

        Commands::EditComment { comment_id, text } => {
            handle_edit_comment(&mut ctx, comment_id, text)?
        }

        Commands::DeleteComment { comment_id, round } => {
            handle_delete_comment(&mut ctx, comment_id, round)?
        }
    }

    Ok(())
}
