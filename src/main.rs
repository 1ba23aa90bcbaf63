//! Entry point: parse CLI, set up logging, dispatch to command handlers.

use clap::Parser;
use openligadb::{
    cli::{Commands, OpenLigaDb},
    commands::{
        build_client,
        goals::{handle_goals_by_league, handle_goals_by_match},
        groups::{handle_current_group, handle_groups},
        last_match::handle_last_match,
        leagues::handle_leagues,
        matches::{
            handle_matches, handle_matches_by_group, handle_matches_by_teams,
            handle_upcoming_matches,
        },
        sports::handle_sports,
        teams::handle_teams,
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let app = OpenLigaDb::parse();
    let client = build_client(app.endpoint)?;

    match app.command {
        Commands::Leagues { sport_id, json } => handle_leagues(&client, sport_id, json).await?,

        Commands::Sports { json } => handle_sports(&client, json).await?,

        Commands::Groups {
            selection,
            current,
            json,
        } => {
            if current {
                handle_current_group(&client, &selection.league, json).await?
            } else {
                handle_groups(&client, &selection.league, selection.season, json).await?
            }
        }

        Commands::Goals {
            match_id,
            league,
            season,
            json,
        } => match (match_id, league) {
            (Some(match_id), None) => handle_goals_by_match(&client, match_id, json).await?,

            (None, Some(league)) => handle_goals_by_league(&client, &league, season, json).await?,

            (Some(_), Some(_)) => {
                eprintln!("Error: Cannot specify both --match-id and --league at the same time");
                std::process::exit(1);
            }

            (None, None) => {
                eprintln!("Error: Specify either --match-id or --league");
                std::process::exit(1);
            }
        },

        Commands::Matches {
            league,
            season,
            group_order_id,
            team1,
            team2,
            upcoming,
            json,
        } => match (league, team1, team2) {
            (None, Some(team1), Some(team2)) => {
                handle_matches_by_teams(&client, team1, team2, json).await?
            }

            (Some(league), None, None) => {
                if upcoming {
                    handle_upcoming_matches(&client, &league, json).await?
                } else if let Some(group_order_id) = group_order_id {
                    handle_matches_by_group(&client, group_order_id, &league, season, json).await?
                } else {
                    handle_matches(&client, &league, season, json).await?
                }
            }

            _ => {
                eprintln!("Error: Specify either --league or a full --team1/--team2 pairing");
                std::process::exit(1);
            }
        },

        Commands::Teams { selection, json } => {
            handle_teams(&client, &selection.league, selection.season, json).await?
        }

        Commands::LastMatch { league, json } => handle_last_match(&client, &league, json).await?,
    }

    Ok(())
}

fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_none() {
        // Set the RUST_LOG, if it hasn't been explicitly defined
        std::env::set_var("RUST_LOG", "openligadb=info");
    }

    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_target(false)
        .compact();
    tracing_subscriber::fmt()
        .event_format(format)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
