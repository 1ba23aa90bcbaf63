//! Teams command implementation

use crate::{Client, LeagueShortcut, Result, Season};

use super::display_or_dash;

/// Handle the teams command
pub async fn handle_teams(
    client: &Client,
    league: &LeagueShortcut,
    season: Season,
    as_json: bool,
) -> Result<()> {
    let teams = client.teams_by_league_season(league, season).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&teams)?);
        return Ok(());
    }

    for team in teams {
        println!(
            "{} {} ({})",
            display_or_dash(team.id),
            display_or_dash(team.name),
            display_or_dash(team.short_name),
        );
    }

    Ok(())
}
