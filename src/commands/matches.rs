//! Matches command implementation

use crate::{Client, GroupOrderId, LeagueShortcut, Match, Result, Season, Team, TeamId};

use super::display_or_dash;

/// Handle the matches command for a league season
pub async fn handle_matches(
    client: &Client,
    league: &LeagueShortcut,
    season: Season,
    as_json: bool,
) -> Result<()> {
    let matches = client.matches_by_league_season(league, season).await?;
    print_matches(matches, as_json)
}

/// Handle the matches command restricted to one group
pub async fn handle_matches_by_group(
    client: &Client,
    group_order_id: GroupOrderId,
    league: &LeagueShortcut,
    season: Season,
    as_json: bool,
) -> Result<()> {
    let matches = client
        .matches_by_group_league_season(group_order_id, league, season)
        .await?;
    print_matches(matches, as_json)
}

/// Handle the matches command with `--upcoming`
pub async fn handle_upcoming_matches(
    client: &Client,
    league: &LeagueShortcut,
    as_json: bool,
) -> Result<()> {
    let matches = client.upcoming_matches_by_league(league).await?;
    print_matches(matches, as_json)
}

/// Handle the matches command for a head-to-head pairing
pub async fn handle_matches_by_teams(
    client: &Client,
    team1: TeamId,
    team2: TeamId,
    as_json: bool,
) -> Result<()> {
    let matches = client.matches_by_teams(team1, team2).await?;
    print_matches(matches, as_json)
}

fn print_matches(matches: Vec<Match>, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    for m in matches {
        println!("{}", match_line(&m));
    }

    Ok(())
}

/// One match as a text line: ID, kickoff with its offset, pairing,
/// final score.
pub(super) fn match_line(m: &Match) -> String {
    let kickoff = match m.date_time {
        Some(date_time) => date_time.format("%Y-%m-%d %H:%M %:z").to_string(),
        None => "-".to_string(),
    };

    format!(
        "{} {} {} vs {} {}",
        display_or_dash(m.id),
        kickoff,
        team_name(&m.team1),
        team_name(&m.team2),
        final_score(m),
    )
}

fn team_name(team: &Option<Team>) -> String {
    team.as_ref()
        .and_then(|team| team.name.as_deref())
        .unwrap_or("-")
        .to_string()
}

/// The score of the highest-order result the service reported.
fn final_score(m: &Match) -> String {
    let last = m
        .results
        .as_slice()
        .iter()
        .max_by_key(|result| result.order_id);

    match last {
        Some(result) => format!(
            "{}:{}",
            display_or_dash(result.points_team1),
            display_or_dash(result.points_team2),
        ),
        None => "-:-".to_string(),
    }
}
