//! Goals command implementation

use crate::{Client, Goal, LeagueShortcut, MatchId, Result, Season};

use super::display_or_dash;

/// Handle the goals command for a single match
pub async fn handle_goals_by_match(
    client: &Client,
    match_id: MatchId,
    as_json: bool,
) -> Result<()> {
    let goals = client.goals_by_match(match_id).await?;
    print_goals(goals, as_json)
}

/// Handle the goals command for a whole league season
pub async fn handle_goals_by_league(
    client: &Client,
    league: &LeagueShortcut,
    season: Season,
    as_json: bool,
) -> Result<()> {
    let goals = client.goals_by_league_season(league, season).await?;
    print_goals(goals, as_json)
}

fn print_goals(goals: Vec<Goal>, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&goals)?);
        return Ok(());
    }

    for goal in goals {
        println!("{}", goal_line(&goal));
    }

    Ok(())
}

/// One goal as a text line: minute, scorer, running score, markers.
pub(super) fn goal_line(goal: &Goal) -> String {
    let mut line = format!(
        "{}' {} {}:{}",
        display_or_dash(goal.match_minute),
        display_or_dash(goal.scorer_name.as_deref()),
        display_or_dash(goal.score_team1),
        display_or_dash(goal.score_team2),
    );

    if goal.is_penalty == Some(true) {
        line.push_str(" (penalty)");
    }
    if goal.is_own_goal == Some(true) {
        line.push_str(" (own goal)");
    }
    if goal.is_overtime == Some(true) {
        line.push_str(" (overtime)");
    }

    line
}
