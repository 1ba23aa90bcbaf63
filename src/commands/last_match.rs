//! Last match command implementation

use crate::{Client, LeagueShortcut, Result};

use super::goals::goal_line;
use super::matches::match_line;

/// Handle the last-match command
pub async fn handle_last_match(
    client: &Client,
    league: &LeagueShortcut,
    as_json: bool,
) -> Result<()> {
    let m = client.last_match(league).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&m)?);
        return Ok(());
    }

    println!("{}", match_line(&m));
    for goal in m.goals.as_slice() {
        println!("  {}", goal_line(goal));
    }

    Ok(())
}
