//! Groups command implementation

use crate::{Client, LeagueShortcut, Result, Season};

use super::display_or_dash;

/// Handle the groups command
pub async fn handle_groups(
    client: &Client,
    league: &LeagueShortcut,
    season: Season,
    as_json: bool,
) -> Result<()> {
    let groups = client.available_groups(league, season).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    for group in groups {
        println!(
            "{} {}",
            display_or_dash(group.order_id),
            display_or_dash(group.name),
        );
    }

    Ok(())
}

/// Handle the groups command with `--current`
pub async fn handle_current_group(
    client: &Client,
    league: &LeagueShortcut,
    as_json: bool,
) -> Result<()> {
    let group = client.current_group(league).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&group)?);
        return Ok(());
    }

    println!(
        "{} {}",
        display_or_dash(group.order_id),
        display_or_dash(group.name),
    );

    Ok(())
}
