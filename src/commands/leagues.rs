//! Leagues command implementation

use crate::{Client, Result, SportId};

use super::display_or_dash;

/// Handle the leagues command
pub async fn handle_leagues(
    client: &Client,
    sport_id: Option<SportId>,
    as_json: bool,
) -> Result<()> {
    let leagues = match sport_id {
        Some(sport_id) => client.available_leagues_by_sport(sport_id).await?,
        None => client.available_leagues().await?,
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&leagues)?);
        return Ok(());
    }

    for league in leagues {
        println!(
            "{} {} ({}) season {}",
            display_or_dash(league.id),
            display_or_dash(league.name),
            display_or_dash(league.short_name),
            display_or_dash(league.season),
        );
    }

    Ok(())
}
