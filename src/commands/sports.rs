//! Sports command implementation

use crate::{Client, Result};

use super::display_or_dash;

/// Handle the sports command
pub async fn handle_sports(client: &Client, as_json: bool) -> Result<()> {
    let sports = client.available_sports().await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&sports)?);
        return Ok(());
    }

    for sport in sports {
        println!(
            "{} {}",
            display_or_dash(sport.id),
            display_or_dash(sport.name),
        );
    }

    Ok(())
}
