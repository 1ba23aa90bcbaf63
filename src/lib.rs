//! OpenLigaDB Sportsdata Client Library
//!
//! A typed Rust client for the OpenLigaDB Sportsdata service, binding
//! its JSON response envelopes into checked entity graphs.
//!
//! ## Features
//!
//! - **Typed Façade**: one async method per remote operation
//! - **Tolerant Binding**: optional fields, singular-or-list slots, unknown fields ignored
//! - **Checked Payloads**: empty and invalid responses surface as dedicated errors
//! - **Pluggable Transport**: the HTTP layer sits behind a trait, so tests script it
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use openligadb::{Client, LeagueShortcut, Season, TransportConfig};
//!
//! # async fn example() -> openligadb::Result<()> {
//! let client = Client::with_config(TransportConfig::default())?;
//!
//! let teams = client
//!     .teams_by_league_season(&LeagueShortcut::new("bl1"), Season::new(2015))
//!     .await?;
//! for team in teams {
//!     println!("{:?}", team.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a different service endpoint:
//! ```bash
//! export OPENLIGADB_ENDPOINT=https://www.openligadb.de/Webservices/Sportsdata.asmx
//! ```

pub mod cli;
pub mod client;
pub mod commands;
pub mod error;
pub mod sportsdata;
pub mod transport;

// Re-export commonly used types
pub use cli::types::{GroupOrderId, LeagueShortcut, MatchId, Season, SportId, TeamId};
pub use client::Client;
pub use error::{LigaError, Result};
pub use sportsdata::{
    ArrayOfGoals, ArrayOfGroups, ArrayOfLeagues, ArrayOfMatchResults, ArrayOfMatches,
    ArrayOfSports, ArrayOfTeams, Checkable, Goal, Group, League, ListSlot, Location, Match,
    MatchResult, Operation, Sport, Team,
};
pub use transport::{HttpTransport, Transport, TransportConfig, DEFAULT_ENDPOINT};

pub const ENDPOINT_ENV_VAR: &str = "OPENLIGADB_ENDPOINT";
