//! Type-safe wrappers for OpenLigaDB request parameters.

pub mod ids;
pub mod time;

pub use ids::{GroupOrderId, LeagueShortcut, MatchId, SportId, TeamId};
pub use time::Season;
