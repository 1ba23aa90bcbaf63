//! The Sportsdata response model: entities, list wrappers and the
//! checks applied to every bound response payload.

pub mod binder;
pub mod checkable;
pub mod entities;
pub mod operation;
pub mod wrappers;

pub use checkable::Checkable;
pub use entities::{Goal, Group, League, Location, Match, MatchResult, Sport, Team};
pub use operation::Operation;
pub use wrappers::{
    ArrayOfGoals, ArrayOfGroups, ArrayOfLeagues, ArrayOfMatchResults, ArrayOfMatches,
    ArrayOfSports, ArrayOfTeams, ListSlot,
};
