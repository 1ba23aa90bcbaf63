//! Domain entities decoded from Sportsdata responses.
//!
//! Local snake_case fields map 1:1 onto the service's PascalCase schema
//! via serde renames. Every field is optional: a field the response did
//! not carry stays `None` rather than falling back to a default, so
//! absence stays observable to callers.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use super::checkable::Checkable;
use super::wrappers::ListSlot;
use crate::cli::types::ids::{GroupOrderId, MatchId, SportId, TeamId};
use crate::cli::types::time::Season;

#[cfg(test)]
mod tests;

/// A league in one season of one sport, e.g. `bl1` in 2015.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct League {
    pub id: Option<u32>,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub season: Option<Season>,
    pub sport_id: Option<SportId>,
}

/// A sport the service carries data for.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Sport {
    pub id: Option<SportId>,
    pub name: Option<String>,
}

/// A group of matches within a season, e.g. match day 12.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Group {
    pub id: Option<u32>,
    pub name: Option<String>,
    pub order_id: Option<GroupOrderId>,
}

/// A team as listed for a league and season.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Team {
    pub id: Option<TeamId>,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub icon_url: Option<String>,
    pub group_name: Option<String>,
}

/// A goal scored in a match, with the running score after it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Goal {
    pub id: Option<u64>,
    pub match_minute: Option<u32>,
    pub score_team1: Option<u32>,
    pub score_team2: Option<u32>,
    pub scorer_id: Option<u64>,
    pub scorer_name: Option<String>,
    pub is_penalty: Option<bool>,
    pub is_own_goal: Option<bool>,
    pub is_overtime: Option<bool>,
    pub comment: Option<String>,
}

/// An intermediate or final score line of a match.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MatchResult {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub points_team1: Option<u32>,
    pub points_team2: Option<u32>,
    pub order_id: Option<u32>,
    pub description: Option<String>,
}

/// Where a match is played.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Location {
    pub id: Option<u64>,
    pub city: Option<String>,
    pub stadium: Option<String>,
}

/// One fixture, with teams, goals and score lines as far as the service
/// knows them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Match {
    pub id: Option<MatchId>,
    /// Kickoff in the service's local time. The offset it was sent with
    /// is kept as-is; see [`Match::time_zone`].
    pub date_time: Option<DateTime<FixedOffset>>,
    pub date_time_utc: Option<DateTime<Utc>>,
    pub league_id: Option<u32>,
    pub league_name: Option<String>,
    pub league_short_name: Option<String>,
    pub league_season: Option<Season>,
    pub group: Option<Group>,
    pub team1: Option<Team>,
    pub team2: Option<Team>,
    /// Goals in scoring order. The service sends a single object here
    /// when a match has exactly one goal.
    #[serde(default)]
    pub goals: ListSlot<Goal>,
    #[serde(default)]
    pub results: ListSlot<MatchResult>,
    pub location: Option<Location>,
    pub number_of_viewers: Option<u32>,
    #[serde(rename = "IsFinished")]
    pub finished: Option<bool>,
}

impl Match {
    /// Offset of the kickoff timestamp exactly as the service sent it,
    /// or `None` when the response carried no timestamp.
    pub fn time_zone(&self) -> Option<FixedOffset> {
        self.date_time.map(|dt| *dt.offset())
    }

    /// Whether the match has been played to completion. An absent flag
    /// counts as not finished.
    pub fn is_finished(&self) -> bool {
        self.finished.unwrap_or(false)
    }
}

impl Checkable for League {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn is_valid(&self) -> bool {
        !self.is_empty()
    }
}

impl Checkable for Sport {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn is_valid(&self) -> bool {
        !self.is_empty()
    }
}

impl Checkable for Group {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn is_valid(&self) -> bool {
        !self.is_empty()
    }
}

impl Checkable for Team {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn is_valid(&self) -> bool {
        !self.is_empty()
    }
}

impl Checkable for Goal {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn is_valid(&self) -> bool {
        !self.is_empty()
    }
}

impl Checkable for MatchResult {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn is_valid(&self) -> bool {
        !self.is_empty()
    }
}

impl Checkable for Location {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn is_valid(&self) -> bool {
        !self.is_empty()
    }
}

impl Checkable for Match {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn is_valid(&self) -> bool {
        !self.is_empty()
    }
}
