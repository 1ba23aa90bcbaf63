//! List wrappers mirroring the service's `ArrayOf*` response types.
//!
//! Each wrapper carries exactly one named slot. A wrapper is *empty*
//! when its slot was never populated, and *valid* when the slot holds
//! list-shaped data; a present zero-length list is valid and non-empty.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::checkable::Checkable;
use super::entities::{Goal, Group, League, Match, MatchResult, Sport, Team};


/// The single slot every list wrapper carries.
///
/// The service fills the slot with a list, collapses it to a single
/// object when only one element exists, or omits it entirely. Anything
/// else is recorded as malformed so the dispatcher can reject it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ListSlot<T> {
    /// A list of elements, possibly zero-length.
    Items(Vec<T>),
    /// A single element where a list was expected.
    One(T),
    /// The slot was missing or `null`.
    Absent,
    /// The slot held something that is neither a list nor an element.
    Malformed(Value),
}

impl<T> ListSlot<T> {
    /// True when the slot was never populated.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// True when the slot holds list-shaped data. A singular element
    /// counts as a one-element list.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::Items(_) | Self::One(_))
    }

    /// Borrow the slot's elements in response order, with a singular
    /// element viewed as a one-element slice.
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::Items(items) => items,
            Self::One(item) => std::slice::from_ref(item),
            Self::Absent | Self::Malformed(_) => &[],
        }
    }

    /// The slot's elements in response order, with a singular element
    /// promoted to a one-element list. Absent and malformed slots yield
    /// nothing.
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Items(items) => items,
            Self::One(item) => vec![item],
            Self::Absent | Self::Malformed(_) => Vec::new(),
        }
    }
}

impl<T> Default for ListSlot<T> {
    fn default() -> Self {
        Self::Absent
    }
}

/// Response wrapper for `GetAvailLeagues` and `GetAvailLeaguesBySports`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ArrayOfLeagues {
    #[serde(rename = "League", default)]
    pub league: ListSlot<League>,
}

impl ArrayOfLeagues {
    /// Consume the wrapper, yielding its leagues in response order.
    pub fn into_leagues(self) -> Vec<League> {
        self.league.into_items()
    }
}

/// Response wrapper for `GetAvailSports`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ArrayOfSports {
    #[serde(rename = "Sport", default)]
    pub sport: ListSlot<Sport>,
}

impl ArrayOfSports {
    pub fn into_sports(self) -> Vec<Sport> {
        self.sport.into_items()
    }
}

/// Response wrapper for `GetAvailGroups`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ArrayOfGroups {
    #[serde(rename = "Group", default)]
    pub group: ListSlot<Group>,
}

impl ArrayOfGroups {
    pub fn into_groups(self) -> Vec<Group> {
        self.group.into_items()
    }
}

/// Response wrapper for `GetTeamsByLeagueSaison`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ArrayOfTeams {
    #[serde(rename = "Team", default)]
    pub team: ListSlot<Team>,
}

impl ArrayOfTeams {
    pub fn into_teams(self) -> Vec<Team> {
        self.team.into_items()
    }
}

/// Response wrapper for the matchdata operations. The slot keeps the
/// service's `Matchdata` spelling.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ArrayOfMatches {
    #[serde(rename = "Matchdata", default)]
    pub matchdata: ListSlot<Match>,
}

impl ArrayOfMatches {
    pub fn into_matches(self) -> Vec<Match> {
        self.matchdata.into_items()
    }
}

/// Response wrapper for `GetGoalsByMatch` and `GetGoalsByLeagueSaison`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ArrayOfGoals {
    #[serde(rename = "Goal", default)]
    pub goal: ListSlot<Goal>,
}

impl ArrayOfGoals {
    pub fn into_goals(self) -> Vec<Goal> {
        self.goal.into_items()
    }
}

/// Wrapper for score-line lists as the service frames them in nested
/// positions.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ArrayOfMatchResults {
    #[serde(rename = "MatchResult", default)]
    pub match_result: ListSlot<MatchResult>,
}

impl ArrayOfMatchResults {
    pub fn into_match_results(self) -> Vec<MatchResult> {
        self.match_result.into_items()
    }
}

impl Checkable for ArrayOfLeagues {
    fn is_empty(&self) -> bool {
        self.league.is_absent()
    }

    fn is_valid(&self) -> bool {
        self.league.is_list()
    }
}

impl Checkable for ArrayOfSports {
    fn is_empty(&self) -> bool {
        self.sport.is_absent()
    }

    fn is_valid(&self) -> bool {
        self.sport.is_list()
    }
}

impl Checkable for ArrayOfGroups {
    fn is_empty(&self) -> bool {
        self.group.is_absent()
    }

    fn is_valid(&self) -> bool {
        self.group.is_list()
    }
}

impl Checkable for ArrayOfTeams {
    fn is_empty(&self) -> bool {
        self.team.is_absent()
    }

    fn is_valid(&self) -> bool {
        self.team.is_list()
    }
}

impl Checkable for ArrayOfMatches {
    fn is_empty(&self) -> bool {
        self.matchdata.is_absent()
    }

    fn is_valid(&self) -> bool {
        self.matchdata.is_list()
    }
}

impl Checkable for ArrayOfGoals {
    fn is_empty(&self) -> bool {
        self.goal.is_absent()
    }

    fn is_valid(&self) -> bool {
        self.goal.is_list()
    }
}

impl Checkable for ArrayOfMatchResults {
    fn is_empty(&self) -> bool {
        self.match_result.is_absent()
    }

    fn is_valid(&self) -> bool {
        self.match_result.is_list()
    }
}
