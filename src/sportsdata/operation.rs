//! The table of remote Sportsdata operations.

use std::fmt;


/// The twelve remote operations, named exactly as the service spells
/// them on the wire, German "Saison" included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    AvailLeagues,
    AvailSports,
    AvailGroups,
    AvailLeaguesBySports,
    GoalsByMatch,
    GoalsByLeagueSaison,
    CurrentGroup,
    MatchdataByGroupLeagueSaison,
    MatchdataByLeagueSaison,
    TeamsByLeagueSaison,
    LastMatch,
    MatchdataByTeams,
}

impl Operation {
    /// The operation name sent to the transport, e.g. `GetAvailLeagues`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AvailLeagues => "GetAvailLeagues",
            Self::AvailSports => "GetAvailSports",
            Self::AvailGroups => "GetAvailGroups",
            Self::AvailLeaguesBySports => "GetAvailLeaguesBySports",
            Self::GoalsByMatch => "GetGoalsByMatch",
            Self::GoalsByLeagueSaison => "GetGoalsByLeagueSaison",
            Self::CurrentGroup => "GetCurrentGroup",
            Self::MatchdataByGroupLeagueSaison => "GetMatchdataByGroupLeagueSaison",
            Self::MatchdataByLeagueSaison => "GetMatchdataByLeagueSaison",
            Self::TeamsByLeagueSaison => "GetTeamsByLeagueSaison",
            Self::LastMatch => "GetLastMatch",
            Self::MatchdataByTeams => "GetMatchdataByTeams",
        }
    }

    /// The envelope field the service stores this operation's payload
    /// under, literally `<name>Result`.
    pub fn result_field(&self) -> String {
        format!("{}Result", self.name())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
