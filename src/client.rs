//! The typed client façade over the Sportsdata operations.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::debug;

use crate::cli::types::ids::{GroupOrderId, LeagueShortcut, MatchId, SportId, TeamId};
use crate::cli::types::time::Season;
use crate::error::{LigaError, Result};
use crate::sportsdata::binder::bind_checked;
use crate::sportsdata::checkable::Checkable;
use crate::sportsdata::entities::{Goal, Group, League, Match, Sport, Team};
use crate::sportsdata::operation::Operation;
use crate::sportsdata::wrappers::{
    ArrayOfGoals, ArrayOfGroups, ArrayOfLeagues, ArrayOfMatches, ArrayOfSports, ArrayOfTeams,
};
use crate::transport::{CallArgs, HttpTransport, Transport, TransportConfig};


/// Typed access to the Sportsdata service.
///
/// One async method per remote operation. Each call is a single
/// round-trip through the injected [`Transport`]; the response is bound
/// into its typed shape, checked, and unwrapped before it reaches the
/// caller. The client keeps no state between calls.
pub struct Client {
    transport: Box<dyn Transport>,
}

impl Client {
    /// Build a client around an injected transport.
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Build a client talking to the real service as configured.
    pub fn with_config(config: TransportConfig) -> Result<Self> {
        Ok(Self::new(Box::new(HttpTransport::new(config)?)))
    }

    /// All leagues the service knows, across sports and seasons.
    pub async fn available_leagues(&self) -> Result<Vec<League>> {
        let wrapper: ArrayOfLeagues = self
            .dispatch(Operation::AvailLeagues, CallArgs::new())
            .await?;
        Ok(wrapper.into_leagues())
    }

    /// All sports the service knows.
    pub async fn available_sports(&self) -> Result<Vec<Sport>> {
        let wrapper: ArrayOfSports = self
            .dispatch(Operation::AvailSports, CallArgs::new())
            .await?;
        Ok(wrapper.into_sports())
    }

    /// The groups (match days) of one league season, e.g. `1. Spieltag`
    /// through `34. Spieltag` for `bl1`.
    pub async fn available_groups(
        &self,
        league: &LeagueShortcut,
        season: Season,
    ) -> Result<Vec<Group>> {
        let args = Self::args(&[
            ("leagueShortcut", json!(league)),
            ("leagueSaison", json!(season)),
        ]);
        let wrapper: ArrayOfGroups = self.dispatch(Operation::AvailGroups, args).await?;
        Ok(wrapper.into_groups())
    }

    /// The leagues of one sport; sport IDs come from
    /// [`Client::available_sports`].
    pub async fn available_leagues_by_sport(&self, sport_id: SportId) -> Result<Vec<League>> {
        let args = Self::args(&[("sportID", json!(sport_id))]);
        let wrapper: ArrayOfLeagues = self
            .dispatch(Operation::AvailLeaguesBySports, args)
            .await?;
        Ok(wrapper.into_leagues())
    }

    /// The goals of one match; match IDs come from the matches methods.
    pub async fn goals_by_match(&self, match_id: MatchId) -> Result<Vec<Goal>> {
        let args = Self::args(&[("MatchID", json!(match_id))]);
        let wrapper: ArrayOfGoals = self.dispatch(Operation::GoalsByMatch, args).await?;
        Ok(wrapper.into_goals())
    }

    /// Every goal of a whole league season. Can take a while.
    pub async fn goals_by_league_season(
        &self,
        league: &LeagueShortcut,
        season: Season,
    ) -> Result<Vec<Goal>> {
        let args = Self::args(&[
            ("leagueShortcut", json!(league)),
            ("leagueSaison", json!(season)),
        ]);
        let wrapper: ArrayOfGoals = self.dispatch(Operation::GoalsByLeagueSaison, args).await?;
        Ok(wrapper.into_goals())
    }

    /// The group currently being played in a league.
    pub async fn current_group(&self, league: &LeagueShortcut) -> Result<Group> {
        let args = Self::args(&[("leagueShortcut", json!(league))]);
        self.dispatch(Operation::CurrentGroup, args).await
    }

    /// The matches of one group of one league season.
    pub async fn matches_by_group_league_season(
        &self,
        group_order_id: GroupOrderId,
        league: &LeagueShortcut,
        season: Season,
    ) -> Result<Vec<Match>> {
        let args = Self::args(&[
            ("groupOrderID", json!(group_order_id)),
            ("leagueShortcut", json!(league)),
            ("leagueSaison", json!(season)),
        ]);
        let wrapper: ArrayOfMatches = self
            .dispatch(Operation::MatchdataByGroupLeagueSaison, args)
            .await?;
        Ok(wrapper.into_matches())
    }

    /// All matches of one league season.
    pub async fn matches_by_league_season(
        &self,
        league: &LeagueShortcut,
        season: Season,
    ) -> Result<Vec<Match>> {
        let args = Self::args(&[
            ("leagueShortcut", json!(league)),
            ("leagueSaison", json!(season)),
        ]);
        let wrapper: ArrayOfMatches = self
            .dispatch(Operation::MatchdataByLeagueSaison, args)
            .await?;
        Ok(wrapper.into_matches())
    }

    /// Matches of the current year's season that have not been played
    /// yet, in the order the service returned them.
    pub async fn upcoming_matches_by_league(
        &self,
        league: &LeagueShortcut,
    ) -> Result<Vec<Match>> {
        let matches = self
            .matches_by_league_season(league, Season::current())
            .await?;
        Ok(matches.into_iter().filter(|m| !m.is_finished()).collect())
    }

    /// The teams registered for one league season.
    pub async fn teams_by_league_season(
        &self,
        league: &LeagueShortcut,
        season: Season,
    ) -> Result<Vec<Team>> {
        let args = Self::args(&[
            ("leagueShortcut", json!(league)),
            ("leagueSaison", json!(season)),
        ]);
        let wrapper: ArrayOfTeams = self.dispatch(Operation::TeamsByLeagueSaison, args).await?;
        Ok(wrapper.into_teams())
    }

    /// The most recently played match of a league.
    pub async fn last_match(&self, league: &LeagueShortcut) -> Result<Match> {
        let args = Self::args(&[("leagueShortcut", json!(league))]);
        self.dispatch(Operation::LastMatch, args).await
    }

    /// All matches ever played between two teams.
    pub async fn matches_by_teams(&self, team1: TeamId, team2: TeamId) -> Result<Vec<Match>> {
        let args = Self::args(&[("teamID1", json!(team1)), ("teamID2", json!(team2))]);
        let wrapper: ArrayOfMatches = self.dispatch(Operation::MatchdataByTeams, args).await?;
        Ok(wrapper.into_matches())
    }

    /// Run one operation end to end: call the transport, unwrap the
    /// `<operation>Result` field from the envelope, then bind and check
    /// the payload.
    async fn dispatch<T>(&self, operation: Operation, args: CallArgs) -> Result<T>
    where
        T: DeserializeOwned + Checkable,
    {
        let mut envelope = self.transport.call(operation.name(), &args).await?;

        let field = operation.result_field();
        let payload = match envelope.remove(&field) {
            Some(payload) => payload,
            None => {
                debug!("{operation} response lacks {field}");
                return Err(LigaError::InvalidResponse { field, envelope });
            }
        };

        let bound = bind_checked(payload)?;
        debug!("{operation} returned a usable payload");
        Ok(bound)
    }

    fn args(pairs: &[(&str, Value)]) -> CallArgs {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }
}
