//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{GroupOrderId, LeagueShortcut, MatchId, Season, SportId, TeamId};

/// League season selection shared between commands
#[derive(Debug, Args)]
pub struct LeagueSelection {
    /// League shortcut (e.g. `bl1`).
    #[clap(long, short)]
    pub league: LeagueShortcut,

    /// Season year the league ran in (e.g. 2015).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,
}

#[derive(Debug, Parser)]
#[clap(name = "openligadb", about = "OpenLigaDB Sportsdata CLI")]
pub struct OpenLigaDb {
    /// Service endpoint base URL (or set `OPENLIGADB_ENDPOINT` env var).
    #[clap(long, global = true)]
    pub endpoint: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the leagues the service knows about.
    Leagues {
        /// Restrict to the leagues of one sport.
        #[clap(long)]
        sport_id: Option<SportId>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List the sports the service knows about.
    Sports {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List the groups (match days) of a league season.
    Groups {
        #[clap(flatten)]
        selection: LeagueSelection,

        /// Show only the group currently being played.
        #[clap(long)]
        current: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List goals, either of one match or of a whole league season.
    Goals {
        /// Match to fetch the goals of.
        #[clap(long, short)]
        match_id: Option<MatchId>,

        /// League shortcut (e.g. `bl1`), season-wide variant.
        #[clap(long, short)]
        league: Option<LeagueShortcut>,

        /// Season year for the season-wide variant.
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List the matches of a league season or of a team pairing.
    Matches {
        /// League shortcut (e.g. `bl1`).
        #[clap(long, short)]
        league: Option<LeagueShortcut>,

        /// Season year the league ran in (e.g. 2015).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Restrict to one group (match day) by its order ID.
        #[clap(long = "group", short = 'g')]
        group_order_id: Option<GroupOrderId>,

        /// First team of a head-to-head pairing, with `--team2`.
        #[clap(long)]
        team1: Option<TeamId>,

        /// Second team of a head-to-head pairing, with `--team1`.
        #[clap(long)]
        team2: Option<TeamId>,

        /// Show only current-season matches that are still to be played.
        #[clap(long)]
        upcoming: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List the teams of a league season.
    Teams {
        #[clap(flatten)]
        selection: LeagueSelection,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show the most recently played match of a league.
    LastMatch {
        /// League shortcut (e.g. `bl1`).
        #[clap(long, short)]
        league: LeagueShortcut,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
