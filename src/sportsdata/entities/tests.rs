//! Unit tests for entity binding and the per-entity checks

use super::*;
use serde_json::json;

#[cfg(test)]
mod league_tests {
    use super::*;

    #[test]
    fn test_league_deserialization() {
        let json = json!({
            "Id": 1,
            "Name": "1. Fussball-Bundesliga 2015/2016",
            "ShortName": "bl1",
            "Season": 2015,
            "SportId": 1
        });

        let league: League = serde_json::from_value(json).unwrap();
        assert_eq!(league.id, Some(1));
        assert_eq!(
            league.name.as_deref(),
            Some("1. Fussball-Bundesliga 2015/2016")
        );
        assert_eq!(league.short_name.as_deref(), Some("bl1"));
        assert_eq!(league.season, Some(Season::new(2015)));
        assert_eq!(league.sport_id, Some(SportId::new(1)));
    }

    #[test]
    fn test_league_missing_fields_stay_none() {
        let json = json!({ "ShortName": "bl2" });

        let league: League = serde_json::from_value(json).unwrap();
        assert_eq!(league.short_name.as_deref(), Some("bl2"));
        assert_eq!(league.id, None);
        assert_eq!(league.name, None);
        assert_eq!(league.season, None);
        assert_eq!(league.sport_id, None);
    }

    #[test]
    fn test_league_unknown_fields_ignored() {
        let json = json!({
            "Id": 7,
            "SomethingTheServiceAdded": "later",
            "Nested": { "Even": "deeper" }
        });

        let league: League = serde_json::from_value(json).unwrap();
        assert_eq!(league.id, Some(7));
    }

    #[test]
    fn test_league_field_names_are_case_sensitive() {
        // Lowercase keys must not fuzzy-match the PascalCase schema.
        let json = json!({ "shortname": "bl1", "id": 3 });

        let league: League = serde_json::from_value(json).unwrap();
        assert_eq!(league.short_name, None);
        assert_eq!(league.id, None);
    }

    #[test]
    fn test_league_serialization_uses_remote_names() {
        let league = League {
            id: Some(4),
            short_name: Some("bl3".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&league).unwrap();
        assert_eq!(json["Id"], 4);
        assert_eq!(json["ShortName"], "bl3");
    }

    #[test]
    fn test_league_checkable() {
        let empty = League::default();
        assert!(empty.is_empty());
        assert!(!empty.is_valid());

        let league = League {
            short_name: Some("bl1".to_string()),
            ..Default::default()
        };
        assert!(!league.is_empty());
        assert!(league.is_valid());
    }

    #[test]
    fn test_league_binding_is_idempotent() {
        let json = json!({ "Id": 1, "ShortName": "bl1", "Season": 2015 });

        let first: League = serde_json::from_value(json.clone()).unwrap();
        let second: League = serde_json::from_value(json).unwrap();
        assert_eq!(first, second);
    }
}

#[cfg(test)]
mod group_tests {
    use super::*;

    #[test]
    fn test_group_deserialization() {
        let json = json!({
            "Id": 9591,
            "Name": "1. Spieltag",
            "OrderId": 1
        });

        let group: Group = serde_json::from_value(json).unwrap();
        assert_eq!(group.id, Some(9591));
        assert_eq!(group.name.as_deref(), Some("1. Spieltag"));
        assert_eq!(group.order_id, Some(GroupOrderId::new(1)));
    }

    #[test]
    fn test_group_checkable() {
        assert!(Group::default().is_empty());

        let group = Group {
            order_id: Some(GroupOrderId::new(12)),
            ..Default::default()
        };
        assert!(!group.is_empty());
        assert!(group.is_valid());
    }
}

#[cfg(test)]
mod goal_tests {
    use super::*;

    #[test]
    fn test_goal_deserialization() {
        let json = json!({
            "Id": 40939,
            "MatchMinute": 53,
            "ScoreTeam1": 1,
            "ScoreTeam2": 0,
            "ScorerId": 1478,
            "ScorerName": "Thomas Mueller",
            "IsPenalty": false,
            "IsOwnGoal": false,
            "IsOvertime": false
        });

        let goal: Goal = serde_json::from_value(json).unwrap();
        assert_eq!(goal.id, Some(40939));
        assert_eq!(goal.match_minute, Some(53));
        assert_eq!(goal.score_team1, Some(1));
        assert_eq!(goal.score_team2, Some(0));
        assert_eq!(goal.scorer_name.as_deref(), Some("Thomas Mueller"));
        assert_eq!(goal.is_penalty, Some(false));
        assert_eq!(goal.comment, None);
    }

    #[test]
    fn test_goal_checkable() {
        assert!(Goal::default().is_empty());
        assert!(!Goal::default().is_valid());
    }
}

#[cfg(test)]
mod match_tests {
    use super::*;
    use crate::sportsdata::wrappers::ListSlot;
    use chrono::FixedOffset;

    #[test]
    fn test_match_deserialization() {
        let json = json!({
            "Id": 39738,
            "DateTime": "2015-08-14T20:30:00+02:00",
            "DateTimeUtc": "2015-08-14T18:30:00Z",
            "LeagueId": 1,
            "LeagueName": "1. Fussball-Bundesliga 2015/2016",
            "LeagueShortName": "bl1",
            "LeagueSeason": 2015,
            "Group": { "Id": 9591, "Name": "1. Spieltag", "OrderId": 1 },
            "Team1": { "Id": 40, "Name": "FC Bayern" },
            "Team2": { "Id": 100, "Name": "Hamburger SV" },
            "Goals": [
                { "Id": 1, "MatchMinute": 53, "ScoreTeam1": 1, "ScoreTeam2": 0 },
                { "Id": 2, "MatchMinute": 62, "ScoreTeam1": 2, "ScoreTeam2": 0 }
            ],
            "Results": [
                { "Id": 10, "Name": "Endergebnis", "PointsTeam1": 5, "PointsTeam2": 0 }
            ],
            "Location": { "Id": 3, "City": "Muenchen", "Stadium": "Allianz-Arena" },
            "NumberOfViewers": 75000,
            "IsFinished": true
        });

        let m: Match = serde_json::from_value(json).unwrap();
        assert_eq!(m.id, Some(MatchId::new(39738)));
        assert_eq!(m.league_short_name.as_deref(), Some("bl1"));
        assert_eq!(m.league_season, Some(Season::new(2015)));
        assert_eq!(m.team1.as_ref().unwrap().id, Some(TeamId::new(40)));
        assert_eq!(m.group.as_ref().unwrap().order_id, Some(GroupOrderId::new(1)));
        assert_eq!(m.location.as_ref().unwrap().stadium.as_deref(), Some("Allianz-Arena"));
        assert_eq!(m.number_of_viewers, Some(75000));
        assert_eq!(m.finished, Some(true));
        assert!(m.is_finished());

        match &m.goals {
            ListSlot::Items(goals) => {
                assert_eq!(goals.len(), 2);
                assert_eq!(goals[0].match_minute, Some(53));
                assert_eq!(goals[1].match_minute, Some(62));
            }
            other => panic!("expected goal items, got {:?}", other),
        }
        match &m.results {
            ListSlot::Items(results) => {
                assert_eq!(results[0].points_team1, Some(5));
            }
            other => panic!("expected result items, got {:?}", other),
        }
    }

    #[test]
    fn test_match_time_zone_preserves_offset() {
        let json = json!({
            "Id": 1,
            "DateTime": "2015-08-14T20:30:00+02:00"
        });

        let m: Match = serde_json::from_value(json).unwrap();
        assert_eq!(m.time_zone(), Some(FixedOffset::east_opt(2 * 3600).unwrap()));

        // The stored timestamp keeps its wall-clock reading too.
        let dt = m.date_time.unwrap();
        assert_eq!(dt.to_rfc3339(), "2015-08-14T20:30:00+02:00");
    }

    #[test]
    fn test_match_time_zone_negative_offset() {
        let json = json!({ "DateTime": "2015-08-14T14:30:00-05:00" });

        let m: Match = serde_json::from_value(json).unwrap();
        assert_eq!(m.time_zone(), Some(FixedOffset::west_opt(5 * 3600).unwrap()));
    }

    #[test]
    fn test_match_without_timestamp_has_no_time_zone() {
        let m: Match = serde_json::from_value(json!({ "Id": 5 })).unwrap();
        assert_eq!(m.date_time, None);
        assert_eq!(m.time_zone(), None);
    }

    #[test]
    fn test_match_finished_flag_absent_is_observable() {
        let m: Match = serde_json::from_value(json!({ "Id": 5 })).unwrap();
        assert_eq!(m.finished, None);
        assert!(!m.is_finished());
    }

    #[test]
    fn test_match_singular_goal_becomes_one_element_list() {
        let json = json!({
            "Id": 7,
            "Goals": { "Id": 1, "MatchMinute": 90 }
        });

        let m: Match = serde_json::from_value(json).unwrap();
        let goals = m.goals.into_items();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].match_minute, Some(90));
    }

    #[test]
    fn test_match_absent_goals_slot() {
        let m: Match = serde_json::from_value(json!({ "Id": 7 })).unwrap();
        assert_eq!(m.goals, ListSlot::Absent);

        let m: Match = serde_json::from_value(json!({ "Id": 7, "Goals": null })).unwrap();
        assert_eq!(m.goals, ListSlot::Absent);
    }

    #[test]
    fn test_match_checkable() {
        assert!(Match::default().is_empty());
        assert!(!Match::default().is_valid());

        let m = Match {
            id: Some(MatchId::new(1)),
            ..Default::default()
        };
        assert!(!m.is_empty());
        assert!(m.is_valid());
    }

    #[test]
    fn test_match_serialization_round_trips_timestamp() {
        let json = json!({ "DateTime": "2015-08-14T20:30:00+02:00" });

        let m: Match = serde_json::from_value(json).unwrap();
        let out = serde_json::to_value(&m).unwrap();
        assert_eq!(out["DateTime"], "2015-08-14T20:30:00+02:00");
    }
}

#[cfg(test)]
mod remaining_entity_tests {
    use super::*;

    #[test]
    fn test_sport_deserialization() {
        let sport: Sport =
            serde_json::from_value(json!({ "Id": 1, "Name": "Fussball" })).unwrap();
        assert_eq!(sport.id, Some(SportId::new(1)));
        assert_eq!(sport.name.as_deref(), Some("Fussball"));
        assert!(sport.is_valid());
    }

    #[test]
    fn test_team_deserialization() {
        let json = json!({
            "Id": 40,
            "Name": "FC Bayern",
            "ShortName": "Bayern",
            "IconUrl": "https://example.org/bayern.gif",
            "GroupName": "Gruppe A"
        });

        let team: Team = serde_json::from_value(json).unwrap();
        assert_eq!(team.id, Some(TeamId::new(40)));
        assert_eq!(team.short_name.as_deref(), Some("Bayern"));
        assert_eq!(team.icon_url.as_deref(), Some("https://example.org/bayern.gif"));
        assert_eq!(team.group_name.as_deref(), Some("Gruppe A"));
    }

    #[test]
    fn test_match_result_deserialization() {
        let json = json!({
            "Id": 10,
            "Name": "Halbzeit",
            "PointsTeam1": 1,
            "PointsTeam2": 0,
            "OrderId": 1,
            "Description": "Ergebnis zur Halbzeit"
        });

        let result: MatchResult = serde_json::from_value(json).unwrap();
        assert_eq!(result.name.as_deref(), Some("Halbzeit"));
        assert_eq!(result.points_team1, Some(1));
        assert_eq!(result.order_id, Some(1));
    }

    #[test]
    fn test_location_deserialization() {
        let json = json!({ "Id": 3, "City": "Muenchen", "Stadium": "Allianz-Arena" });

        let location: Location = serde_json::from_value(json).unwrap();
        assert_eq!(location.city.as_deref(), Some("Muenchen"));
        assert_eq!(location.stadium.as_deref(), Some("Allianz-Arena"));
    }

    #[test]
    fn test_empty_checks_cover_all_singular_entities() {
        assert!(Sport::default().is_empty());
        assert!(Team::default().is_empty());
        assert!(MatchResult::default().is_empty());
        assert!(Location::default().is_empty());
    }
}
