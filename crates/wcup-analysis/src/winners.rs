//! Winner-centric aggregates over the normalized tables.

use std::collections::{BTreeMap, BTreeSet};

use polars::prelude::{DataFrame, StringChunked};
use tracing::debug;
use wcup_model::{CaseInsensitiveSet, Edition, MatchRecord, Player, SourceTable};

use crate::error::{AnalysisError, Result};

/// Home/away pairing used as the grouping key for the match aggregates.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TeamPair {
    pub home: String,
    pub away: String,
}

/// The four winner aggregates. Maps are ordered so iteration, display, and
/// comparison are deterministic regardless of input row order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WinnerAnalysis {
    /// Goals summed per winner across every edition that team won.
    pub goals_by_winner: BTreeMap<String, i64>,
    /// Match count per home/away pairing where either side is in the winner
    /// set.
    pub matches_played_by_winner: BTreeMap<TeamPair, u64>,
    /// Attendance totals over the same filtered pairings. Rows without a
    /// usable attendance value contribute nothing; a pairing whose rows are
    /// all missing attendance still appears, with a total of zero.
    pub attendance_by_winner: BTreeMap<TeamPair, i64>,
    /// Roster rows whose team initials appear in the winner set, in source
    /// row order.
    pub key_players: Vec<Player>,
}

/// Computes the four winner aggregates from the normalized tables.
///
/// The winner set is the distinct `winner` values across all editions, so
/// the match filter admits a row when either side won *any* edition, not
/// only the edition that match belongs to. `key_players` compares roster
/// initials against winner names verbatim; there is no code-to-name mapping
/// between the two identifier schemes.
///
/// Empty inputs are valid and produce empty aggregates. A missing roster
/// column is a contract violation and fails even when the winner set is
/// empty.
pub fn analyze_winners(
    editions: &[Edition],
    matches: &[MatchRecord],
    players: &DataFrame,
) -> Result<WinnerAnalysis> {
    let winners: BTreeSet<&str> = editions
        .iter()
        .map(|edition| edition.winner.as_str())
        .collect();

    let mut goals_by_winner: BTreeMap<String, i64> = BTreeMap::new();
    for edition in editions {
        *goals_by_winner.entry(edition.winner.clone()).or_insert(0) += edition.goals_scored;
    }

    let mut matches_played_by_winner: BTreeMap<TeamPair, u64> = BTreeMap::new();
    let mut attendance_by_winner: BTreeMap<TeamPair, i64> = BTreeMap::new();
    for record in matches {
        if !winners.contains(record.home_team.as_str())
            && !winners.contains(record.away_team.as_str())
        {
            continue;
        }
        let pair = TeamPair {
            home: record.home_team.clone(),
            away: record.away_team.clone(),
        };
        *matches_played_by_winner.entry(pair.clone()).or_insert(0) += 1;
        let total = attendance_by_winner.entry(pair).or_insert(0);
        if let Some(attendance) = record.attendance {
            *total += attendance;
        }
    }

    let key_players = winning_roster(&winners, players)?;

    debug!(
        winners = winners.len(),
        pairings = matches_played_by_winner.len(),
        key_players = key_players.len(),
        "winner aggregates computed"
    );

    Ok(WinnerAnalysis {
        goals_by_winner,
        matches_played_by_winner,
        attendance_by_winner,
        key_players,
    })
}

/// Filters roster rows to the winner set and projects the four display
/// fields, preserving source row order.
fn winning_roster(winners: &BTreeSet<&str>, players: &DataFrame) -> Result<Vec<Player>> {
    let lookup = CaseInsensitiveSet::new(players.get_column_names_owned());
    let initials = required_str_column(players, &lookup, "Team Initials")?;
    let names = required_str_column(players, &lookup, "Player Name")?;
    let positions = required_str_column(players, &lookup, "Position")?;
    let events = required_str_column(players, &lookup, "Event")?;

    let mut roster = Vec::new();
    for idx in 0..players.height() {
        let team = initials.get(idx).unwrap_or("");
        if !winners.contains(team) {
            continue;
        }
        roster.push(Player {
            player_name: names.get(idx).unwrap_or("").to_string(),
            team_initials: team.to_string(),
            position: positions.get(idx).unwrap_or("").to_string(),
            event: events.get(idx).unwrap_or("").to_string(),
        });
    }
    Ok(roster)
}

fn required_str_column<'a>(
    df: &'a DataFrame,
    lookup: &CaseInsensitiveSet,
    column: &str,
) -> Result<&'a StringChunked> {
    let Some(actual) = lookup.get(column) else {
        return Err(AnalysisError::MissingColumn {
            table: SourceTable::Players,
            column: column.to_string(),
        });
    };
    Ok(df.column(actual)?.str()?)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

    use super::*;

    fn edition(year: i32, winner: &str, goals: i64) -> Edition {
        Edition {
            year,
            winner: winner.to_string(),
            goals_scored: goals,
            qualified_teams: 13,
            matches_played: 18,
            attendance: 590_549,
        }
    }

    fn match_record(year: i32, home: &str, away: &str, attendance: Option<i64>) -> MatchRecord {
        MatchRecord {
            year,
            date: NaiveDate::from_ymd_opt(year, 7, 13).unwrap(),
            time: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
            home_team: home.to_string(),
            away_team: away.to_string(),
            attendance,
        }
    }

    fn players_frame(rows: &[[&str; 4]]) -> DataFrame {
        let headers = ["Player Name", "Team Initials", "Position", "Event"];
        let columns: Vec<Column> = headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                let values: Vec<String> = rows.iter().map(|row| row[col].to_string()).collect();
                Series::new((*header).into(), values).into_column()
            })
            .collect();
        DataFrame::new(columns).unwrap()
    }

    fn pair(home: &str, away: &str) -> TeamPair {
        TeamPair {
            home: home.to_string(),
            away: away.to_string(),
        }
    }

    #[test]
    fn single_edition_scenario() {
        let editions = vec![edition(1930, "Uruguay", 70)];
        let matches = vec![match_record(1930, "Uruguay", "Argentina", Some(93_000))];
        let players = players_frame(&[["A", "URU", "GK", ""]]);

        let analysis = analyze_winners(&editions, &matches, &players).unwrap();

        assert_eq!(analysis.goals_by_winner.len(), 1);
        assert_eq!(analysis.goals_by_winner["Uruguay"], 70);
        assert_eq!(
            analysis.matches_played_by_winner[&pair("Uruguay", "Argentina")],
            1
        );
        assert_eq!(
            analysis.attendance_by_winner[&pair("Uruguay", "Argentina")],
            93_000
        );
        // "URU" never equals "Uruguay": initials and winner names are
        // different identifier schemes and are compared verbatim.
        assert!(analysis.key_players.is_empty());
    }

    #[test]
    fn repeat_winners_accumulate_goals() {
        let editions = vec![
            edition(1958, "Brazil", 126),
            edition(1962, "Brazil", 89),
            edition(1966, "England", 89),
        ];
        let analysis = analyze_winners(&editions, &[], &players_frame(&[])).unwrap();
        assert_eq!(analysis.goals_by_winner["Brazil"], 215);
        assert_eq!(analysis.goals_by_winner["England"], 89);
    }

    #[test]
    fn match_filter_admits_any_edition_winner() {
        let editions = vec![edition(1930, "Uruguay", 70)];
        let matches = vec![
            // Uruguay won 1930, so its 1950 match qualifies too.
            match_record(1950, "Uruguay", "Brazil", Some(173_850)),
            match_record(1950, "France", "Hungary", Some(10_000)),
        ];
        let analysis = analyze_winners(&editions, &matches, &players_frame(&[])).unwrap();
        assert_eq!(
            analysis.matches_played_by_winner[&pair("Uruguay", "Brazil")],
            1
        );
        assert!(
            !analysis
                .matches_played_by_winner
                .contains_key(&pair("France", "Hungary"))
        );
    }

    #[test]
    fn repeated_pairings_accumulate() {
        let editions = vec![edition(1930, "Uruguay", 70)];
        let matches = vec![
            match_record(1930, "Uruguay", "Argentina", Some(93_000)),
            match_record(1930, "Uruguay", "Argentina", Some(57_735)),
            match_record(1930, "Uruguay", "Argentina", None),
        ];
        let analysis = analyze_winners(&editions, &matches, &players_frame(&[])).unwrap();
        let key = pair("Uruguay", "Argentina");
        assert_eq!(analysis.matches_played_by_winner[&key], 3);
        assert_eq!(analysis.attendance_by_winner[&key], 150_735);
    }

    #[test]
    fn pairing_with_no_usable_attendance_totals_zero() {
        let editions = vec![edition(1930, "Uruguay", 70)];
        let matches = vec![match_record(1930, "Uruguay", "Peru", None)];
        let analysis = analyze_winners(&editions, &matches, &players_frame(&[])).unwrap();
        let key = pair("Uruguay", "Peru");
        assert_eq!(analysis.matches_played_by_winner[&key], 1);
        assert_eq!(analysis.attendance_by_winner[&key], 0);
    }

    #[test]
    fn aggregates_are_order_independent() {
        let editions = vec![
            edition(1930, "Uruguay", 70),
            edition(1934, "Italy", 70),
            edition(1938, "Italy", 84),
        ];
        let matches = vec![
            match_record(1930, "Uruguay", "Argentina", Some(93_000)),
            match_record(1934, "Italy", "Czechoslovakia", Some(55_000)),
            match_record(1938, "Italy", "Hungary", Some(45_000)),
        ];
        let players = players_frame(&[["A", "URU", "GK", ""], ["B", "ITA", "FW", "G40'"]]);

        let forward = analyze_winners(&editions, &matches, &players).unwrap();

        let mut editions_rev = editions.clone();
        editions_rev.reverse();
        let mut matches_rev = matches.clone();
        matches_rev.reverse();
        let reversed = analyze_winners(&editions_rev, &matches_rev, &players).unwrap();

        assert_eq!(forward, reversed);
    }

    #[test]
    fn empty_editions_yield_empty_aggregates() {
        let matches = vec![match_record(1930, "Uruguay", "Argentina", Some(93_000))];
        let players = players_frame(&[["A", "URU", "GK", ""]]);
        let analysis = analyze_winners(&[], &matches, &players).unwrap();
        assert!(analysis.goals_by_winner.is_empty());
        assert!(analysis.matches_played_by_winner.is_empty());
        assert!(analysis.attendance_by_winner.is_empty());
        assert!(analysis.key_players.is_empty());
    }

    #[test]
    fn missing_roster_column_is_fatal_even_with_no_winners() {
        let players = DataFrame::new(vec![
            Series::new(
                "Player Name".into(),
                vec!["A".to_string()],
            )
            .into_column(),
        ])
        .unwrap();
        let err = analyze_winners(&[], &[], &players).unwrap_err();
        match err {
            AnalysisError::MissingColumn { table, column } => {
                assert_eq!(table, SourceTable::Players);
                assert_eq!(column, "Team Initials");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn roster_join_is_exact_string_membership() {
        let editions = vec![edition(1930, "Uruguay", 70)];
        let players = players_frame(&[
            ["A", "URU", "GK", ""],
            ["B", "Uruguay", "FW", "G89'"],
            ["C", "uruguay", "DF", ""],
        ]);
        let analysis = analyze_winners(&editions, &[], &players).unwrap();
        assert_eq!(analysis.key_players.len(), 1);
        assert_eq!(analysis.key_players[0].player_name, "B");
        assert_eq!(analysis.key_players[0].team_initials, "Uruguay");
        assert_eq!(analysis.key_players[0].position, "FW");
        assert_eq!(analysis.key_players[0].event, "G89'");
    }
}
