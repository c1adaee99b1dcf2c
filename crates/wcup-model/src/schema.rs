//! Source-table definitions for the three archive inputs.

use std::fmt;

/// The three source tables the pipeline ingests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceTable {
    /// Tournament summaries, one row per edition year.
    Editions,
    /// Played matches, one row per game.
    Matches,
    /// Player participation records, one row per player and tournament.
    Players,
}

impl SourceTable {
    pub const ALL: [SourceTable; 3] = [
        SourceTable::Editions,
        SourceTable::Matches,
        SourceTable::Players,
    ];

    /// Short code used in error messages and log fields.
    pub fn code(&self) -> &'static str {
        match self {
            SourceTable::Editions => "editions",
            SourceTable::Matches => "matches",
            SourceTable::Players => "players",
        }
    }

    /// File name the table is published under in the archive dataset.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            SourceTable::Editions => "WorldCups.csv",
            SourceTable::Matches => "WorldCupMatches.csv",
            SourceTable::Players => "WorldCupPlayers.csv",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SourceTable::Editions => "Tournament editions with winner and totals",
            SourceTable::Matches => "Individual matches with combined date-time field",
            SourceTable::Players => "Player rosters keyed by team initials",
        }
    }

    /// Columns each stage requires, as they appear in the source header row.
    ///
    /// Lookups are case-insensitive and whitespace-normalized; a missing
    /// entry is a structural error at the stage that needs it.
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            SourceTable::Editions => &[
                "Year",
                "Winner",
                "GoalsScored",
                "QualifiedTeams",
                "MatchesPlayed",
                "Attendance",
            ],
            SourceTable::Matches => &[
                "Year",
                "Datetime",
                "Home Team Name",
                "Away Team Name",
                "Attendance",
            ],
            SourceTable::Players => &["Team Initials", "Player Name", "Position", "Event"],
        }
    }
}

impl fmt::Display for SourceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
