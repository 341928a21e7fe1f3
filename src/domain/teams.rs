//! Mapping from external team identifiers to the pool's display names.

use std::collections::HashMap;

/// Immutable lookup from a source's full team name to the pool's short
/// display name. Built once and injected into the source adapter, so a
/// different season or data source only needs a different table.
#[derive(Debug, Clone)]
pub struct TeamDirectory {
    by_full_name: HashMap<String, String>,
}

impl TeamDirectory {
    /// Build a directory from explicit `full name -> display name` pairs.
    #[must_use]
    pub fn from_map(by_full_name: HashMap<String, String>) -> Self {
        Self { by_full_name }
    }

    /// The standard 30-team NBA table.
    #[must_use]
    pub fn nba() -> Self {
        let pairs = [
            ("Atlanta Hawks", "Hawks"),
            ("Boston Celtics", "Celtics"),
            ("Brooklyn Nets", "Nets"),
            ("Charlotte Hornets", "Hornets"),
            ("Chicago Bulls", "Bulls"),
            ("Cleveland Cavaliers", "Cavaliers"),
            ("Dallas Mavericks", "Mavericks"),
            ("Denver Nuggets", "Nuggets"),
            ("Detroit Pistons", "Pistons"),
            ("Golden State Warriors", "Warriors"),
            ("Houston Rockets", "Rockets"),
            ("Indiana Pacers", "Pacers"),
            ("LA Clippers", "Clippers"),
            ("Los Angeles Lakers", "Lakers"),
            ("Memphis Grizzlies", "Grizzlies"),
            ("Miami Heat", "Heat"),
            ("Milwaukee Bucks", "Bucks"),
            ("Minnesota Timberwolves", "Timberwolves"),
            ("New Orleans Pelicans", "Pelicans"),
            ("New York Knicks", "Knicks"),
            ("Oklahoma City Thunder", "Thunder"),
            ("Orlando Magic", "Magic"),
            ("Philadelphia 76ers", "76ers"),
            ("Phoenix Suns", "Suns"),
            ("Portland Trail Blazers", "Trail Blazers"),
            ("Sacramento Kings", "Kings"),
            ("San Antonio Spurs", "Spurs"),
            ("Toronto Raptors", "Raptors"),
            ("Utah Jazz", "Jazz"),
            ("Washington Wizards", "Wizards"),
        ];
        Self {
            by_full_name: pairs
                .into_iter()
                .map(|(full, short)| (full.to_string(), short.to_string()))
                .collect(),
        }
    }

    /// Display name for an external full name, if the pool tracks it.
    #[must_use]
    pub fn display_name(&self, full_name: &str) -> Option<&str> {
        self.by_full_name.get(full_name).map(String::as_str)
    }

    /// Number of teams the pool tracks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_full_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_full_name.is_empty()
    }
}
