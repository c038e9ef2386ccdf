use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// One hockey team entry from the forms page. Numeric-looking fields are
/// kept as strings, matching the page text and the stored document shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub team_name: String,
    pub year: String,
    pub wins: String,
    pub losses: String,
}

impl Display for TeamRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}): {} wins, {} losses",
            self.team_name, self.year, self.wins, self.losses
        )
    }
}

/// One country entry from the advanced page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub country_name: String,
}

impl Display for CountryRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.country_name)
    }
}
