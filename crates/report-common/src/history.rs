//! Filtering and aggregation for the dispatch history dashboard.

use serde::{Deserialize, Serialize};

use crate::types::HistoryRow;

/// Filter values entered on the history page. Empty fields mean "no
/// filter" and are omitted from the query string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryFilter {
    #[serde(default)]
    pub equipe: String,
    #[serde(default)]
    pub tipo: String,
    #[serde(default)]
    pub inicio: String,
    #[serde(default)]
    pub fim: String,
}

impl HistoryFilter {
    /// Assembles the query string for `GET /historico/dados`. Values are
    /// percent-encoded; blank fields are skipped. Returns an empty string
    /// when no filter is set.
    pub fn query_string(&self) -> String {
        let fields = [
            ("equipe", &self.equipe),
            ("tipo", &self.tipo),
            ("inicio", &self.inicio),
            ("fim", &self.fim),
        ];
        let mut parts = Vec::new();
        for (key, value) in fields {
            let value = value.trim();
            if !value.is_empty() {
                parts.push(format!("{}={}", key, urlencoding::encode(value)));
            }
        }
        parts.join("&")
    }

    pub fn is_empty(&self) -> bool {
        self.query_string().is_empty()
    }
}

/// Number of rows per status, in first-seen order (feeds the bar chart).
pub fn status_counts(rows: &[HistoryRow]) -> Vec<(String, u32)> {
    let mut counts: Vec<(String, u32)> = Vec::new();
    for row in rows {
        match counts.iter_mut().find(|(status, _)| *status == row.status) {
            Some((_, count)) => *count += 1,
            None => counts.push((row.status.clone(), 1)),
        }
    }
    counts
}

/// Distinct team names of the result set, sorted (feeds the team filter).
pub fn distinct_teams(rows: &[HistoryRow]) -> Vec<String> {
    let mut teams: Vec<String> = Vec::new();
    for row in rows {
        if !row.equipe.is_empty() && !teams.contains(&row.equipe) {
            teams.push(row.equipe.clone());
        }
    }
    teams.sort();
    teams
}
