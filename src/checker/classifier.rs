use std::collections::HashMap;

/// Breakdown columns expected to sum toward the `votes` total.
pub const VOTE_COMPONENTS: [&str; 5] = [
    "absentee",
    "early_voting",
    "election_day",
    "mail",
    "provisional",
];

/// Semantic role of a header column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnRole {
    County,
    Precinct,
    Office,
    Candidate,
    Votes,
    Absentee,
    EarlyVoting,
    ElectionDay,
    Mail,
    Provisional,
    Other,
}

impl ColumnRole {
    /// Resolve a role from an already normalized header name.
    #[must_use]
    pub fn from_normalized(name: &str) -> Self {
        match name {
            "county" => Self::County,
            "precinct" => Self::Precinct,
            "office" => Self::Office,
            "candidate" => Self::Candidate,
            "votes" => Self::Votes,
            "absentee" => Self::Absentee,
            "early_voting" => Self::EarlyVoting,
            "election_day" => Self::ElectionDay,
            "mail" => Self::Mail,
            "provisional" => Self::Provisional,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub const fn is_vote_component(self) -> bool {
        matches!(
            self,
            Self::Absentee | Self::EarlyVoting | Self::ElectionDay | Self::Mail | Self::Provisional
        )
    }

    /// The `votes` total or one of its breakdown components.
    #[must_use]
    pub const fn is_vote_count(self) -> bool {
        matches!(self, Self::Votes) || self.is_vote_component()
    }
}

/// Normalize a header cell for role matching: trimmed and lowercased.
#[must_use]
pub fn normalize_header(cell: &str) -> String {
    cell.trim().to_lowercase()
}

/// Column-index resolution for one header.
///
/// Built once per file. Roles missing from the header resolve to `None`; the
/// first column wins when a name repeats.
#[derive(Debug, Clone)]
pub struct RowClassifier {
    width: usize,
    normalized: Vec<String>,
    roles: Vec<ColumnRole>,
    first_index: HashMap<String, usize>,
}

impl RowClassifier {
    #[must_use]
    pub fn new(header: &[String]) -> Self {
        let normalized: Vec<String> = header.iter().map(|h| normalize_header(h)).collect();
        let roles = normalized
            .iter()
            .map(|name| ColumnRole::from_normalized(name))
            .collect();

        let mut first_index = HashMap::with_capacity(normalized.len());
        for (index, name) in normalized.iter().enumerate() {
            first_index.entry(name.clone()).or_insert(index);
        }

        Self {
            width: header.len(),
            normalized,
            roles,
            first_index,
        }
    }

    /// Number of columns in the header.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn matches_width(&self, row: &[String]) -> bool {
        row.len() == self.width
    }

    /// Normalized header names, in column order.
    #[must_use]
    pub fn normalized_names(&self) -> &[String] {
        &self.normalized
    }

    /// Index of the first column whose normalized name equals `name`.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.first_index.get(&normalize_header(name)).copied()
    }

    #[must_use]
    pub fn role_index(&self, role: ColumnRole) -> Option<usize> {
        self.roles.iter().position(|r| *r == role)
    }

    #[must_use]
    pub fn votes_index(&self) -> Option<usize> {
        self.role_index(ColumnRole::Votes)
    }

    #[must_use]
    pub fn candidate_index(&self) -> Option<usize> {
        self.role_index(ColumnRole::Candidate)
    }

    /// Indices of every breakdown component column, in column order.
    #[must_use]
    pub fn component_indices(&self) -> Vec<usize> {
        self.indices_where(ColumnRole::is_vote_component)
    }

    /// Indices of the `votes` column and every breakdown component column.
    #[must_use]
    pub fn vote_count_indices(&self) -> Vec<usize> {
        self.indices_where(ColumnRole::is_vote_count)
    }

    /// Columns hashed for duplicate detection.
    ///
    /// Excludes any column whose lowercased name contains `votes` (so
    /// `total_votes` or `a_votes_b` are ignored too) and every breakdown
    /// component column.
    #[must_use]
    pub fn fingerprint_indices(&self) -> Vec<usize> {
        self.normalized
            .iter()
            .enumerate()
            .filter(|(_, name)| {
                !name.contains("votes") && !VOTE_COMPONENTS.contains(&name.as_str())
            })
            .map(|(index, _)| index)
            .collect()
    }

    /// Candidate cell of `row`, if the header has a candidate column and the
    /// row reaches it.
    #[must_use]
    pub fn candidate<'a>(&self, row: &'a [String]) -> Option<&'a str> {
        self.candidate_index()
            .and_then(|index| row.get(index))
            .map(String::as_str)
    }

    fn indices_where(&self, predicate: impl Fn(ColumnRole) -> bool) -> Vec<usize> {
        self.roles
            .iter()
            .enumerate()
            .filter(|(_, role)| predicate(**role))
            .map(|(index, _)| index)
            .collect()
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
