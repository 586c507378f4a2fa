//! Agency records, the fetched table and the selectable options derived from it.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// One row of the top-tier agency result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgencyRecord {
    /// Unique key within a snapshot (e.g. "012")
    pub toptier_code: String,
    pub agency_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub abbreviation: String,
    /// Budget authority in dollars
    #[serde(default, deserialize_with = "null_as_default")]
    pub budget_authority_amount: f64,
    /// Outlays in dollars
    #[serde(default, deserialize_with = "null_as_default")]
    pub outlay_amount: f64,
}

impl AgencyRecord {
    /// Create a record from its five fields.
    pub fn new(
        toptier_code: impl Into<String>,
        agency_name: impl Into<String>,
        abbreviation: impl Into<String>,
        budget_authority_amount: f64,
        outlay_amount: f64,
    ) -> Self {
        Self {
            toptier_code: toptier_code.into(),
            agency_name: agency_name.into(),
            abbreviation: abbreviation.into(),
            budget_authority_amount,
            outlay_amount,
        }
    }
}

/// The API reports `null` for a handful of agencies without figures.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Ordered sequence of agencies, in API response order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgencyTable {
    records: Vec<AgencyRecord>,
}

impl AgencyTable {
    /// Create an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AgencyRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn records(&self) -> &[AgencyRecord] {
        &self.records
    }

    /// The first `limit` records, in table order.
    #[must_use]
    pub fn head(&self, limit: usize) -> &[AgencyRecord] {
        &self.records[..self.records.len().min(limit)]
    }

    /// First record whose toptier code equals `code`.
    #[must_use]
    pub fn find(&self, code: &str) -> Option<&AgencyRecord> {
        self.records.iter().find(|r| r.toptier_code == code)
    }

    /// Build the selectable options (`toptier_code → agency_name`) in table order.
    #[must_use]
    pub fn options(&self) -> AgencyOptions {
        self.records
            .iter()
            .map(|r| (r.toptier_code.clone(), r.agency_name.clone()))
            .collect()
    }
}

impl From<Vec<AgencyRecord>> for AgencyTable {
    fn from(records: Vec<AgencyRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<AgencyRecord> for AgencyTable {
    fn from_iter<I: IntoIterator<Item = AgencyRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AgencyTable {
    type Item = &'a AgencyRecord;
    type IntoIter = std::slice::Iter<'a, AgencyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Options of the agency selector, keyed by toptier code.
///
/// Insertion order follows the table the options were built from. A repeated
/// code keeps its first position and takes the later name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AgencyOptions {
    entries: IndexMap<String, String>,
}

impl AgencyOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// Display label for a code.
    #[must_use]
    pub fn label(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    #[must_use]
    pub fn position(&self, code: &str) -> Option<usize> {
        self.entries.get_index_of(code)
    }

    /// Code at a given position.
    #[must_use]
    pub fn code_at(&self, index: usize) -> Option<&str> {
        self.entries.get_index(index).map(|(code, _)| code.as_str())
    }

    #[must_use]
    pub fn first_code(&self) -> Option<&str> {
        self.code_at(0)
    }

    /// `(code, name)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(code, name)| (code.as_str(), name.as_str()))
    }
}

impl FromIterator<(String, String)> for AgencyOptions {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
