use core_types::SalesRecord;
use std::collections::HashSet;

/// The owners a dashboard is narrowed to.
///
/// An empty selection is "no filter": every record is kept, including rows
/// without an owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerSelection {
    owners: Vec<String>,
}

impl OwnerSelection {
    pub fn all() -> Self {
        Self::default()
    }

    /// Builds a selection from owner names, dropping empty names and repeats but
    /// keeping order. A selection of only empty names selects every owner.
    pub fn of<I, S>(owners: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let owners = owners
            .into_iter()
            .map(Into::into)
            .filter(|owner: &String| !owner.is_empty() && seen.insert(owner.clone()))
            .collect();
        Self { owners }
    }

    pub fn is_all(&self) -> bool {
        self.owners.is_empty()
    }

    pub fn owners(&self) -> &[String] {
        &self.owners
    }

    pub fn contains(&self, owner: &str) -> bool {
        self.is_all() || self.owners.iter().any(|selected| selected == owner)
    }

    /// Keeps the records this selection covers.
    pub fn apply<'r>(&self, records: &'r [SalesRecord]) -> Vec<&'r SalesRecord> {
        if self.is_all() {
            return records.iter().collect();
        }
        records
            .iter()
            .filter(|record| record.owner().is_some_and(|owner| self.contains(owner)))
            .collect()
    }

    /// The owners whose rank is reported: the selection itself, or every owner of
    /// the upload in first-appearance order when nothing is selected.
    pub fn ranked_owners<'a>(&'a self, records: &'a [SalesRecord]) -> Vec<&'a str> {
        if !self.is_all() {
            return self.owners.iter().map(String::as_str).collect();
        }
        let mut seen = HashSet::new();
        records
            .iter()
            .filter_map(SalesRecord::owner)
            .filter(|owner| seen.insert(*owner))
            .collect()
    }
}
