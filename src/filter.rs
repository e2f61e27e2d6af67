//! List-view filtering.
//!
//! A [`FilterState`] combines one free-text query with any number of
//! categorical selections. The predicate is pure: it never reorders or
//! mutates the records it inspects, so the same state can be evaluated
//! client-side or pushed down to a real backend without changing meaning.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Article, Ticket, User};

/// The distinguished selection value meaning "no constraint for this key".
pub const ALL: &str = "all";

/// A record that can appear in a filtered list view.
pub trait Filterable {
    fn record_id(&self) -> &str;

    /// Text fields checked by free-text search, in display order.
    fn searchable_fields(&self) -> Vec<String>;

    /// The record's value for a categorical filter key, if it carries
    /// that key at all.
    fn categorical_value(&self, key: &str) -> Option<String>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text query; matches if any searchable field contains it,
    /// case-folded.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub query: String,

    /// Categorical selections keyed by filter key. A key selected as
    /// "all" is normalized to absence.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub selections: BTreeMap<String, String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self
    }

    /// Builder-style categorical selection.
    pub fn select(mut self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    /// Set a categorical selection. Selecting "all" removes the constraint.
    pub fn set(&mut self, key: &str, value: &str) {
        if value.eq_ignore_ascii_case(ALL) {
            self.selections.remove(key);
        } else {
            self.selections.insert(key.to_string(), value.to_string());
        }
    }

    /// The selected value for a key; absent keys read as "all".
    pub fn selection(&self, key: &str) -> &str {
        self.selections.get(key).map(String::as_str).unwrap_or(ALL)
    }

    pub fn is_unconstrained(&self) -> bool {
        self.query.is_empty() && self.selections.is_empty()
    }

    /// Decide whether one record passes this filter.
    pub fn matches<T: Filterable>(&self, record: &T) -> bool {
        self.matches_search(record) && self.matches_categorical(record)
    }

    /// Free-text half of the predicate: empty query matches everything,
    /// otherwise any searchable field must contain the query case-folded.
    pub fn matches_search<T: Filterable>(&self, record: &T) -> bool {
        if self.query.is_empty() {
            return true;
        }
        record
            .searchable_fields()
            .iter()
            .any(|field| contains_case_insensitive(field, &self.query))
    }

    /// Categorical half of the predicate: every selected key must equal the
    /// record's value exactly. A record missing a selected key never matches.
    pub fn matches_categorical<T: Filterable>(&self, record: &T) -> bool {
        self.selections.iter().all(|(key, want)| {
            record
                .categorical_value(key)
                .is_some_and(|have| have == *want)
        })
    }

    /// Filter a slice, preserving its relative order.
    pub fn apply<'a, T: Filterable>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|r| self.matches(*r)).collect()
    }

    /// The ids of the records visible under this filter, in store order.
    pub fn visible_ids<T: Filterable>(&self, records: &[T]) -> Vec<String> {
        self.apply(records)
            .iter()
            .map(|r| r.record_id().to_string())
            .collect()
    }

    /// One-line human summary, e.g. `query="vpn" priority=high status=new`.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if !self.query.is_empty() {
            parts.push(format!("query=\"{}\"", self.query));
        }
        for (key, value) in &self.selections {
            parts.push(format!("{key}={value}"));
        }
        if parts.is_empty() {
            "(no filters)".to_string()
        } else {
            parts.join(" ")
        }
    }
}

/// Case-insensitive substring match.
///
/// Uses `unicase` for correct Unicode case folding (handles Turkish i,
/// German ß, etc.). This folds both sides into owned strings; list views
/// are small enough that the allocation does not matter.
pub fn contains_case_insensitive(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let haystack_folded = unicase::UniCase::new(haystack).to_folded_case();
    let needle_folded = unicase::UniCase::new(needle).to_folded_case();
    haystack_folded.contains(&needle_folded)
}

impl Filterable for Ticket {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<String> {
        let mut fields = vec![
            self.id.clone(),
            self.subject.clone(),
            self.requester.name.clone(),
            self.requester.email.clone(),
        ];
        if let Some(assignee) = &self.assignee {
            fields.push(assignee.clone());
        }
        fields
    }

    fn categorical_value(&self, key: &str) -> Option<String> {
        match key {
            "status" => Some(self.status.to_string()),
            "priority" => Some(self.priority.to_string()),
            "category" => Some(self.category.to_string()),
            _ => None,
        }
    }
}

impl Filterable for User {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<String> {
        vec![self.name.clone(), self.email.clone()]
    }

    fn categorical_value(&self, key: &str) -> Option<String> {
        match key {
            "department" => Some(self.department.to_string()),
            "role" => Some(self.role.to_string()),
            "status" => Some(self.state().to_string()),
            _ => None,
        }
    }
}

impl Filterable for Article {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn searchable_fields(&self) -> Vec<String> {
        vec![self.title.clone(), self.author.clone()]
    }

    fn categorical_value(&self, key: &str) -> Option<String> {
        match key {
            "category" => Some(self.category.clone()),
            _ => None,
        }
    }
}
