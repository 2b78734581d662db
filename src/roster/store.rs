//! # Directory Store
//!
//! The ordered, in-memory collection of [`PersonRecord`]s for one session.
//! It is filled exactly once from the provider payload and is read-only
//! afterwards. The page owns it and lends it to the components that need
//! lookups, so there is no global directory state.

use crate::error::{RosterError, Result};
use crate::model::{PersonRecord, RawPerson};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct DirectoryStore {
    records: Vec<PersonRecord>,
    by_email: HashMap<String, usize>,
    loaded: bool,
}

impl DirectoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populates the store in provider order.
    ///
    /// The whole batch is validated before anything is stored: a missing field,
    /// an empty email or a duplicate email leaves the store empty.
    pub fn load(&mut self, raw: Vec<RawPerson>) -> Result<()> {
        if self.loaded {
            return Err(RosterError::Store("directory is already loaded".to_string()));
        }

        let mut records = Vec::with_capacity(raw.len());
        let mut by_email = HashMap::with_capacity(raw.len());
        for (position, person) in raw.into_iter().enumerate() {
            let record = PersonRecord::try_from(person)?;
            if by_email.insert(record.email().to_string(), position).is_some() {
                return Err(RosterError::Validation(format!(
                    "duplicate email `{}`",
                    record.email()
                )));
            }
            records.push(record);
        }

        self.records = records;
        self.by_email = by_email;
        self.loaded = true;
        tracing::debug!(count = self.records.len(), "directory loaded");
        Ok(())
    }

    /// `None` is the not-found signal; a miss is never an error here.
    pub fn find_by_email(&self, email: &str) -> Option<&PersonRecord> {
        self.by_email.get(email).map(|&i| &self.records[i])
    }

    pub fn records(&self) -> &[PersonRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::raw_person;

    fn three() -> Vec<RawPerson> {
        vec![
            raw_person("Ann", "Lee", "ann@example.test"),
            raw_person("Bob", "Ray", "bob@example.test"),
            raw_person("Cy", "Moe", "cy@example.test"),
        ]
    }

    #[test]
    fn load_keeps_provider_order() {
        let mut store = DirectoryStore::new();
        store.load(three()).unwrap();
        let emails: Vec<&str> = store.records().iter().map(|r| r.email()).collect();
        assert_eq!(emails, ["ann@example.test", "bob@example.test", "cy@example.test"]);
        assert!(store.is_loaded());
    }

    #[test]
    fn find_by_email_hits_and_misses() {
        let mut store = DirectoryStore::new();
        store.load(three()).unwrap();
        assert_eq!(
            store.find_by_email("bob@example.test").unwrap().first_name(),
            "Bob"
        );
        assert!(store.find_by_email("nobody@example.test").is_none());
    }

    #[test]
    fn second_load_is_rejected() {
        let mut store = DirectoryStore::new();
        store.load(three()).unwrap();
        assert!(matches!(store.load(three()), Err(RosterError::Store(_))));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn duplicate_emails_are_rejected() {
        let mut store = DirectoryStore::new();
        let raw = vec![
            raw_person("Ann", "Lee", "same@example.test"),
            raw_person("Bob", "Ray", "same@example.test"),
        ];
        assert!(matches!(store.load(raw), Err(RosterError::Validation(_))));
        assert!(store.is_empty());
        assert!(!store.is_loaded());
    }

    #[test]
    fn invalid_record_leaves_store_empty() {
        let mut store = DirectoryStore::new();
        let mut raw = three();
        raw[1].dob = None;
        assert!(matches!(store.load(raw), Err(RosterError::Validation(_))));
        assert!(store.is_empty());
    }
}
