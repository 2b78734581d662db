use super::PeopleProvider;
use crate::error::{RosterError, Result};
use crate::model::fixtures::raw_person;
use crate::model::RawPerson;
use std::cell::Cell;

#[derive(Debug, Clone)]
enum Outcome {
    Records(Vec<RawPerson>),
    Status(u16),
    Transport(String),
}

/// Canned provider for tests. Counts how often it was asked.
#[derive(Debug)]
pub struct MemoryProvider {
    outcome: Outcome,
    calls: Cell<usize>,
}

impl MemoryProvider {
    pub fn with_records(records: Vec<RawPerson>) -> Self {
        Self {
            outcome: Outcome::Records(records),
            calls: Cell::new(0),
        }
    }

    /// `count` people named `Person1 Tester`, `Person2 Tester`, ...
    pub fn with_people(count: usize) -> Self {
        let records = (1..=count)
            .map(|i| {
                raw_person(
                    &format!("Person{}", i),
                    "Tester",
                    &format!("person{}@example.test", i),
                )
            })
            .collect();
        Self::with_records(records)
    }

    pub fn failing_with_status(status: u16) -> Self {
        Self {
            outcome: Outcome::Status(status),
            calls: Cell::new(0),
        }
    }

    pub fn failing_transport(reason: &str) -> Self {
        Self {
            outcome: Outcome::Transport(reason.to_string()),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl PeopleProvider for MemoryProvider {
    fn fetch(&self) -> Result<Vec<RawPerson>> {
        self.calls.set(self.calls.get() + 1);
        match &self.outcome {
            Outcome::Records(records) => Ok(records.clone()),
            Outcome::Status(status) => Err(RosterError::Provider { status: *status }),
            Outcome::Transport(reason) => Err(RosterError::Transport(reason.clone())),
        }
    }
}
