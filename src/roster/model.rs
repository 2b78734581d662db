//! Person data as the provider sends it ([`RawPerson`]) and as the rest of the
//! crate sees it ([`PersonRecord`]).
//!
//! Every nested field of the raw payload is optional at the serde level so a
//! contract violation surfaces as a [`RosterError::Validation`] naming the
//! missing field instead of an opaque decode error for the whole response.

use crate::error::{RosterError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The envelope returned by the provider: `{ "results": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderResponse {
    #[serde(default)]
    pub results: Vec<RawPerson>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPerson {
    pub name: Option<RawName>,
    pub email: Option<String>,
    pub cell: Option<String>,
    pub picture: Option<RawPicture>,
    pub location: Option<RawLocation>,
    pub dob: Option<RawDob>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawName {
    pub title: Option<String>,
    pub first: Option<String>,
    pub last: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPicture {
    pub large: Option<String>,
    pub medium: Option<String>,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawLocation {
    pub street: Option<RawStreet>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<Scalar>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawStreet {
    pub number: Option<Scalar>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDob {
    pub date: Option<String>,
    pub age: Option<u32>,
}

/// Postcodes and street numbers arrive as numbers for some nationalities and
/// strings for others (e.g. Canadian postcodes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(i64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One directory entry. Identity is the email address.
///
/// Fields are private: a record never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonRecord {
    first_name: String,
    last_name: String,
    email: String,
    cell: String,
    image: String,
    city: String,
    address: String,
    birthday: String,
}

impl PersonRecord {
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// The phone value exactly as the provider sent it.
    pub fn cell(&self) -> &str {
        &self.cell
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// The raw birth date string (ISO-like).
    pub fn birthday(&self) -> &str {
        &self.birthday
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| RosterError::Validation(format!("missing field `{}`", field)))
}

impl TryFrom<RawPerson> for PersonRecord {
    type Error = RosterError;

    fn try_from(raw: RawPerson) -> Result<Self> {
        let name = required(raw.name, "name")?;
        let first_name = required(name.first, "name.first")?;
        let last_name = required(name.last, "name.last")?;
        let email = required(raw.email, "email")?;
        if email.trim().is_empty() {
            return Err(RosterError::Validation("empty `email`".to_string()));
        }
        let cell = required(raw.cell, "cell")?;
        let image = required(required(raw.picture, "picture")?.large, "picture.large")?;

        let location = required(raw.location, "location")?;
        let street = required(location.street, "location.street")?;
        let street_number = required(street.number, "location.street.number")?;
        let street_name = required(street.name, "location.street.name")?;
        let city = required(location.city, "location.city")?;
        let state = required(location.state, "location.state")?;
        let postcode = required(location.postcode, "location.postcode")?;
        let address = format!(
            "{} {}, {}, {}, {}",
            street_number, street_name, city, state, postcode
        );

        let birthday = required(required(raw.dob, "dob")?.date, "dob.date")?;

        Ok(Self {
            first_name,
            last_name,
            email,
            cell,
            image,
            city,
            address,
            birthday,
        })
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Builds a provider-shaped record with every field populated.
    pub fn raw_person(first: &str, last: &str, email: &str) -> RawPerson {
        RawPerson {
            name: Some(RawName {
                title: Some("Mx".to_string()),
                first: Some(first.to_string()),
                last: Some(last.to_string()),
            }),
            email: Some(email.to_string()),
            cell: Some("(555) 010-2030".to_string()),
            picture: Some(RawPicture {
                large: Some(format!("https://example.test/{}.jpg", first.to_lowercase())),
                medium: None,
                thumbnail: None,
            }),
            location: Some(RawLocation {
                street: Some(RawStreet {
                    number: Some(Scalar::Number(42)),
                    name: Some("Main Street".to_string()),
                }),
                city: Some("Springfield".to_string()),
                state: Some("Oregon".to_string()),
                postcode: Some(Scalar::Number(97403)),
            }),
            dob: Some(RawDob {
                date: Some("1992-03-07T00:00:00.000Z".to_string()),
                age: Some(34),
            }),
        }
    }

    pub fn person(first: &str, last: &str, email: &str) -> PersonRecord {
        PersonRecord::try_from(raw_person(first, last, email)).unwrap()
    }
}
