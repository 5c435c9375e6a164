//! The Person entity.
//!
//! The sole record type in the system. `id` is unset for new records and
//! assigned by the store on insert. Wire format uses camelCase for
//! `phoneNumber`; all other fields serialize under their own names.

use serde::{Deserialize, Serialize};

/// A single directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unset for new records; assigned by the store on insert.
    #[serde(default)]
    pub id: Option<u64>,

    /// Display name.
    pub name: String,

    /// Free-form location string.
    pub city: String,

    /// Free-form phone number, no format validation.
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
}

impl Person {
    /// Create a new unsaved person (no id).
    pub fn new(
        name: impl Into<String>,
        city: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            city: city.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Create a person with an explicit id (used for seeding and tests).
    pub fn with_id(
        id: u64,
        name: impl Into<String>,
        city: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            city: city.into(),
            phone_number: phone_number.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let person = Person::with_id(1, "John Doe", "Paris", "123-456-7890");
        let json = serde_json::to_value(&person).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "John Doe");
        assert_eq!(json["city"], "Paris");
        assert_eq!(json["phoneNumber"], "123-456-7890");
    }

    #[test]
    fn test_deserializes_without_id() {
        let json = r#"{"name":"fahd","city":"casablanca","phoneNumber":"212-234566789"}"#;
        let person: Person = serde_json::from_str(json).unwrap();

        assert_eq!(person.id, None);
        assert_eq!(person.name, "fahd");
        assert_eq!(person.city, "casablanca");
        assert_eq!(person.phone_number, "212-234566789");
    }

    #[test]
    fn test_deserializes_with_explicit_id() {
        let json = r#"{"id":4,"name":"John Doe","city":"New York","phoneNumber":"123-456-7890"}"#;
        let person: Person = serde_json::from_str(json).unwrap();

        assert_eq!(person.id, Some(4));
    }
}
