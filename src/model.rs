//! Entity types - the four record shapes held by the store
//!
//! - `Author` / `Book`: the bookstore, joined on `Book::author_id`
//! - `Continent` / `Country`: the atlas, joined on `Country::continent_code`
//!
//! Relationships are never stored on the records; they are computed by
//! [`crate::graph`] when a relationship field is read.

use crate::{Error, Result};
use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Record identifier. Maps onto GraphQL `Int`.
pub type Id = i32;

/// A book author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[graphql(complex, rename_fields = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: Id,
    pub name: String,
}

impl Author {
    pub fn new(id: Id, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// A book. `author_id` is not checked against the author collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[graphql(complex, rename_fields = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: Id,
    pub name: String,
    pub author_id: Id,
}

impl Book {
    pub fn new(id: Id, name: impl Into<String>, author_id: Id) -> Self {
        Self {
            id,
            name: name.into(),
            author_id,
        }
    }
}

/// A continent. `code` (e.g. "AF") is the join key for countries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[graphql(complex, rename_fields = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct Continent {
    pub id: Id,
    pub name: String,
    pub code: String,
}

impl Continent {
    pub fn new(id: Id, name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            code: code.into(),
        }
    }
}

/// A country, belonging to the continent whose code is `continent_code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[graphql(complex, rename_fields = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: Id,
    pub name: String,
    pub code: String,
    pub capital: Option<String>,
    pub continent_code: String,
}

impl Country {
    pub fn new(
        id: Id,
        name: impl Into<String>,
        code: impl Into<String>,
        capital: Option<&str>,
        continent_code: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            code: code.into(),
            capital: capital.map(str::to_string),
            continent_code: continent_code.into(),
        }
    }
}

/// The four collections held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Author,
    Book,
    Continent,
    Country,
}

impl EntityKind {
    /// Get the string representation of the entity kind
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Author => "author",
            EntityKind::Book => "book",
            EntityKind::Continent => "continent",
            EntityKind::Country => "country",
        }
    }

    /// Plural collection name, as used in headings
    pub fn plural(&self) -> &'static str {
        match self {
            EntityKind::Author => "authors",
            EntityKind::Book => "books",
            EntityKind::Continent => "continents",
            EntityKind::Country => "countries",
        }
    }

    /// Get all entity kinds
    pub fn all() -> &'static [EntityKind] {
        &[
            EntityKind::Author,
            EntityKind::Book,
            EntityKind::Continent,
            EntityKind::Country,
        ]
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "author" | "authors" => Ok(EntityKind::Author),
            "book" | "books" => Ok(EntityKind::Book),
            "continent" | "continents" => Ok(EntityKind::Continent),
            "country" | "countries" => Ok(EntityKind::Country),
            _ => Err(Error::UnknownEntity(s.to_string())),
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_parsing() {
        assert_eq!("books".parse::<EntityKind>().unwrap(), EntityKind::Book);
        assert_eq!("Country".parse::<EntityKind>().unwrap(), EntityKind::Country);
        assert!(matches!(
            "planets".parse::<EntityKind>(),
            Err(Error::UnknownEntity(name)) if name == "planets"
        ));
    }

    #[test]
    fn test_entity_kind_round_trips_through_display() {
        for kind in EntityKind::all() {
            assert_eq!(kind.to_string().parse::<EntityKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn test_plural_names() {
        assert_eq!(EntityKind::Country.plural(), "countries");
        assert_eq!(EntityKind::Book.plural(), "books");
        for kind in EntityKind::all() {
            assert_eq!(kind.plural().parse::<EntityKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn test_country_serializes_camel_case() {
        let country = Country::new(1, "Egypt", "EG", Some("Cairo"), "AF");
        let json = serde_json::to_value(&country).unwrap();
        assert_eq!(json["continentCode"], "AF");
        assert_eq!(json["capital"], "Cairo");
    }
}
