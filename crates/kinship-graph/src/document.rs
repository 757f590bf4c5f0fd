//! Source document model (GEDCOM X JSON subset)
//!
//! Only the fields the graph needs are typed. Everything else on a person
//! (names, facts, ...) is kept in `extra` for renderers to read.

use crate::error::Result;
use kinship_domain::gender::{FEMALE_TYPE, MALE_TYPE};
use kinship_domain::{Gender, PersonRef, Relationship};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// A genealogical record: persons plus typed relationships between them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Persons, in source order
    #[serde(default)]
    pub persons: Vec<PersonRecord>,

    /// Relationships, in source order
    #[serde(default)]
    pub relationships: Vec<RelationshipRecord>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a document from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Append a person
    pub fn with_person(mut self, person: PersonRecord) -> Self {
        self.persons.push(person);
        self
    }

    /// Append a relationship
    pub fn with_relationship(mut self, relationship: RelationshipRecord) -> Self {
        self.relationships.push(relationship);
        self
    }
}

/// One person in the source document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    /// Person id, referenced by relationships as `#id`
    #[serde(default)]
    pub id: String,

    /// Gender, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<GenderRecord>,

    /// Whether this person is a primary subject of the record
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub principal: bool,

    /// All other fields, preserved as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PersonRecord {
    /// Create a person record with the given id and gender
    pub fn new(id: impl Into<String>, gender: Gender) -> Self {
        let gender = match gender {
            Gender::Male => Some(GenderRecord::new(MALE_TYPE)),
            Gender::Female => Some(GenderRecord::new(FEMALE_TYPE)),
            Gender::Unknown => None,
        };
        Self {
            id: id.into(),
            gender,
            ..Self::default()
        }
    }

    /// Mark this person as a principal
    pub fn principal(mut self) -> Self {
        self.principal = true;
        self
    }

    /// Derived gender code; a missing gender is `Unknown`
    pub fn gender_code(&self) -> Gender {
        self.gender
            .as_ref()
            .map(|g| Gender::from_type_uri(&g.type_uri))
            .unwrap_or_default()
    }
}

/// Gender of a person record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderRecord {
    /// Gender type URI, e.g. `http://gedcomx.org/Female`
    #[serde(rename = "type")]
    pub type_uri: String,
}

impl GenderRecord {
    /// Create a gender record
    pub fn new(type_uri: impl Into<String>) -> Self {
        Self {
            type_uri: type_uri.into(),
        }
    }
}

/// A reference to a resource, such as `{"resource": "#p_1"}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceReference {
    /// Resource string; local references start with `#`
    #[serde(default)]
    pub resource: String,
}

/// One relationship in the source document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationshipRecord {
    /// Relationship id, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Relationship type URI
    #[serde(rename = "type", default)]
    pub type_uri: String,

    /// First endpoint (the parent, for parent-child relationships)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person1: Option<ResourceReference>,

    /// Second endpoint (the child, for parent-child relationships)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person2: Option<ResourceReference>,
}

impl RelationshipRecord {
    /// Create a relationship between two local person ids
    pub fn new(type_uri: impl Into<String>, person1: &str, person2: &str) -> Self {
        Self {
            id: None,
            type_uri: type_uri.into(),
            person1: Some(ResourceReference {
                resource: format!("#{}", person1),
            }),
            person2: Some(ResourceReference {
                resource: format!("#{}", person2),
            }),
        }
    }

    /// Set the relationship id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Convert to the typed domain relationship
    pub fn to_relationship(&self) -> Relationship {
        let endpoint = |r: &Option<ResourceReference>| {
            r.as_ref()
                .map(|r| PersonRef::new(r.resource.clone()))
                .unwrap_or_default()
        };
        Relationship::from_parts(
            &self.type_uri,
            self.id.clone(),
            endpoint(&self.person1),
            endpoint(&self.person2),
        )
    }
}
