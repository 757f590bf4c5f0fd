//! Kinship Domain Layer
//!
//! This crate contains the core vocabulary for building family graphs out of
//! genealogical records. It has ZERO external dependencies and defines the
//! value objects, node types and trait interfaces that the graph builder and
//! any rendering layer depend upon.
//!
//! ## Key Concepts
//!
//! - **Person reference**: an endpoint of a relationship, resolved to a bare person id
//! - **Relationship**: a couple, parent-child, or other kinship edge between two persons
//! - **Gender normalization**: which of two parent candidates belongs in the father slot
//! - **Family node**: an inferred (father?, mother?, children) unit
//! - **Relative labels**: display roles such as "Aunt" or "Grandson" for non-structural edges
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Graph nodes link to each other through handles, never through ownership
//! - The `FamilyGraph` trait is the seam consumed by renderers and editors

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod gender;
pub mod ids;
pub mod labels;
pub mod node;
pub mod reference;
pub mod relationship;
pub mod traits;

// Re-exports for convenience
pub use gender::{must_swap, Gender};
pub use ids::{ChartId, FamilyId, PersonHandle, RelationshipHandle};
pub use labels::{GenderedLabels, LabelSet, RelativeLabels};
pub use node::{ChildEntry, FamilyNode, PersonNode, Relative};
pub use reference::{person_id_from_resource, PersonRef};
pub use relationship::{Relationship, RelationshipKind};
pub use traits::FamilyGraph;
