//! Kinship Graph
//!
//! Builds a navigable family graph from a genealogical record.
//!
//! # Overview
//!
//! A record lists persons and pairwise relationships between them. The
//! graph builder turns that flat list into:
//! - **Person nodes**: one per person, with gender and principal flag
//! - **Family nodes**: a couple (or a lone parent) plus their children
//! - **Backlinks**: each person knows the families they parent and the
//!   families they are a child of
//! - **Relatives**: labeled links for every other relationship type
//!   (sibling, godparent, ...), which never create families
//!
//! # Family inference
//!
//! | Input | Result |
//! |-------|--------|
//! | Couple relationship | One family, father slot normalized by gender |
//! | Child with two parents forming a couple | Child joins that couple's family |
//! | Child with a parent not in any matched pair | Child joins that parent's single-parent family |
//! | Any other relationship | Relative entries on both persons |
//!
//! # Usage
//!
//! ```no_run
//! use kinship_domain::FamilyGraph;
//! use kinship_graph::{Document, GraphConfig, RelationshipGraph};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = Document::from_file("record.json")?;
//! let graph = RelationshipGraph::build(doc, &GraphConfig::default())?;
//!
//! for family in graph.families() {
//!     println!("{} has {} children", family.family_id(), family.children().len());
//! }
//! println!("{}", graph.stats().summary());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod builder;
pub mod config;
pub mod document;
pub mod error;
pub mod graph;
pub mod stats;

pub use config::{GraphConfig, ReferencePolicy};
pub use document::{Document, GenderRecord, PersonRecord, RelationshipRecord, ResourceReference};
pub use error::{GraphError, Result};
pub use graph::RelationshipGraph;
pub use stats::GraphStats;
