//! Command implementations.

pub mod families;
pub mod person;
pub mod persons;
pub mod summary;

pub use self::families::{execute_families, execute_family};
pub use self::person::execute_person;
pub use self::persons::execute_persons;
pub use self::summary::execute_summary;

use crate::error::Result;
use kinship_graph::{Document, GraphConfig, RelationshipGraph};
use std::path::Path;
use tracing::debug;

/// Load a record file and build its relationship graph.
pub fn load_graph(path: &Path, config: &GraphConfig) -> Result<RelationshipGraph> {
    debug!("Loading record from {}", path.display());
    let document = Document::from_file(path)?;
    Ok(RelationshipGraph::build(document, config)?)
}
