//! Persons command implementation.

use crate::error::Result;
use crate::output::Formatter;
use kinship_graph::RelationshipGraph;

/// Execute the persons command.
pub fn execute_persons(graph: &RelationshipGraph, formatter: &Formatter) -> Result<String> {
    formatter.format_persons(graph)
}
