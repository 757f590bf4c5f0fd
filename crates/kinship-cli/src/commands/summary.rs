//! Summary command implementation.

use crate::error::Result;
use crate::output::Formatter;
use kinship_graph::RelationshipGraph;

/// Execute the summary command.
pub fn execute_summary(graph: &RelationshipGraph, formatter: &Formatter) -> Result<String> {
    formatter.format_summary(&graph.stats())
}
