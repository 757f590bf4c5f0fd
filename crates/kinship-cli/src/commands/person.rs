//! Person command implementation.

use crate::cli::PersonArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use kinship_graph::RelationshipGraph;

/// Execute the person command.
pub fn execute_person(args: &PersonArgs, graph: &RelationshipGraph, formatter: &Formatter) -> Result<String> {
    let handle = graph
        .person_handle(&args.id)
        .ok_or_else(|| CliError::NotFound(format!("person '{}'", args.id)))?;
    formatter.format_person(graph, handle)
}
