//! Family listing and lookup.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use kinship_domain::FamilyGraph;
use kinship_graph::RelationshipGraph;

/// Execute the families command.
pub fn execute_families(graph: &RelationshipGraph, formatter: &Formatter) -> Result<String> {
    formatter.format_families(graph)
}

/// Show a single family by id.
pub fn execute_family(graph: &RelationshipGraph, family_id: &str, formatter: &Formatter) -> Result<String> {
    let family = graph
        .family(family_id)
        .ok_or_else(|| CliError::NotFound(format!("family '{}'", family_id)))?;
    formatter.format_family(graph, family)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use kinship_domain::relationship::COUPLE_TYPE;
    use kinship_domain::Gender;
    use kinship_graph::{Document, GraphConfig, PersonRecord, RelationshipRecord};

    #[test]
    fn test_family_lookup() {
        let doc = Document::new()
            .with_person(PersonRecord::new("a", Gender::Male))
            .with_person(PersonRecord::new("b", Gender::Female))
            .with_relationship(RelationshipRecord::new(COUPLE_TYPE, "a", "b"));
        let graph = RelationshipGraph::build(doc, &GraphConfig::default().with_chart_id("x")).unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        assert_eq!(execute_family(&graph, "x:a+b", &formatter).unwrap(), "x:a+b");
        assert!(matches!(
            execute_family(&graph, "x:b+a", &formatter),
            Err(CliError::NotFound(_))
        ));
    }
}
