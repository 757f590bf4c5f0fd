//! Summary statistics for a built graph

use serde::Serialize;

/// Counts collected from a relationship graph
///
/// Couple families are those created from a couple relationship; a family
/// with both parents but no couple record cannot occur, so
/// `couple_families + single_parent_families == families`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    /// Person nodes in the graph
    pub persons: usize,

    /// Persons flagged as principals
    pub principals: usize,

    /// Families of any kind
    pub families: usize,

    /// Families built from a couple relationship
    pub couple_families: usize,

    /// Families with exactly one parent
    pub single_parent_families: usize,

    /// Child entries across all families
    pub child_links: usize,

    /// Relative entries across all persons (each relationship counts twice)
    pub relatives: usize,
}

impl GraphStats {
    /// Generate a summary report
    pub fn summary(&self) -> String {
        let lines = [
            "Relationship Graph Summary".to_string(),
            "==========================".to_string(),
            format!("Persons: {} ({} principal)", self.persons, self.principals),
            format!("Families: {}", self.families),
            format!("  Couples: {}", self.couple_families),
            format!("  Single parent: {}", self.single_parent_families),
            format!("Child links: {}", self.child_links),
            format!("Relatives: {}", self.relatives),
        ];
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lists_counts() {
        let stats = GraphStats {
            persons: 3,
            principals: 1,
            families: 2,
            couple_families: 1,
            single_parent_families: 1,
            child_links: 2,
            relatives: 0,
        };
        let summary = stats.summary();
        assert!(summary.contains("Persons: 3 (1 principal)"));
        assert!(summary.contains("Single parent: 1"));
        assert!(summary.contains("Child links: 2"));
    }

    #[test]
    fn test_default_is_empty() {
        let stats = GraphStats::default();
        assert_eq!(stats.families, 0);
        assert_eq!(stats.persons, 0);
    }
}
