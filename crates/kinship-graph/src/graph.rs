//! The relationship graph: persons, inferred families, and the links between them

use crate::builder::GraphBuilder;
use crate::config::GraphConfig;
use crate::document::{Document, PersonRecord};
use crate::error::Result;
use crate::stats::GraphStats;
use kinship_domain::{
    ChartId, FamilyGraph, FamilyId, FamilyNode, PersonHandle, PersonNode, Relationship,
    RelationshipHandle,
};
use std::collections::HashMap;
use tracing::debug;

/// A graph of persons connected through inferred family units
///
/// The graph owns every node. Families refer to persons by `PersonHandle`
/// and persons refer to families by `FamilyId`, so there is no ownership
/// cycle. Topology is fixed once built, except for `remove_family`.
///
/// # Examples
///
/// ```
/// use kinship_domain::relationship::{COUPLE_TYPE, PARENT_CHILD_TYPE};
/// use kinship_domain::{FamilyGraph, Gender};
/// use kinship_graph::{Document, GraphConfig, PersonRecord, RelationshipGraph, RelationshipRecord};
///
/// let doc = Document::new()
///     .with_person(PersonRecord::new("p1", Gender::Male))
///     .with_person(PersonRecord::new("p2", Gender::Female))
///     .with_person(PersonRecord::new("p3", Gender::Unknown))
///     .with_relationship(RelationshipRecord::new(COUPLE_TYPE, "p1", "p2"))
///     .with_relationship(RelationshipRecord::new(PARENT_CHILD_TYPE, "p1", "p3"))
///     .with_relationship(RelationshipRecord::new(PARENT_CHILD_TYPE, "p2", "p3"));
///
/// let graph = RelationshipGraph::build(doc, &GraphConfig::default()).unwrap();
/// assert_eq!(graph.families().count(), 1);
///
/// let child = graph.person("p3").unwrap();
/// assert_eq!(child.parent_families().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct RelationshipGraph {
    pub(crate) document: Document,
    pub(crate) chart_id: ChartId,
    pub(crate) relationships: Vec<Relationship>,
    pub(crate) person_nodes: Vec<PersonNode>,
    pub(crate) person_sources: Vec<usize>,
    pub(crate) person_map: HashMap<String, PersonHandle>,
    pub(crate) family_order: Vec<FamilyId>,
    pub(crate) family_map: HashMap<FamilyId, FamilyNode>,
    pub(crate) principals: Vec<PersonHandle>,
}

impl RelationshipGraph {
    /// Build a graph from a document
    ///
    /// # Errors
    /// Returns `GraphError::Config` for an invalid configuration, and
    /// `GraphError::InvalidReference` for an unknown person under the
    /// strict reference policy.
    pub fn build(document: Document, config: &GraphConfig) -> Result<Self> {
        config.validate()?;
        GraphBuilder::new(document, config)?.run()
    }

    /// Create an empty graph around a document, ready for the builder
    pub(crate) fn empty(document: Document, chart_id: ChartId) -> Self {
        Self {
            document,
            chart_id,
            relationships: Vec::new(),
            person_nodes: Vec::new(),
            person_sources: Vec::new(),
            person_map: HashMap::new(),
            family_order: Vec::new(),
            family_map: HashMap::new(),
            principals: Vec::new(),
        }
    }

    /// Register a family. A family already registered under the same id is
    /// replaced in place, keeping its position in the ordered list.
    pub(crate) fn insert_family(&mut self, family: FamilyNode) -> Option<FamilyNode> {
        let family_id = family.family_id().clone();
        let previous = self.family_map.insert(family_id.clone(), family);
        if previous.is_none() {
            self.family_order.push(family_id);
        }
        previous
    }

    /// Chart id scoping this graph's family ids
    pub fn chart_id(&self) -> &ChartId {
        &self.chart_id
    }

    /// The document this graph was built from
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Principal persons, in source order
    pub fn principals(&self) -> &[PersonHandle] {
        &self.principals
    }

    /// Look up a person's handle by id
    pub fn person_handle(&self, person_id: &str) -> Option<PersonHandle> {
        self.person_map.get(person_id).copied()
    }

    /// Source record of a person, including fields the graph does not interpret
    pub fn person_record(&self, handle: PersonHandle) -> Option<&PersonRecord> {
        let source = *self.person_sources.get(handle.index())?;
        self.document.persons.get(source)
    }

    /// Typed relationship for a handle stored on a family or child entry
    pub fn relationship(&self, handle: RelationshipHandle) -> Option<&Relationship> {
        self.relationships.get(handle.index())
    }

    /// Number of persons
    pub fn person_count(&self) -> usize {
        self.person_nodes.len()
    }

    /// Number of families
    pub fn family_count(&self) -> usize {
        self.family_order.len()
    }

    /// Tell whether `a` has a spouse that is not `b`, or vice versa.
    ///
    /// If `a` has spouse families, the answer is whether none of them pairs
    /// `a` with `b`. Otherwise the same question is asked of `b`. Persons
    /// with no spouse families at all have no different spouse.
    pub fn has_different_spouse(&self, a: PersonHandle, b: PersonHandle) -> bool {
        for (person, other) in [(a, b), (b, a)] {
            let Some(node) = self.person_at(person) else {
                continue;
            };
            if node.spouse_families().is_empty() {
                continue;
            }
            return !self
                .spouse_families_of(node)
                .iter()
                .any(|family| family.spouse_of(person) == Some(other));
        }
        false
    }

    /// Collect summary statistics
    pub fn stats(&self) -> GraphStats {
        let mut stats = GraphStats {
            persons: self.person_nodes.len(),
            principals: self.principals.len(),
            ..GraphStats::default()
        };
        for family in self.families() {
            stats.families += 1;
            if family.is_single_parent() {
                stats.single_parent_families += 1;
            } else if family.couple_relationship().is_some() {
                stats.couple_families += 1;
            }
            stats.child_links += family.children().len();
        }
        stats.relatives = self.person_nodes.iter().map(|p| p.relatives().len()).sum();
        stats
    }
}

impl FamilyGraph for RelationshipGraph {
    fn persons(&self) -> &[PersonNode] {
        &self.person_nodes
    }

    fn families(&self) -> impl Iterator<Item = &FamilyNode> {
        self.family_order
            .iter()
            .filter_map(|id| self.family_map.get(id))
    }

    fn person(&self, person_id: &str) -> Option<&PersonNode> {
        let handle = self.person_map.get(person_id)?;
        self.person_nodes.get(handle.index())
    }

    fn person_at(&self, handle: PersonHandle) -> Option<&PersonNode> {
        self.person_nodes.get(handle.index())
    }

    fn family(&self, family_id: &str) -> Option<&FamilyNode> {
        self.family_map.get(family_id)
    }

    /// Removes the family from the ordered list and the id map, and drops
    /// it from its members' spouse and parent family lists.
    fn remove_family(&mut self, family_id: &str) -> Option<FamilyNode> {
        let family = self.family_map.remove(family_id)?;
        self.family_order.retain(|id| id.as_str() != family_id);

        let members = family
            .father()
            .into_iter()
            .chain(family.mother())
            .chain(family.children().iter().map(|c| c.child));
        for member in members {
            if let Some(person) = self.person_nodes.get_mut(member.index()) {
                person.remove_family(family.family_id());
            }
        }

        debug!("Removed family {}", family_id);
        Some(family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::RelationshipRecord;
    use kinship_domain::relationship::{COUPLE_TYPE, PARENT_CHILD_TYPE};
    use kinship_domain::Gender;

    fn build(doc: Document) -> RelationshipGraph {
        RelationshipGraph::build(doc, &GraphConfig::default().with_chart_id("t")).unwrap()
    }

    fn two_marriages() -> Document {
        Document::new()
            .with_person(PersonRecord::new("h", Gender::Male))
            .with_person(PersonRecord::new("w1", Gender::Female))
            .with_person(PersonRecord::new("w2", Gender::Female))
            .with_person(PersonRecord::new("loner", Gender::Male))
            .with_person(PersonRecord::new("kid", Gender::Unknown))
            .with_relationship(RelationshipRecord::new(COUPLE_TYPE, "h", "w1"))
            .with_relationship(RelationshipRecord::new(COUPLE_TYPE, "h", "w2"))
            .with_relationship(RelationshipRecord::new(PARENT_CHILD_TYPE, "h", "kid"))
            .with_relationship(RelationshipRecord::new(PARENT_CHILD_TYPE, "w2", "kid"))
    }

    #[test]
    fn test_lookup() {
        let graph = build(two_marriages());
        assert_eq!(graph.person_count(), 5);
        assert_eq!(graph.family_count(), 2);
        assert!(graph.person("w1").is_some());
        assert!(graph.person("nobody").is_none());
        assert!(graph.family("t:h+w1").is_some());
        assert!(graph.family("t:h+nobody").is_none());

        let handle = graph.person_handle("kid").unwrap();
        assert_eq!(graph.person_at(handle).unwrap().person_id(), "kid");
        assert_eq!(graph.person_record(handle).unwrap().id, "kid");
    }

    #[test]
    fn test_has_different_spouse() {
        let graph = build(two_marriages());
        let h = graph.person_handle("h").unwrap();
        let w1 = graph.person_handle("w1").unwrap();
        let loner = graph.person_handle("loner").unwrap();
        let kid = graph.person_handle("kid").unwrap();

        assert!(!graph.has_different_spouse(h, w1));
        assert!(graph.has_different_spouse(h, loner));
        // loner has no spouse families, so the question goes to w1
        assert!(graph.has_different_spouse(loner, w1));
        assert!(!graph.has_different_spouse(loner, kid));
    }

    #[test]
    fn test_remove_family_updates_list_map_and_backlinks() {
        let mut graph = build(two_marriages());
        let removed = graph.remove_family("t:h+w2").unwrap();
        assert_eq!(removed.children().len(), 1);

        assert_eq!(graph.family_count(), 1);
        assert!(graph.family("t:h+w2").is_none());
        assert!(graph.families().all(|f| f.family_id().as_str() != "t:h+w2"));

        let h = graph.person("h").unwrap();
        assert_eq!(h.spouse_families().len(), 1);
        assert!(graph.person("w2").unwrap().spouse_families().is_empty());
        assert!(graph.person("kid").unwrap().parent_families().is_empty());

        // Already absent: no-op
        assert!(graph.remove_family("t:h+w2").is_none());
        assert_eq!(graph.family_count(), 1);
    }

    #[test]
    fn test_stats() {
        let graph = build(two_marriages());
        let stats = graph.stats();
        assert_eq!(stats.persons, 5);
        assert_eq!(stats.families, 2);
        assert_eq!(stats.couple_families, 2);
        assert_eq!(stats.single_parent_families, 0);
        assert_eq!(stats.child_links, 1);
    }

    #[test]
    fn test_relationship_handles_resolve() {
        let graph = build(two_marriages());
        let family = graph.family("t:h+w2").unwrap();
        let couple = graph.relationship(family.couple_relationship().unwrap()).unwrap();
        assert_eq!(couple.type_uri(), COUPLE_TYPE);

        let entry = family.children()[0];
        let from_father = graph.relationship(entry.father_relationship.unwrap()).unwrap();
        assert_eq!(from_father.endpoints().0.person_id(), Some("h"));
        let from_mother = graph.relationship(entry.mother_relationship.unwrap()).unwrap();
        assert_eq!(from_mother.endpoints().0.person_id(), Some("w2"));
    }
}
