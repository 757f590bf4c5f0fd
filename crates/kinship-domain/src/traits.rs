//! Trait definitions for graph consumers
//!
//! Rendering and editing layers depend on this trait only, never on how
//! the graph was built. The implementation lives in kinship-graph.

use crate::{FamilyNode, PersonHandle, PersonNode};

/// Read access to a family graph plus the single editing operation
///
/// Implemented by the graph layer (kinship-graph)
pub trait FamilyGraph {
    /// All persons, in source order
    fn persons(&self) -> &[PersonNode];

    /// All families, in creation order
    fn families(&self) -> impl Iterator<Item = &FamilyNode>;

    /// Look up a person by id
    fn person(&self, person_id: &str) -> Option<&PersonNode>;

    /// Resolve a person handle issued by this graph
    fn person_at(&self, handle: PersonHandle) -> Option<&PersonNode>;

    /// Look up a family by id
    fn family(&self, family_id: &str) -> Option<&FamilyNode>;

    /// Remove a family unit; returns `None` if it was already absent
    fn remove_family(&mut self, family_id: &str) -> Option<FamilyNode>;

    /// Resolve the families a person is a parent in
    fn spouse_families_of(&self, person: &PersonNode) -> Vec<&FamilyNode> {
        person
            .spouse_families()
            .iter()
            .filter_map(|id| self.family(id.as_str()))
            .collect()
    }

    /// Resolve the families a person is a child in
    fn parent_families_of(&self, person: &PersonNode) -> Vec<&FamilyNode> {
        person
            .parent_families()
            .iter()
            .filter_map(|id| self.family(id.as_str()))
            .collect()
    }
}
