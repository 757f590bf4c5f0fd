//! Graph construction pipeline
//!
//! ```text
//! persons → couples → children (pairing + single parents) → backlinks → relatives
//! ```
//!
//! Each pass runs exactly once, in that order, over the whole document.

use crate::config::{GraphConfig, ReferencePolicy};
use crate::document::Document;
use crate::error::{GraphError, Result};
use crate::graph::RelationshipGraph;
use kinship_domain::{
    must_swap, FamilyId, FamilyNode, Gender, PersonHandle, PersonNode, PersonRef, Relationship,
    RelationshipHandle, RelativeLabels,
};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// A declared parent of some child, with the relationship that declares it
#[derive(Debug, Clone, Copy)]
struct ParentLink {
    parent: PersonHandle,
    relationship: RelationshipHandle,
}

/// Runs the construction passes over a graph under construction
pub(crate) struct GraphBuilder {
    graph: RelationshipGraph,
    relationships: Vec<Relationship>,
    labels: RelativeLabels,
    policy: ReferencePolicy,
}

impl GraphBuilder {
    pub(crate) fn new(document: Document, config: &GraphConfig) -> Result<Self> {
        let labels = config.relative_labels()?;
        let relationships = document
            .relationships
            .iter()
            .map(|r| r.to_relationship())
            .collect();
        let graph = RelationshipGraph::empty(document, config.resolve_chart_id());
        Ok(Self {
            graph,
            relationships,
            labels,
            policy: config.reference_policy,
        })
    }

    pub(crate) fn run(mut self) -> Result<RelationshipGraph> {
        self.add_person_nodes();
        self.add_couples()?;
        self.add_children()?;
        self.add_families_to_person_nodes();
        self.add_relatives()?;

        self.graph.relationships = self.relationships;
        let stats = self.graph.stats();
        info!(
            "Built relationship graph {}: {} persons, {} families ({} single-parent), {} relatives",
            self.graph.chart_id,
            stats.persons,
            stats.families,
            stats.single_parent_families,
            stats.relatives
        );
        Ok(self.graph)
    }

    /// One person node per source person, in source order
    fn add_person_nodes(&mut self) {
        let graph = &mut self.graph;
        for (index, record) in graph.document.persons.iter().enumerate() {
            if record.id.is_empty() {
                warn!("Skipping person at position {} with no id", index);
                continue;
            }
            if graph.person_map.contains_key(&record.id) {
                warn!("Skipping duplicate person id '{}' at position {}", record.id, index);
                continue;
            }

            let handle = PersonHandle::from_index(graph.person_nodes.len());
            graph
                .person_nodes
                .push(PersonNode::new(record.id.clone(), record.gender_code(), record.principal));
            graph.person_sources.push(index);
            graph.person_map.insert(record.id.clone(), handle);
            if record.principal {
                graph.principals.push(handle);
            }
        }
        debug!("Added {} person nodes", graph.person_nodes.len());
    }

    /// One family per couple relationship, father slot normalized by gender
    fn add_couples(&mut self) -> Result<()> {
        for (index, rel) in self.relationships.iter().enumerate() {
            let Relationship::Couple { person1, person2, .. } = rel else {
                continue;
            };
            let (Some(p1), Some(p2)) = (self.resolve(index, person1)?, self.resolve(index, person2)?)
            else {
                continue;
            };
            if p1 == p2 {
                warn!(
                    "Skipping couple relationship {}: both partners are the same person",
                    relationship_label(rel, index)
                );
                continue;
            }

            let (father, mother) = if must_swap(Some(self.gender(p1)), Some(self.gender(p2))) {
                (p2, p1)
            } else {
                (p1, p2)
            };
            let family_id = self.family_id(Some(father), Some(mother));
            let family = FamilyNode::new(
                family_id.clone(),
                Some(father),
                Some(mother),
                Some(RelationshipHandle::from_index(index)),
            );
            if self.graph.insert_family(family).is_some() {
                warn!(
                    "Couple {} declared more than once; relationship {} replaces the earlier family",
                    family_id,
                    relationship_label(rel, index)
                );
            }
        }
        debug!("Added {} couple families", self.graph.family_order.len());
        Ok(())
    }

    /// Map each child to its declared parents, in source order
    fn parent_map(&self) -> Result<HashMap<PersonHandle, Vec<ParentLink>>> {
        let mut parent_map: HashMap<PersonHandle, Vec<ParentLink>> = HashMap::new();
        for (index, rel) in self.relationships.iter().enumerate() {
            let Relationship::ParentChild { parent, child, .. } = rel else {
                continue;
            };
            let (Some(parent), Some(child)) = (self.resolve(index, parent)?, self.resolve(index, child)?)
            else {
                continue;
            };
            parent_map.entry(child).or_default().push(ParentLink {
                parent,
                relationship: RelationshipHandle::from_index(index),
            });
        }
        Ok(parent_map)
    }

    /// Attach every child to a family.
    ///
    /// Pairs of declared parents are tried in upper-triangular order
    /// (i < j, declaration order). The first pair matching an existing couple
    /// wins and consumes both parents. Whatever is left over gets a
    /// single-parent family, shared with siblings of the same parent.
    fn add_children(&mut self) -> Result<()> {
        let parent_map = self.parent_map()?;

        for child_index in 0..self.graph.person_nodes.len() {
            let child = PersonHandle::from_index(child_index);
            let Some(links) = parent_map.get(&child) else {
                continue;
            };

            let mut consumed = vec![false; links.len()];
            for i in 0..links.len() {
                for j in (i + 1)..links.len() {
                    if consumed[i] || consumed[j] {
                        continue;
                    }
                    if self.attach_to_couple(child, links[i], links[j]) {
                        consumed[i] = true;
                        consumed[j] = true;
                    }
                }
            }

            for (link, _) in links.iter().zip(&consumed).filter(|(_, used)| !**used) {
                self.attach_to_single_parent(child, *link);
            }
        }
        Ok(())
    }

    /// Attach a child to the couple family formed by two of its parents, if there is one
    fn attach_to_couple(&mut self, child: PersonHandle, first: ParentLink, second: ParentLink) -> bool {
        let (mut father, mut mother) = (first, second);
        if must_swap(Some(self.gender(father.parent)), Some(self.gender(mother.parent))) {
            std::mem::swap(&mut father, &mut mother);
        }

        let mut family_id = self.family_id(Some(father.parent), Some(mother.parent));
        if !self.graph.family_map.contains_key(&family_id) {
            // Genders unknown or equal: the couple may be registered the other way round
            family_id = self.family_id(Some(mother.parent), Some(father.parent));
            if !self.graph.family_map.contains_key(&family_id) {
                return false;
            }
            std::mem::swap(&mut father, &mut mother);
        }

        match self.graph.family_map.get_mut(&family_id) {
            Some(family) => {
                family.add_child(child, Some(father.relationship), Some(mother.relationship));
                true
            }
            None => false,
        }
    }

    /// Attach a child to the single-parent family of one parent, creating it on first use
    fn attach_to_single_parent(&mut self, child: PersonHandle, link: ParentLink) {
        let (father, mother) = if must_swap(Some(self.gender(link.parent)), None) {
            (None, Some(link))
        } else {
            (Some(link), None)
        };

        let family_id = self.family_id(father.map(|l| l.parent), mother.map(|l| l.parent));
        if !self.graph.family_map.contains_key(&family_id) {
            debug!("Creating single-parent family {}", family_id);
            self.graph.insert_family(FamilyNode::new(
                family_id.clone(),
                father.map(|l| l.parent),
                mother.map(|l| l.parent),
                None,
            ));
        }
        if let Some(family) = self.graph.family_map.get_mut(&family_id) {
            family.add_child(
                child,
                father.map(|l| l.relationship),
                mother.map(|l| l.relationship),
            );
        }
    }

    /// Wire every family back onto its father, mother and children
    fn add_families_to_person_nodes(&mut self) {
        let graph = &mut self.graph;
        for family_id in &graph.family_order {
            let Some(family) = graph.family_map.get(family_id) else {
                continue;
            };
            let parents = family.father().into_iter().chain(family.mother());
            for parent in parents {
                graph.person_nodes[parent.index()].add_spouse_family(family_id.clone());
            }
            for entry in family.children() {
                graph.person_nodes[entry.child.index()].add_parent_family(family_id.clone());
            }
        }
    }

    /// Record every non-structural relationship as a labeled relative on both persons
    fn add_relatives(&mut self) -> Result<()> {
        for (index, rel) in self.relationships.iter().enumerate() {
            let Relationship::Other { type_uri, person1, person2, .. } = rel else {
                continue;
            };
            let (Some(p1), Some(p2)) = (self.resolve(index, person1)?, self.resolve(index, person2)?)
            else {
                continue;
            };

            // person2 is the relative of person1 in the reverse direction, and vice versa
            let label_for_p2 = self.labels.label_for(type_uri, self.gender(p2), true);
            let label_for_p1 = self.labels.label_for(type_uri, self.gender(p1), false);
            self.graph.person_nodes[p1.index()].add_relative(label_for_p2, p2);
            self.graph.person_nodes[p2.index()].add_relative(label_for_p1, p1);
        }
        Ok(())
    }

    /// Resolve an endpoint to a person node, applying the reference policy on a miss
    fn resolve(&self, index: usize, reference: &PersonRef) -> Result<Option<PersonHandle>> {
        let handle = reference
            .person_id()
            .and_then(|id| self.graph.person_map.get(id).copied());
        if handle.is_some() {
            return Ok(handle);
        }

        let label = relationship_label(&self.relationships[index], index);
        match self.policy {
            ReferencePolicy::Skip => {
                warn!(
                    "Skipping relationship {}: '{}' does not name a known person",
                    label,
                    reference.resource()
                );
                Ok(None)
            }
            ReferencePolicy::Strict => Err(GraphError::InvalidReference {
                relationship: label,
                reference: reference.resource().to_string(),
            }),
        }
    }

    fn gender(&self, person: PersonHandle) -> Gender {
        self.graph.person_nodes[person.index()].gender()
    }

    fn family_id(&self, father: Option<PersonHandle>, mother: Option<PersonHandle>) -> FamilyId {
        let id_of = |h: PersonHandle| self.graph.person_nodes[h.index()].person_id();
        FamilyId::for_parents(&self.graph.chart_id, father.map(id_of), mother.map(id_of))
    }
}

/// Relationship id for log and error messages, or its position when it has none
fn relationship_label(rel: &Relationship, index: usize) -> String {
    match rel.id() {
        Some(id) => id.to_string(),
        None => format!("#{}", index),
    }
}
