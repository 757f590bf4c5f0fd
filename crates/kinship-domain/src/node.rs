//! Person and family nodes of the relationship graph

use crate::{FamilyId, Gender, PersonHandle, RelationshipHandle};

/// A labeled cross-reference to another person (e.g. "Aunt", "Godson")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relative {
    /// Role of the other person relative to this one
    pub label: String,

    /// The other person
    pub person: PersonHandle,
}

/// A person in the graph, wrapping one source person record
#[derive(Debug, Clone, PartialEq)]
pub struct PersonNode {
    person_id: String,
    gender: Gender,
    is_principal: bool,
    spouse_families: Vec<FamilyId>,
    parent_families: Vec<FamilyId>,
    relatives: Vec<Relative>,
}

impl PersonNode {
    /// Create a person node with no family links yet
    pub fn new(person_id: impl Into<String>, gender: Gender, is_principal: bool) -> Self {
        Self {
            person_id: person_id.into(),
            gender,
            is_principal,
            spouse_families: Vec::new(),
            parent_families: Vec::new(),
            relatives: Vec::new(),
        }
    }

    /// Person id, unique within the graph
    pub fn person_id(&self) -> &str {
        &self.person_id
    }

    /// Gender of the person
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Whether this person is a primary subject of the record
    pub fn is_principal(&self) -> bool {
        self.is_principal
    }

    /// Families in which this person is the father or mother, in creation order
    pub fn spouse_families(&self) -> &[FamilyId] {
        &self.spouse_families
    }

    /// Families in which this person is a child, in creation order
    pub fn parent_families(&self) -> &[FamilyId] {
        &self.parent_families
    }

    /// Non-structural relatives, in source order
    pub fn relatives(&self) -> &[Relative] {
        &self.relatives
    }

    /// Record a family in which this person is a parent
    pub fn add_spouse_family(&mut self, family_id: FamilyId) {
        self.spouse_families.push(family_id);
    }

    /// Record a family in which this person is a child
    pub fn add_parent_family(&mut self, family_id: FamilyId) {
        self.parent_families.push(family_id);
    }

    /// Record a labeled relative
    pub fn add_relative(&mut self, label: impl Into<String>, person: PersonHandle) {
        self.relatives.push(Relative {
            label: label.into(),
            person,
        });
    }

    /// Drop every link to the given family
    pub fn remove_family(&mut self, family_id: &FamilyId) {
        self.spouse_families.retain(|f| f != family_id);
        self.parent_families.retain(|f| f != family_id);
    }
}

/// A child of a family, with the relationship records that link it to each parent
///
/// Source documents link a child to each parent individually, so the two
/// records are kept separately. Either may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildEntry {
    /// The child
    pub child: PersonHandle,

    /// Parent-child relationship from the father
    pub father_relationship: Option<RelationshipHandle>,

    /// Parent-child relationship from the mother
    pub mother_relationship: Option<RelationshipHandle>,
}

/// A family unit: up to two parents and their shared children
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyNode {
    family_id: FamilyId,
    father: Option<PersonHandle>,
    mother: Option<PersonHandle>,
    couple_relationship: Option<RelationshipHandle>,
    children: Vec<ChildEntry>,
}

impl FamilyNode {
    /// Create a family with no children yet
    pub fn new(
        family_id: FamilyId,
        father: Option<PersonHandle>,
        mother: Option<PersonHandle>,
        couple_relationship: Option<RelationshipHandle>,
    ) -> Self {
        Self {
            family_id,
            father,
            mother,
            couple_relationship,
            children: Vec::new(),
        }
    }

    /// Family id
    pub fn family_id(&self) -> &FamilyId {
        &self.family_id
    }

    /// Father, if any
    pub fn father(&self) -> Option<PersonHandle> {
        self.father
    }

    /// Mother, if any
    pub fn mother(&self) -> Option<PersonHandle> {
        self.mother
    }

    /// Couple relationship this family was built from; none for single-parent families
    pub fn couple_relationship(&self) -> Option<RelationshipHandle> {
        self.couple_relationship
    }

    /// Children in the order they were attached
    pub fn children(&self) -> &[ChildEntry] {
        &self.children
    }

    /// Whether only one parent slot is filled
    pub fn is_single_parent(&self) -> bool {
        self.father.is_some() != self.mother.is_some()
    }

    /// Get the other parent of this family, given one of its parents
    pub fn spouse_of(&self, person: PersonHandle) -> Option<PersonHandle> {
        if self.father == Some(person) {
            self.mother
        } else if self.mother == Some(person) {
            self.father
        } else {
            None
        }
    }

    /// Attach a child with its parent-child relationship records.
    ///
    /// A child already present is not duplicated; any relationship slot it
    /// was missing is filled in instead.
    pub fn add_child(
        &mut self,
        child: PersonHandle,
        father_relationship: Option<RelationshipHandle>,
        mother_relationship: Option<RelationshipHandle>,
    ) {
        if let Some(entry) = self.children.iter_mut().find(|c| c.child == child) {
            entry.father_relationship = entry.father_relationship.or(father_relationship);
            entry.mother_relationship = entry.mother_relationship.or(mother_relationship);
            return;
        }
        self.children.push(ChildEntry {
            child,
            father_relationship,
            mother_relationship,
        });
    }
}
