//! Relationship module - typed kinship edges between two persons

use crate::PersonRef;

/// Type URI of couple relationships
pub const COUPLE_TYPE: &str = "http://gedcomx.org/Couple";

/// Type URI of parent-child relationships
pub const PARENT_CHILD_TYPE: &str = "http://gedcomx.org/ParentChild";

/// Structural category of a relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipKind {
    /// Two persons are partners
    Couple,

    /// The first person is a parent of the second
    ParentChild,

    /// Any other kinship (sibling, godparent, ...), cosmetic only
    Other,
}

/// A pairwise relationship between two persons
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relationship {
    /// Partners, e.g. husband and wife
    Couple {
        /// Source relationship id, if any
        id: Option<String>,
        /// First partner
        person1: PersonRef,
        /// Second partner
        person2: PersonRef,
    },

    /// Parent and child
    ParentChild {
        /// Source relationship id, if any
        id: Option<String>,
        /// The parent
        parent: PersonRef,
        /// The child
        child: PersonRef,
    },

    /// Any other relationship type, kept with its type URI
    Other {
        /// Source relationship id, if any
        id: Option<String>,
        /// Type URI, e.g. `http://gedcomx.org/Godparent`
        type_uri: String,
        /// First person ("P1 is the Godparent of P2")
        person1: PersonRef,
        /// Second person
        person2: PersonRef,
    },
}

impl Relationship {
    /// Classify a source relationship by its type URI
    pub fn from_parts(type_uri: &str, id: Option<String>, person1: PersonRef, person2: PersonRef) -> Self {
        match type_uri {
            COUPLE_TYPE => Relationship::Couple { id, person1, person2 },
            PARENT_CHILD_TYPE => Relationship::ParentChild {
                id,
                parent: person1,
                child: person2,
            },
            _ => Relationship::Other {
                id,
                type_uri: type_uri.to_string(),
                person1,
                person2,
            },
        }
    }

    /// Get the structural category
    pub fn kind(&self) -> RelationshipKind {
        match self {
            Relationship::Couple { .. } => RelationshipKind::Couple,
            Relationship::ParentChild { .. } => RelationshipKind::ParentChild,
            Relationship::Other { .. } => RelationshipKind::Other,
        }
    }

    /// Get the type URI
    pub fn type_uri(&self) -> &str {
        match self {
            Relationship::Couple { .. } => COUPLE_TYPE,
            Relationship::ParentChild { .. } => PARENT_CHILD_TYPE,
            Relationship::Other { type_uri, .. } => type_uri,
        }
    }

    /// Get the source relationship id
    pub fn id(&self) -> Option<&str> {
        match self {
            Relationship::Couple { id, .. }
            | Relationship::ParentChild { id, .. }
            | Relationship::Other { id, .. } => id.as_deref(),
        }
    }

    /// Get both endpoints in source order (person1, person2)
    pub fn endpoints(&self) -> (&PersonRef, &PersonRef) {
        match self {
            Relationship::Couple { person1, person2, .. }
            | Relationship::Other { person1, person2, .. } => (person1, person2),
            Relationship::ParentChild { parent, child, .. } => (parent, child),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let couple = Relationship::from_parts(COUPLE_TYPE, None, PersonRef::local("a"), PersonRef::local("b"));
        assert_eq!(couple.kind(), RelationshipKind::Couple);

        let pc = Relationship::from_parts(PARENT_CHILD_TYPE, Some("r1".into()), PersonRef::local("a"), PersonRef::local("c"));
        match &pc {
            Relationship::ParentChild { parent, child, .. } => {
                assert_eq!(parent.person_id(), Some("a"));
                assert_eq!(child.person_id(), Some("c"));
            }
            _ => panic!("Expected ParentChild"),
        }
        assert_eq!(pc.id(), Some("r1"));

        let other = Relationship::from_parts("http://gedcomx.org/Sibling", None, PersonRef::local("a"), PersonRef::local("b"));
        assert_eq!(other.kind(), RelationshipKind::Other);
        assert_eq!(other.type_uri(), "http://gedcomx.org/Sibling");
    }

    #[test]
    fn test_endpoints_keep_source_order() {
        let pc = Relationship::from_parts(PARENT_CHILD_TYPE, None, PersonRef::local("dad"), PersonRef::local("kid"));
        let (p1, p2) = pc.endpoints();
        assert_eq!(p1.person_id(), Some("dad"));
        assert_eq!(p2.person_id(), Some("kid"));
        assert_eq!(pc.type_uri(), PARENT_CHILD_TYPE);
    }
}
