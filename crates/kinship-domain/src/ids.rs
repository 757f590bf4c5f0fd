//! Identifiers and handles used to link graph nodes without ownership

use std::borrow::Borrow;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CHART_ID: AtomicU64 = AtomicU64::new(1);

/// Identifier of the chart a graph is built for.
///
/// Family ids are scoped by chart id so that two charts drawn on the same
/// page never share family identities.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChartId(String);

impl ChartId {
    /// Create a chart id from an explicit value
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Allocate the next process-wide chart id (1, 2, 3, ...)
    pub fn next() -> Self {
        Self(NEXT_CHART_ID.fetch_add(1, Ordering::Relaxed).to_string())
    }

    /// Get the chart id as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Deterministic identifier of a family unit
///
/// The id is a pure function of the chart id and the father and mother
/// person ids. An empty slot contributes an empty string, and the slots are
/// positional: a father-only family never shares an id with a mother-only
/// family for the same person.
///
/// Person ids are escaped (`\\`, `\+`, `\:`) so that distinct parent
/// pairs never render to the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FamilyId(String);

impl FamilyId {
    /// Compute the family id for the given parents
    ///
    /// # Examples
    ///
    /// ```
    /// use kinship_domain::{ChartId, FamilyId};
    ///
    /// let chart = ChartId::new("1");
    /// let couple = FamilyId::for_parents(&chart, Some("p1"), Some("p2"));
    /// assert_eq!(couple.as_str(), "1:p1+p2");
    ///
    /// let tricky = FamilyId::for_parents(&chart, Some("a+b"), None);
    /// assert_eq!(tricky.as_str(), r"1:a\+b+");
    ///
    /// let father_only = FamilyId::for_parents(&chart, Some("p1"), None);
    /// let mother_only = FamilyId::for_parents(&chart, None, Some("p1"));
    /// assert_ne!(father_only, mother_only);
    /// ```
    pub fn for_parents(chart: &ChartId, father: Option<&str>, mother: Option<&str>) -> Self {
        let mut id = String::from(chart.as_str());
        id.push(':');
        push_escaped(&mut id, father.unwrap_or(""));
        id.push('+');
        push_escaped(&mut id, mother.unwrap_or(""));
        Self(id)
    }

    /// Wrap an existing family id string, e.g. one typed by a user
    pub fn from_string(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the family id as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn push_escaped(out: &mut String, person_id: &str) {
    for c in person_id.chars() {
        if matches!(c, '\\' | '+' | ':') {
            out.push('\\');
        }
        out.push(c);
    }
}

impl Borrow<str> for FamilyId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FamilyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Handle to a person node: its position in the graph's person list.
///
/// Person nodes are never removed, so handles stay valid for the life of
/// the graph that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonHandle(usize);

impl PersonHandle {
    /// Create a handle from a list position
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Get the list position
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Handle to a relationship record: its position in the source document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RelationshipHandle(usize);

impl RelationshipHandle {
    /// Create a handle from a source position
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Get the source position
    pub fn index(&self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_chart_ids_are_distinct() {
        let a = ChartId::next();
        let b = ChartId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn test_family_id_slots_are_positional() {
        let chart = ChartId::new("c");
        let fm = FamilyId::for_parents(&chart, Some("a"), Some("b"));
        let mf = FamilyId::for_parents(&chart, Some("b"), Some("a"));
        assert_ne!(fm, mf);
        assert_eq!(FamilyId::for_parents(&chart, None, None).as_str(), "c:+");
    }

    #[test]
    fn test_family_id_separators_in_person_ids() {
        let chart = ChartId::new("c");
        // Unescaped these would both read "c:a+b+"
        let couple = FamilyId::for_parents(&chart, Some("a"), Some("b+"));
        let single = FamilyId::for_parents(&chart, Some("a+b"), None);
        assert_ne!(couple, single);
        assert_eq!(couple.as_str(), r"c:a+b\+");
        assert_eq!(single.as_str(), r"c:a\+b+");

        let colon = FamilyId::for_parents(&chart, Some("x:y"), Some("z"));
        assert_eq!(colon.as_str(), r"c:x\:y+z");
        let slash = FamilyId::for_parents(&chart, Some(r"a\"), Some("+b"));
        let other = FamilyId::for_parents(&chart, Some("a"), Some(r"\+b"));
        assert_ne!(slash, other);
    }

    #[test]
    fn test_family_id_scoped_by_chart() {
        let a = FamilyId::for_parents(&ChartId::new("1"), Some("p1"), None);
        let b = FamilyId::for_parents(&ChartId::new("2"), Some("p1"), None);
        assert_ne!(a, b);
    }

    #[test]
    fn test_family_id_lookup_by_str() {
        let id = FamilyId::for_parents(&ChartId::new("1"), Some("p1"), Some("p2"));
        let mut map = HashMap::new();
        map.insert(id.clone(), 7);
        assert_eq!(map.get("1:p1+p2"), Some(&7));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the same inputs always produce the same family id
        #[test]
        fn test_family_id_deterministic(
            chart in "[0-9]{1,3}",
            father in proptest::option::of("[a-z0-9_-]{1,8}"),
            mother in proptest::option::of("[a-z0-9_-]{1,8}"),
        ) {
            let chart = ChartId::new(chart);
            let a = FamilyId::for_parents(&chart, father.as_deref(), mother.as_deref());
            let b = FamilyId::for_parents(&chart, father.as_deref(), mother.as_deref());
            prop_assert_eq!(a, b);
        }

        /// Property: different parent pairs never share an id
        #[test]
        fn test_family_id_injective(
            a in proptest::option::of("[ab+:\\\\]{0,4}"),
            b in proptest::option::of("[ab+:\\\\]{0,4}"),
            c in proptest::option::of("[ab+:\\\\]{0,4}"),
            d in proptest::option::of("[ab+:\\\\]{0,4}"),
        ) {
            let chart = ChartId::new("1");
            let slot = |s: &Option<String>| s.clone().unwrap_or_default();
            prop_assume!((slot(&a), slot(&b)) != (slot(&c), slot(&d)));
            prop_assert_ne!(
                FamilyId::for_parents(&chart, a.as_deref(), b.as_deref()),
                FamilyId::for_parents(&chart, c.as_deref(), d.as_deref())
            );
        }

        /// Property: a lone parent in the father slot differs from the same parent in the mother slot
        #[test]
        fn test_single_parent_slot_matters(id in "[a-z0-9_-]{1,8}") {
            let chart = ChartId::new("1");
            prop_assert_ne!(
                FamilyId::for_parents(&chart, Some(id.as_str()), None),
                FamilyId::for_parents(&chart, None, Some(id.as_str()))
            );
        }
    }
}
