//! Display labels for relatives linked by non-structural relationships

use crate::Gender;
use std::collections::HashMap;

/// Standard label table: relationship name → 3 (symmetric) or 6 (directed) labels.
///
/// Directed entries list the labels for person1 first ("P1 is the
/// Grandparent of P2") and for person2 second.
const STANDARD_LABELS: &[(&str, &[&str])] = &[
    ("Couple", &["Husband", "Wife", "Spouse"]),
    ("ParentChild", &["Father", "Mother", "Parent", "Son", "Daughter", "Child"]),
    ("StepParentChild", &["Stepfather", "Stepmother", "Stepparent", "Stepson", "Stepdaughter", "Stepchild"]),
    ("ParentChildInLaw", &["Father-in-law", "Mother-in-law", "Parent-in-law", "Son-in-law", "Daughter-in-law", "Child-in-law"]),
    ("SurrogateParentChild", &["Surrogate father", "Surrogate mother", "Surrogate parent", "Surrogate son", "Surrogate daughter", "Surrogate child"]),
    ("AuntOrUncle", &["Uncle", "Aunt", "Aunt Or Uncle", "Nephew", "Niece", "Niece Or Nephew"]),
    ("Godparent", &["Godfather", "Godmother", "Godparent", "Godson", "Goddaughter", "Godchild"]),
    ("Sibling", &["Brother", "Sister", "Sibling"]),
    // Female form has the extra "e"
    ("Fiance", &["Fiancé", "Fiancée", "Fiancé"]),
    ("Grandparent", &["Grandfather", "Grandmother", "Grandparent", "Grandson", "Granddaughter", "Grandchild"]),
    ("GreatGrandparent", &["Great-grandfather", "Great-grandmother", "Great-grandparent", "Great-grandson", "Great-granddaughter", "Great-grandchild"]),
    ("SiblingInLaw", &["Brother-in-law", "Sister-in-law", "Sibling-in-Law"]),
    ("StepSibling", &["Stepbrother", "Stepsister", "Stepsibling"]),
    ("AncestorDescendant", &["Ancestor", "Ancestor", "Ancestor", "Descendant", "Descendant", "Descendant"]),
];

/// Labels chosen by the relative's gender
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenderedLabels {
    /// Label for a male relative
    pub male: String,
    /// Label for a female relative
    pub female: String,
    /// Label when the relative's gender is unknown
    pub neutral: String,
}

impl GenderedLabels {
    fn from_slice(labels: &[String]) -> Self {
        Self {
            male: labels[0].clone(),
            female: labels[1].clone(),
            neutral: labels[2].clone(),
        }
    }

    /// Pick the label for a gender
    pub fn pick(&self, gender: Gender) -> &str {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
            Gender::Unknown => &self.neutral,
        }
    }
}

/// Labels for one relationship type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet {
    /// Labels describing person1 (or either person, for symmetric types)
    pub forward: GenderedLabels,
    /// Labels describing person2, for directed types only
    pub reverse: Option<GenderedLabels>,
}

impl LabelSet {
    /// Build a label set from 3 (symmetric) or 6 (directed) labels
    ///
    /// # Errors
    /// Returns error for any other number of labels
    pub fn from_labels(labels: &[String]) -> Result<Self, String> {
        match labels.len() {
            3 => Ok(Self {
                forward: GenderedLabels::from_slice(labels),
                reverse: None,
            }),
            6 => Ok(Self {
                forward: GenderedLabels::from_slice(&labels[..3]),
                reverse: Some(GenderedLabels::from_slice(&labels[3..])),
            }),
            n => Err(format!("Expected 3 or 6 labels, got {}", n)),
        }
    }

    /// Pick a label for a relative of the given gender.
    ///
    /// `reverse` selects the person2 labels; symmetric sets ignore it.
    pub fn label(&self, gender: Gender, reverse: bool) -> &str {
        match (&self.reverse, reverse) {
            (Some(rev), true) => rev.pick(gender),
            _ => self.forward.pick(gender),
        }
    }
}

/// Relationship-type → label lookup used by the relative annotator
#[derive(Debug, Clone)]
pub struct RelativeLabels {
    table: HashMap<String, LabelSet>,
}

impl RelativeLabels {
    /// The standard English label table
    pub fn standard() -> Self {
        let table = STANDARD_LABELS
            .iter()
            .filter_map(|(name, labels)| {
                let owned: Vec<String> = labels.iter().map(|s| s.to_string()).collect();
                LabelSet::from_labels(&owned).ok().map(|set| (name.to_string(), set))
            })
            .collect();
        Self { table }
    }

    /// Add or replace the labels for a relationship name (e.g. `Cousin`)
    ///
    /// # Errors
    /// Returns error unless exactly 3 or 6 labels are given
    pub fn insert(&mut self, name: impl Into<String>, labels: &[String]) -> Result<(), String> {
        let set = LabelSet::from_labels(labels)?;
        self.table.insert(name.into(), set);
        Ok(())
    }

    /// Get the label set for a relationship name
    pub fn get(&self, name: &str) -> Option<&LabelSet> {
        self.table.get(name)
    }

    /// Number of relationship names in the table
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Label for a relative, given the relationship type URI and the relative's gender.
    ///
    /// For a `Grandparent` relationship P1 is the grandparent of P2. With
    /// `reverse` unset the relative is P1 (Grandfather, Grandmother,
    /// Grandparent); with `reverse` set the relative is P2 (Grandson, ...).
    /// Unknown types fall back to a label parsed from the type name.
    ///
    /// # Examples
    ///
    /// ```
    /// use kinship_domain::{Gender, RelativeLabels};
    ///
    /// let labels = RelativeLabels::standard();
    /// let uri = "http://gedcomx.org/Grandparent";
    /// assert_eq!(labels.label_for(uri, Gender::Female, false), "Grandmother");
    /// assert_eq!(labels.label_for(uri, Gender::Male, true), "Grandson");
    /// assert_eq!(labels.label_for("http://example.org/SecondCousin", Gender::Male, false), "Second Cousin");
    /// ```
    pub fn label_for(&self, type_uri: &str, relative_gender: Gender, reverse: bool) -> String {
        match self.table.get(type_name(type_uri)) {
            Some(set) => set.label(relative_gender, reverse).to_string(),
            None => parse_type(type_uri),
        }
    }
}

impl Default for RelativeLabels {
    fn default() -> Self {
        Self::standard()
    }
}

/// Base name of a type URI: everything after the final `/`
fn type_name(type_uri: &str) -> &str {
    match type_uri.rfind('/') {
        Some(i) => &type_uri[i + 1..],
        None => type_uri,
    }
}

/// Turn a type URI into a readable label: `http://x/AuntOrUncle` → `Aunt Or Uncle`
pub fn parse_type(type_uri: &str) -> String {
    let name = type_name(type_uri);
    let name = match name.rfind('#') {
        Some(i) => &name[i + 1..],
        None => name,
    };

    let mut label = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for c in name.chars() {
        if c == '_' || c == '-' {
            label.push(' ');
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower {
            label.push(' ');
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        label.push(c);
    }
    label
}
