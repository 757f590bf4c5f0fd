//! Gender codes and the father/mother slot rule

/// Type URI for male persons
pub const MALE_TYPE: &str = "http://gedcomx.org/Male";

/// Type URI for female persons
pub const FEMALE_TYPE: &str = "http://gedcomx.org/Female";

/// Gender of a person, derived from the record's gender type URI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gender {
    /// Male
    Male,

    /// Female
    Female,

    /// Missing or unrecognized gender
    #[default]
    Unknown,
}

impl Gender {
    /// Derive a gender from a type URI such as `http://gedcomx.org/Female`.
    ///
    /// Only the final path segment is compared, so a bare `Female` is
    /// accepted too. Anything else is `Unknown`.
    pub fn from_type_uri(uri: &str) -> Self {
        let name = match uri.rfind('/') {
            Some(i) => &uri[i + 1..],
            None => uri,
        };
        match name {
            "Male" => Gender::Male,
            "Female" => Gender::Female,
            _ => Gender::Unknown,
        }
    }

    /// Get the gender name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tell whether the candidates for the father and mother slots need to be swapped.
///
/// A missing candidate counts as `Unknown`. Ambiguity (unknown or equal
/// genders) leaves the order alone; only a definite mismatch swaps.
///
/// # Examples
///
/// ```
/// use kinship_domain::{must_swap, Gender};
///
/// assert!(must_swap(Some(Gender::Female), Some(Gender::Male)));
/// assert!(!must_swap(Some(Gender::Male), Some(Gender::Female)));
/// assert!(!must_swap(Some(Gender::Unknown), Some(Gender::Unknown)));
/// // A lone female parent moves to the mother slot
/// assert!(must_swap(Some(Gender::Female), None));
/// ```
pub fn must_swap(father: Option<Gender>, mother: Option<Gender>) -> bool {
    let guy = father.unwrap_or_default();
    let gal = mother.unwrap_or_default();
    (guy != Gender::Male && gal == Gender::Male) || (guy == Gender::Female && gal != Gender::Female)
}
