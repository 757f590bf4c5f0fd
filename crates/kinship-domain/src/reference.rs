//! Relationship endpoint references

/// Extract the bare person id from a resource string.
///
/// Local references look like `#p_1` and yield `p_1`. Anything else has its
/// `?query` suffix dropped, then everything up to the last `/`, then
/// everything up to the last `:`. That collapses
/// `https://familysearch.org/ark:/61903/1:1:XXXX-YYY?x=1` to `XXXX-YYY`.
///
/// Returns `None` when nothing is left. No other validation is performed.
///
/// # Examples
///
/// ```
/// use kinship_domain::person_id_from_resource;
///
/// assert_eq!(person_id_from_resource("#p_1"), Some("p_1"));
/// assert_eq!(
///     person_id_from_resource("https://familysearch.org/platform/records/personas/XXXX-YYY"),
///     Some("XXXX-YYY")
/// );
/// assert_eq!(person_id_from_resource(""), None);
/// ```
pub fn person_id_from_resource(resource: &str) -> Option<&str> {
    if resource.is_empty() {
        return None;
    }

    let id = match resource.strip_prefix('#') {
        Some(local) => local,
        None => {
            let no_params = match resource.find('?') {
                Some(i) => &resource[..i],
                None => resource,
            };
            let last_segment = match no_params.rfind('/') {
                Some(i) => &no_params[i + 1..],
                None => no_params,
            };
            match last_segment.rfind(':') {
                Some(i) => &last_segment[i + 1..],
                None => last_segment,
            }
        }
    };

    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// One endpoint of a relationship, as written in the source document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PersonRef {
    resource: String,
}

impl PersonRef {
    /// Create a reference from its resource string
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
        }
    }

    /// Create a local reference (`#id`) to a person in the same document
    pub fn local(person_id: &str) -> Self {
        Self::new(format!("#{}", person_id))
    }

    /// Get the raw resource string
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Resolve the referenced person id
    pub fn person_id(&self) -> Option<&str> {
        person_id_from_resource(&self.resource)
    }
}
