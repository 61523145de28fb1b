use serde::{Deserialize, Serialize};

/// Site-internal location identifier read back from the post-search URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub id: String,
    /// Location category reported by the site ("city", "region", ...).
    pub kind: String,
}

impl ResolvedLocation {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
        }
    }
}

/// A named place to harvest. `resolved` is set once at resolution time and
/// never mutated afterwards; `None` means the destination is skipped
/// downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    pub resolved: Option<ResolvedLocation>,
}

impl Destination {
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resolved: None,
        }
    }

    pub fn resolved(name: impl Into<String>, location: ResolvedLocation) -> Self {
        Self {
            name: name.into(),
            resolved: Some(location),
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.resolved {
            Some(loc) => write!(f, "{} [{} {}]", self.name, loc.kind, loc.id),
            None => write!(f, "{} [unresolved]", self.name),
        }
    }
}
