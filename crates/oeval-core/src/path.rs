//! # Field Paths
//!
//! Dotted paths into a record, with bracketed indices for list elements:
//! `title`, `item_metadata.contributor.email`, `responses[0].text`.
//! The root path is the empty string.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A dotted field path. Serializes as a plain string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPath(String);

impl FieldPath {
    /// The empty root path.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Path to `key` below this one. At the root this is just `key`.
    pub fn child(&self, key: &str) -> Self {
        if self.0.is_empty() {
            Self(key.to_string())
        } else {
            Self(format!("{}.{key}", self.0))
        }
    }

    /// Path to element `index` of the list at this path.
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{index}]", self.0))
    }

    /// Path standing for every element of the list at this path, `field[]`.
    /// Used when describing a schema rather than a record.
    pub fn each(&self) -> Self {
        Self(format!("{}[]", self.0))
    }

    /// True for the empty root path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("(root)")
        } else {
            f.write_str(&self.0)
        }
    }
}

impl From<&str> for FieldPath {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_of_root_has_no_leading_dot() {
        assert_eq!(FieldPath::root().child("title").as_str(), "title");
    }

    #[test]
    fn nested_children_are_dotted() {
        let p = FieldPath::root().child("meta").child("contact").child("email");
        assert_eq!(p.as_str(), "meta.contact.email");
    }

    #[test]
    fn indices_are_bracketed() {
        let p = FieldPath::root().child("responses").index(3).child("text");
        assert_eq!(p.as_str(), "responses[3].text");
    }

    #[test]
    fn each_marks_all_elements() {
        let p = FieldPath::root().child("responses").each().child("score");
        assert_eq!(p.as_str(), "responses[].score");
    }

    #[test]
    fn root_displays_as_marker() {
        assert!(FieldPath::root().is_root());
        assert_eq!(FieldPath::root().to_string(), "(root)");
        assert_eq!(FieldPath::from("a.b").to_string(), "a.b");
    }

    #[test]
    fn serializes_as_plain_string() {
        let p = FieldPath::root().child("tags").index(0);
        assert_eq!(serde_json::to_value(&p).unwrap(), serde_json::json!("tags[0]"));
    }
}
