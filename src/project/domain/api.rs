//! API surface identifiers referenced by mined examples.

use super::ProjectDomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Kind of API member an element identifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiElementKind {
    /// A constructor of the declaring class.
    Constructor,
    /// A method of the declaring class.
    Method,
    /// A field of the declaring class.
    Field,
}

/// A single identifiable unit of API surface, such as a method or field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ApiElement {
    class_name: String,
    member: String,
    kind: ApiElementKind,
}

impl ApiElement {
    /// Creates an element for `member` declared on `class_name`.
    #[must_use]
    pub fn new(
        class_name: impl Into<String>,
        member: impl Into<String>,
        kind: ApiElementKind,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            member: member.into(),
            kind,
        }
    }

    /// Shorthand for a method element.
    #[must_use]
    pub fn method(class_name: impl Into<String>, member: impl Into<String>) -> Self {
        Self::new(class_name, member, ApiElementKind::Method)
    }

    /// Returns the fully qualified declaring class name.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Returns the member signature.
    #[must_use]
    pub fn member(&self) -> &str {
        &self.member
    }

    /// Returns the member kind.
    #[must_use]
    pub const fn kind(&self) -> ApiElementKind {
        self.kind
    }
}

impl fmt::Display for ApiElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.class_name, self.member)
    }
}

/// An API class together with the elements reachable from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ApiClass {
    name: String,
    elements: BTreeSet<ApiElement>,
}

impl ApiClass {
    /// Creates an API class aggregating `elements`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyApiClassName`] when the name is
    /// blank.
    pub fn new(
        name: impl Into<String>,
        elements: impl IntoIterator<Item = ApiElement>,
    ) -> Result<Self, ProjectDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ProjectDomainError::EmptyApiClassName);
        }
        Ok(Self {
            name: trimmed.to_owned(),
            elements: elements.into_iter().collect(),
        })
    }

    /// Returns the fully qualified class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the elements reachable from this class.
    #[must_use]
    pub const fn elements(&self) -> &BTreeSet<ApiElement> {
        &self.elements
    }
}
