//! Mined code examples and their API signatures.

use super::{ApiElement, ExampleId};
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The exact set of API elements an example exercises.
///
/// Examples are only ever compared with examples sharing an equal signature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiSignature(BTreeSet<ApiElement>);

impl ApiSignature {
    /// Returns the elements of the signature in canonical order.
    pub fn elements(&self) -> impl Iterator<Item = &ApiElement> {
        self.0.iter()
    }

    /// Returns the number of elements in the signature.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the signature references no element.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ApiElement> for ApiSignature {
    fn from_iter<I: IntoIterator<Item = ApiElement>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Where an example was mined from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExampleOrigin {
    /// Source file, relative to the project's source tree.
    pub file: Utf8PathBuf,
    /// Enclosing method or block the snippet was cut from.
    pub enclosing_member: Option<String>,
    /// First line of the snippet, 1-based.
    pub line: Option<u32>,
}

impl ExampleOrigin {
    /// Creates an origin pointing at a source file.
    #[must_use]
    pub fn new(file: impl Into<Utf8PathBuf>) -> Self {
        Self {
            file: file.into(),
            enclosing_member: None,
            line: None,
        }
    }

    /// Sets the enclosing member.
    #[must_use]
    pub fn with_enclosing_member(mut self, member: impl Into<String>) -> Self {
        self.enclosing_member = Some(member.into());
        self
    }

    /// Sets the first line.
    #[must_use]
    pub const fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }
}

/// One mined code snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    id: ExampleId,
    code: String,
    signature: ApiSignature,
    origin: ExampleOrigin,
}

impl Example {
    /// Creates an example with a fresh identifier.
    #[must_use]
    pub fn new(code: impl Into<String>, signature: ApiSignature, origin: ExampleOrigin) -> Self {
        Self {
            id: ExampleId::new(),
            code: code.into(),
            signature,
            origin,
        }
    }

    /// Returns the example identifier.
    #[must_use]
    pub const fn id(&self) -> ExampleId {
        self.id
    }

    /// Returns the literal code text.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the API signature used as the deduplication key.
    #[must_use]
    pub const fn signature(&self) -> &ApiSignature {
        &self.signature
    }

    /// Returns the provenance of the snippet.
    #[must_use]
    pub const fn origin(&self) -> &ExampleOrigin {
        &self.origin
    }

    /// Returns the source file the snippet came from.
    #[must_use]
    pub fn source_file(&self) -> &Utf8Path {
        &self.origin.file
    }
}
