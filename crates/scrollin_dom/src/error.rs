//! Document errors

use thiserror::Error;

/// Errors raised by mutating document operations.
///
/// Read accessors never fail; an unknown id reads as a neutral value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// The parent an element was appended under no longer exists
    #[error("parent element no longer exists in this document")]
    MissingParent,

    /// The element a mutation targeted no longer exists
    #[error("element no longer exists in this document")]
    MissingElement,

    /// The document root cannot be detached
    #[error("the document root cannot be removed")]
    RemoveRoot,
}
