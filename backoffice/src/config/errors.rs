use thiserror::Error;

/// Errors emitted while reading or validating the catalog.
#[derive(Debug, Error)]
pub(crate) enum CatalogError {
    /// Filesystem operation failed.
    #[error("catalog IO failed: {0}")]
    Io(#[from] std::io::Error),
    /// JSON deserialization failed.
    #[error("catalog JSON failed: {0}")]
    Json(#[from] serde_json::Error),
    /// Two menu nodes or two modules share an id.
    #[error("duplicate {scope} id: {id}")]
    DuplicateId { scope: &'static str, id: String },
    /// The default section or a module target is not part of the menu.
    #[error("section '{id}' is not in the menu")]
    UnknownSection { id: String },
    /// A section reference names a parent group or a divider.
    #[error("section '{id}' is not a selectable menu item")]
    NotSelectable { id: String },
}
