use thiserror::Error;

/// Result type alias using RowSyncError
pub type Result<T> = std::result::Result<T, RowSyncError>;

/// Classification of every error the crates report.
///
/// Codes are stable strings; log assertions and host diagnostics match on
/// them rather than on messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Identity
    NotFound,
    DuplicateSection,
    DuplicateItem,

    // Binding
    InvalidConfig,
    Render,

    // Internal
    Internal,
}

impl ExErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::DuplicateSection => "ERR_DUPLICATE_SECTION",
            ExErrorKind::DuplicateItem => "ERR_DUPLICATE_ITEM",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Render => "ERR_RENDER",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Structured error carried across crate boundaries: a kind plus the
/// operation and the section or item that failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Name of the failing operation, e.g. `apply_snapshot`
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Item or section id the failure refers to
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Stable code of the kind, e.g. `ERR_NOT_FOUND`
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

/// Error taxonomy for store and snapshot operations
///
/// Ids are carried in their `Debug` rendering so the error type stays
/// independent of the concrete item id type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowSyncError {
    /// No item with this id is currently held by the store
    #[error("Item not found: {id}")]
    ItemNotFound { id: String },

    /// The same section id appears more than once in one snapshot
    #[error("Duplicate section id in snapshot: {section_id}")]
    DuplicateSectionId { section_id: String },

    /// The same item id appears more than once in one snapshot
    #[error("Duplicate item id in snapshot: {id}")]
    DuplicateItemId { id: String },
}

impl RowSyncError {
    pub fn kind(&self) -> ExErrorKind {
        match self {
            RowSyncError::ItemNotFound { .. } => ExErrorKind::NotFound,
            RowSyncError::DuplicateSectionId { .. } => ExErrorKind::DuplicateSection,
            RowSyncError::DuplicateItemId { .. } => ExErrorKind::DuplicateItem,
        }
    }
}

impl From<RowSyncError> for ExError {
    fn from(err: RowSyncError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        match err {
            RowSyncError::ItemNotFound { id } => ExError::new(kind)
                .with_op("store_get")
                .with_entity_id(id)
                .with_message(message),

            RowSyncError::DuplicateSectionId { section_id } => ExError::new(kind)
                .with_op("snapshot_validate")
                .with_entity_id(section_id)
                .with_message(message),

            RowSyncError::DuplicateItemId { id } => ExError::new(kind)
                .with_op("snapshot_validate")
                .with_entity_id(id)
                .with_message(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes_are_stable() {
        assert_eq!(ExErrorKind::NotFound.code(), "ERR_NOT_FOUND");
        assert_eq!(ExErrorKind::DuplicateSection.code(), "ERR_DUPLICATE_SECTION");
        assert_eq!(ExErrorKind::DuplicateItem.code(), "ERR_DUPLICATE_ITEM");
        assert_eq!(ExErrorKind::InvalidConfig.code(), "ERR_INVALID_CONFIG");
        assert_eq!(ExErrorKind::Render.code(), "ERR_RENDER");
        assert_eq!(ExErrorKind::Internal.code(), "ERR_INTERNAL");
    }

    #[test]
    fn test_ex_error_display_includes_context() {
        let err = ExError::new(ExErrorKind::Render)
            .with_op("apply_snapshot")
            .with_entity_id("s1")
            .with_message("host rejected snapshot");

        let text = err.to_string();
        assert!(text.starts_with("[ERR_RENDER]"));
        assert!(text.contains("apply_snapshot"));
        assert!(text.contains("host rejected snapshot"));
        assert!(text.contains("(entity_id: s1)"));
    }

    #[test]
    fn test_display_without_optional_fields() {
        let err = ExError::new(ExErrorKind::Internal);
        assert_eq!(err.to_string(), "[ERR_INTERNAL]");
    }
}
