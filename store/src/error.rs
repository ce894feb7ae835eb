use thiserror::Error;

/// Errors produced by data store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// The folder parent chain loops back on itself. Traversal keeps a
    /// visited set and reports this instead of recursing unbounded.
    #[error("cycle detected in folder parent chain at folder {id}")]
    CycleDetected { id: i64 },

    #[error("{field} references a missing {entity} (id {id})")]
    InvalidReference {
        field: &'static str,
        entity: &'static str,
        id: i64,
    },

    #[error("a folder cannot be its own parent")]
    SelfParent,
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
