use thiserror::Error;

use crate::model::NoteId;
use crate::store::StoreError;

/// Failures raised by [`crate::service::NoteService`].
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Note not found with id: {0}")]
    NotFound(NoteId),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
