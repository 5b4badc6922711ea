//! Caller-facing errors of the registry.

use thiserror::Error;

use crate::student::RollNumber;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// add() с уже существующим roll number.
    #[error("roll number {0} already exists")]
    DuplicateKey(RollNumber),

    /// remove()/update() для отсутствующего roll number.
    #[error("student with roll number {0} not found")]
    NotFound(RollNumber),

    /// Запись снапшота не удалась; состояние в памяти не изменено.
    #[error("failed to persist snapshot: {0:#}")]
    Persist(anyhow::Error),
}

impl RegistryError {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, RegistryError::DuplicateKey(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::NotFound(_))
    }
}
