use thiserror::Error;

/// Famille d'erreur, pour les appelants qui ne veulent pas filtrer variante par variante.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    Configuration,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedError {
    #[error("worker pool is empty")]
    EmptyPool,
    #[error("cycle length must be at least one day")]
    InvalidCycleDays,
    #[error("cycle count must be at least one")]
    InvalidCycles,
    #[error("invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidStartDate(String),
    #[error("schedule runs past the last representable date")]
    DateOverflow,
    #[error("shift table must define at least one shift kind")]
    EmptyShiftTable,
    #[error("invalid shift kind: {0}")]
    InvalidShiftKind(String),
    #[error("duplicate shift kind: {0}")]
    DuplicateShiftKind(String),
    #[error("rotation pattern needs at least one OFF slot")]
    InvalidOffSlots,
}

impl SchedError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SchedError::EmptyPool
            | SchedError::InvalidCycleDays
            | SchedError::InvalidCycles
            | SchedError::InvalidStartDate(_)
            | SchedError::DateOverflow => ErrorKind::InvalidInput,
            SchedError::EmptyShiftTable
            | SchedError::InvalidShiftKind(_)
            | SchedError::DuplicateShiftKind(_)
            | SchedError::InvalidOffSlots => ErrorKind::Configuration,
        }
    }
}
