use crate::model::{DoctorId, ShiftId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictKind {
    /// Dos turnos del mismo médico se superponen en el tiempo.
    Overlap,
    /// Dos turnos del mismo médico con el mismo intervalo exacto.
    DoubleBooking,
}

#[derive(Debug, Clone)]
pub struct Conflict {
    pub doctor: DoctorId,
    pub shift_a: ShiftId,
    pub shift_b: ShiftId,
    pub kind: ConflictKind,
}

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("unknown template key: {0}")]
    UnknownTemplate(String),
    #[error("unknown doctor: {0}")]
    UnknownDoctor(String),
    #[error("unknown shift: {0}")]
    UnknownShift(String),
    #[error("shift already finalized: {0}")]
    AlreadyFinalized(String),
    #[error("reschedule invalid: {0}")]
    RescheduleInvalid(&'static str),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
