//! Estado efectivo de un turno: función pura de (turno, ahora).
//!
//! Se recalcula en cada lectura; nada se escribe de vuelta. El único estado
//! persistido es el override administrativo `finalizado`, que gana siempre.

use crate::model::{Shift, ShiftStatus};
use chrono::NaiveDateTime;

/// Instantes absolutos de inicio y fin del turno, en hora local.
///
/// El fin se ancla a `end_date` cuando está guardado; si no, se deriva de
/// los campos restantes: un turno que cruza medianoche termina el día
/// siguiente a `start_date`, nunca el mismo día.
pub fn shift_interval(shift: &Shift) -> (NaiveDateTime, NaiveDateTime) {
    let start = shift.start_date.and_time(shift.start_time);
    let end_date = shift.end_date.unwrap_or_else(|| {
        if shift.spans_midnight_effective() {
            shift.start_date.succ_opt().unwrap()
        } else {
            shift.start_date
        }
    });
    let end = end_date.and_time(shift.end_time);
    (start, end)
}

/// Clasifica el turno respecto a `now`.
///
/// - override administrativo `finalizado` guardado → `finalizado`;
/// - `now < inicio` → `próximo`;
/// - `inicio <= now <= fin` → `activo` (intervalo cerrado en ambos
///   extremos: el turno está activo en el instante exacto de inicio y en
///   el de fin);
/// - `now > fin` → `finalizado`.
pub fn compute_shift_status(shift: &Shift, now: NaiveDateTime) -> ShiftStatus {
    if shift.status == Some(ShiftStatus::Finalizado) {
        return ShiftStatus::Finalizado;
    }
    let (start, end) = shift_interval(shift);
    if now < start {
        ShiftStatus::Proximo
    } else if now <= end {
        ShiftStatus::Activo
    } else {
        ShiftStatus::Finalizado
    }
}
