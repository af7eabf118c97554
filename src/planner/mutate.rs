use super::{util, PlanError, Planner};
use crate::model::{Shift, ShiftId, ShiftStatus};
use anyhow::Context;
use chrono::NaiveDate;

/// Cierre administrativo: fija el override `finalizado` en el registro.
/// A partir de aquí la derivación por reloj deja de aplicar.
pub(super) fn finalize(planner: &mut Planner, shift_id: &ShiftId) -> Result<(), PlanError> {
    let Some(shift) = planner.agenda.find_shift_mut(shift_id) else {
        return Err(PlanError::UnknownShift(shift_id.as_str().to_string()));
    };
    if shift.status == Some(ShiftStatus::Finalizado) {
        return Err(PlanError::AlreadyFinalized(shift_id.as_str().to_string()));
    }
    shift.status = Some(ShiftStatus::Finalizado);
    Ok(())
}

/// Mueve el turno a otra fecha conservando las horas de la plantilla.
/// `end_date` se recalcula con la misma regla de cruce de medianoche.
pub(super) fn reschedule(
    planner: &mut Planner,
    shift_id: &ShiftId,
    new_date: NaiveDate,
) -> Result<(), PlanError> {
    let Some(shift) = planner.agenda.find_shift_mut(shift_id) else {
        return Err(PlanError::UnknownShift(shift_id.as_str().to_string()));
    };
    if shift.status == Some(ShiftStatus::Finalizado) {
        return Err(PlanError::RescheduleInvalid("shift already finalized"));
    }
    let end_date = if shift.spans_midnight_effective() {
        new_date.succ_opt().context("date overflow")?
    } else {
        new_date
    };
    shift.start_date = new_date;
    shift.end_date = Some(end_date);
    Ok(())
}

/// Quita el turno de la agenda y lo devuelve.
pub(super) fn cancel(planner: &mut Planner, shift_id: &ShiftId) -> Result<Shift, PlanError> {
    let Some(pos) = util::find_shift_index(&planner.agenda.shifts, shift_id) else {
        return Err(PlanError::UnknownShift(shift_id.as_str().to_string()));
    };
    Ok(planner.agenda.shifts.remove(pos))
}
