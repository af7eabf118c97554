mod conflicts;
mod mutate;
mod types;
mod util;

pub use types::{Conflict, ConflictKind, PlanError};

use crate::model::{Agenda, Doctor, DoctorId, Shift, ShiftId};
use crate::template::{create_shift_from_template, TemplateKey};
use chrono::NaiveDate;

/// Planner: encapsula una Agenda en curso de edición
#[derive(Debug, Default)]
pub struct Planner {
    agenda: Agenda,
}

impl Planner {
    pub fn new() -> Self {
        Self {
            agenda: Agenda::default(),
        }
    }

    pub fn agenda(&self) -> &Agenda {
        &self.agenda
    }
    pub fn agenda_mut(&mut self) -> &mut Agenda {
        &mut self.agenda
    }

    pub fn add_doctors(&mut self, doctors: Vec<Doctor>) {
        self.agenda.doctors.extend(doctors);
    }

    /// Crea y agrega un turno a partir de una plantilla del registro.
    pub fn schedule(
        &mut self,
        key: TemplateKey,
        doctor_id: &DoctorId,
        date: NaiveDate,
    ) -> Result<ShiftId, PlanError> {
        let doctor = self
            .agenda
            .find_doctor(doctor_id)
            .ok_or_else(|| PlanError::UnknownDoctor(doctor_id.as_str().to_string()))?;
        let shift = create_shift_from_template(key, doctor, date);
        let id = shift.id.clone();
        self.agenda.shifts.push(shift);
        Ok(id)
    }

    pub fn finalize(&mut self, shift_id: &ShiftId) -> Result<(), PlanError> {
        mutate::finalize(self, shift_id)
    }

    pub fn reschedule(&mut self, shift_id: &ShiftId, new_date: NaiveDate) -> Result<(), PlanError> {
        mutate::reschedule(self, shift_id, new_date)
    }

    pub fn cancel(&mut self, shift_id: &ShiftId) -> Result<Shift, PlanError> {
        mutate::cancel(self, shift_id)
    }

    pub fn detect_conflicts(&self) -> Vec<Conflict> {
        conflicts::detect_conflicts(self)
    }

    /// Turnos de un médico (vista "mis turnos").
    pub fn shifts_of_doctor<'a>(&'a self, doctor_id: &DoctorId) -> Vec<&'a Shift> {
        self.agenda
            .shifts
            .iter()
            .filter(|s| &s.doctor_id == doctor_id)
            .collect()
    }

    /// Turnos que comienzan en una fecha (celda del calendario).
    pub fn shifts_on_date(&self, date: NaiveDate) -> Vec<&Shift> {
        self.agenda
            .shifts
            .iter()
            .filter(|s| s.start_date == date)
            .collect()
    }
}
