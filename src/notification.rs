use crate::model::{Agenda, Doctor, DoctorId, Shift, ShiftStatus};
use crate::status::{compute_shift_status, shift_interval};
use anyhow::{bail, Context, Result};
use chrono::{Duration, NaiveDateTime};

/// Recordatorio generado para un médico.
#[derive(Debug, Clone)]
pub struct Reminder {
    pub doctor_name: String,
    pub shift_id: String,
    pub notice_at: NaiveDateTime,
    pub content: String,
}

/// Permite personalizar el formato del mensaje (texto, SMS, etc.).
/// La entrega del mensaje queda fuera de este núcleo.
pub trait ReminderRenderer {
    fn render(&self, doctor: &Doctor, shift: &Shift, notice_at: NaiveDateTime) -> String;
}

/// Plantilla de texto simple para un futuro correo/SMS.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReminder;

impl ReminderRenderer for TextReminder {
    fn render(&self, doctor: &Doctor, shift: &Shift, notice_at: NaiveDateTime) -> String {
        let (start, end) = shift_interval(shift);
        format!(
            "Hola {name},\n\nTienes asignado el turno \"{kind}\" del {start} al {end}.\nEste mensaje se genera el {notice}.\n\nPor favor confirma tu disponibilidad con la clínica.\n",
            name = doctor.display_name,
            kind = shift.shift_type,
            start = start.format("%Y-%m-%d %H:%M"),
            end = end.format("%Y-%m-%d %H:%M"),
            notice = notice_at.format("%Y-%m-%d %H:%M")
        )
    }
}

/// Prepara un recordatorio para el próximo turno de un médico.
pub fn prepare_reminder(
    agenda: &Agenda,
    doctor_id: &DoctorId,
    days_before: i64,
    now: NaiveDateTime,
    renderer: &dyn ReminderRenderer,
) -> Result<Reminder> {
    if days_before < 0 {
        bail!("days_before must be positive");
    }

    let doctor = agenda
        .find_doctor(doctor_id)
        .with_context(|| format!("unknown doctor: {}", doctor_id.as_str()))?;

    let mut upcoming: Vec<&Shift> = agenda
        .shifts
        .iter()
        .filter(|shift| {
            shift.doctor_id == doctor.id
                && compute_shift_status(shift, now) == ShiftStatus::Proximo
        })
        .collect();

    if upcoming.is_empty() {
        bail!("no upcoming shift found for doctor {}", doctor_id.as_str());
    }

    upcoming.sort_by_key(|shift| shift_interval(shift).0);
    let shift = upcoming[0];

    let notice_at = shift_interval(shift).0 - Duration::days(days_before);

    let content = renderer.render(doctor, shift, notice_at);
    Ok(Reminder {
        doctor_name: doctor.display_name.clone(),
        shift_id: shift.id.as_str().to_string(),
        notice_at,
        content,
    })
}
