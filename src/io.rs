use crate::model::{Agenda, Doctor, Shift};
use crate::status::{compute_shift_status, shift_interval};
use crate::template::{create_shift_from_template, TemplateKey};
use anyhow::{bail, Context};
use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de médicos desde CSV: header `id,display_name[,email]`
pub fn import_doctors_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Doctor>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let id = rec.get(0).context("missing id")?.trim();
        let display = rec.get(1).context("missing display_name")?.trim();
        if id.is_empty() || display.is_empty() {
            bail!("invalid doctor row (empty)");
        }
        let mut doctor = Doctor::new(id, display);
        if let Some(email) = rec.get(2) {
            let email = email.trim();
            if !email.is_empty() {
                doctor.email = Some(email.to_string());
            }
        }
        out.push(doctor);
    }
    Ok(out)
}

/// Import de turnos: header `doctor_id,template,date` (fecha `YYYY-MM-DD`).
/// Cada fila pasa por la fábrica, igual que un alta individual.
pub fn import_shifts_csv<P: AsRef<Path>>(path: P, agenda: &Agenda) -> anyhow::Result<Vec<Shift>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let doctor_id = rec.get(0).context("missing doctor_id")?.trim();
        let template = rec.get(1).context("missing template")?.trim();
        let date = rec.get(2).context("missing date")?.trim();
        let key: TemplateKey = template.parse()?;
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .with_context(|| format!("invalid date: {date}"))?;
        let doctor = agenda
            .doctors
            .iter()
            .find(|d| d.id.as_str() == doctor_id)
            .with_context(|| format!("unknown doctor: {doctor_id}"))?;
        out.push(create_shift_from_template(key, doctor, date));
    }
    Ok(out)
}

/// Export JSON de la agenda (con formato legible)
pub fn export_agenda_json<P: AsRef<Path>>(path: P, agenda: &Agenda) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(agenda)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV de turnos con estado derivado a `now`:
/// header `id,doctor,start,end,type,status`
pub fn export_shifts_csv<P: AsRef<Path>>(
    path: P,
    agenda: &Agenda,
    now: NaiveDateTime,
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["id", "doctor", "start", "end", "type", "status"])?;
    for s in &agenda.shifts {
        let (start, end) = shift_interval(s);
        let status = compute_shift_status(s, now);
        w.write_record([
            s.id.as_str(),
            s.doctor_name.as_str(),
            &start.format("%Y-%m-%d %H:%M").to_string(),
            &end.format("%Y-%m-%d %H:%M").to_string(),
            s.shift_type.as_str(),
            status.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
