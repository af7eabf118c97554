#![forbid(unsafe_code)]
//! Turnero — núcleo de agenda de turnos médicos para clínica (sin BD).
//!
//! - Registro fijo de plantillas (diurno, nocturno, 24 horas).
//! - Fábrica de turnos: plantilla + médico + fecha.
//! - Estado efectivo (próximo/activo/finalizado) derivado en cada lectura,
//!   con `now` inyectado como parámetro.
//! - Todo en hora local sin zona horaria; persistencia JSON en archivo.

pub mod io;
pub mod model;
pub mod notification;
pub mod planner;
pub mod status;
pub mod storage;
pub mod template;

pub use model::{Agenda, Doctor, DoctorId, Shift, ShiftId, ShiftStatus};
pub use notification::{prepare_reminder, Reminder, ReminderRenderer, TextReminder};
pub use planner::{Conflict, ConflictKind, PlanError, Planner};
pub use status::{compute_shift_status, shift_interval};
pub use storage::{JsonStorage, Storage};
pub use template::{create_shift_from_template, registry, ShiftTemplate, TemplateKey};
