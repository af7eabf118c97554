#![forbid(unsafe_code)]
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use turnero::{
    io,
    model::{DoctorId, ShiftId},
    notification::{prepare_reminder, TextReminder},
    planner::{ConflictKind, Planner},
    status::{compute_shift_status, shift_interval},
    storage::{JsonStorage, Storage},
    template::{registry, TemplateKey},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimalista de turnos de clínica (sin base de datos)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Activa los logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Archivo JSON de agenda
    #[arg(long, global = true, default_value = "agenda.json")]
    agenda: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Listar las plantillas del registro
    Templates,

    /// Importar médicos desde un CSV
    ImportDoctors {
        #[arg(long)]
        csv: String,
    },

    /// Crear un turno a partir de una plantilla
    Schedule {
        /// Id del médico
        #[arg(long)]
        doctor: String,
        /// Clave de plantilla (diurno, nocturno, veinticuatro)
        #[arg(long)]
        template: String,
        /// Fecha de inicio YYYY-MM-DD
        #[arg(long)]
        date: String,
    },

    /// Importar turnos desde un CSV (doctor_id,template,date)
    ImportShifts {
        #[arg(long)]
        csv: String,
    },

    /// Listar turnos con su estado derivado, opcionalmente exportar
    List {
        /// Filtrar por id de médico
        #[arg(long)]
        doctor: Option<String>,
        /// Filtrar por fecha de inicio YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Cierre administrativo de un turno
    Finalize {
        #[arg(long)]
        shift_id: String,
    },

    /// Mover un turno a otra fecha
    Reschedule {
        #[arg(long)]
        shift_id: String,
        /// Nueva fecha YYYY-MM-DD
        #[arg(long)]
        date: String,
    },

    /// Cancelar (eliminar) un turno
    Cancel {
        #[arg(long)]
        shift_id: String,
    },

    /// Verificar superposiciones por médico
    Check {
        /// Export CSV de los conflictos (opcional)
        #[arg(long)]
        report: Option<String>,
    },

    /// Generar un recordatorio de texto para un médico
    Notify {
        /// Id del médico
        #[arg(long)]
        doctor: String,
        #[arg(long, default_value_t = 2)]
        days_before: i64,
        /// Archivo de salida (texto plano)
        #[arg(long)]
        out: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.agenda)?;
    let mut planner = match storage.load() {
        Ok(a) => {
            let mut p = Planner::new();
            *p.agenda_mut() = a;
            p
        }
        Err(_) => Planner::new(),
    };

    let now = Local::now().naive_local();

    let code = match cli.cmd {
        Commands::Templates => {
            for t in registry() {
                println!(
                    "{} | {} | {} → {} | {}h | nocturno={} | recargo={}%",
                    t.key.as_str(),
                    t.label,
                    t.start_time.format("%H:%M"),
                    t.end_time.format("%H:%M"),
                    t.duration_hours,
                    t.nocturno,
                    t.recargo_percent
                );
            }
            0
        }
        Commands::ImportDoctors { csv } => {
            let doctors = io::import_doctors_csv(csv)?;
            planner.add_doctors(doctors);
            storage.save(planner.agenda())?;
            0
        }
        Commands::Schedule {
            doctor,
            template,
            date,
        } => {
            let key: TemplateKey = template.parse()?;
            let date: NaiveDate = date.parse()?;
            let id = planner.schedule(key, &DoctorId::new(doctor), date)?;
            storage.save(planner.agenda())?;
            println!("{}", id.as_str());
            0
        }
        Commands::ImportShifts { csv } => {
            let shifts = io::import_shifts_csv(csv, planner.agenda())?;
            planner.agenda_mut().shifts.extend(shifts);
            storage.save(planner.agenda())?;
            0
        }
        Commands::List {
            doctor,
            date,
            out_json,
            out_csv,
        } => {
            if let Some(path) = out_json {
                io::export_agenda_json(path, planner.agenda())?;
            }
            if let Some(path) = out_csv {
                io::export_shifts_csv(path, planner.agenda(), now)?;
            }
            let date: Option<NaiveDate> = match date {
                Some(d) => Some(d.parse()?),
                None => None,
            };
            // impresión compacta
            for s in &planner.agenda().shifts {
                if let Some(ref d) = doctor {
                    if s.doctor_id.as_str() != d.as_str() {
                        continue;
                    }
                }
                if let Some(d) = date {
                    if s.start_date != d {
                        continue;
                    }
                }
                let (start, end) = shift_interval(s);
                println!(
                    "{} | {} | {} → {} | {} | {}",
                    s.id.as_str(),
                    s.doctor_name,
                    start.format("%Y-%m-%d %H:%M"),
                    end.format("%Y-%m-%d %H:%M"),
                    s.shift_type,
                    compute_shift_status(s, now)
                );
            }
            0
        }
        Commands::Finalize { shift_id } => {
            planner.finalize(&ShiftId::new(shift_id))?;
            storage.save(planner.agenda())?;
            0
        }
        Commands::Reschedule { shift_id, date } => {
            let date: NaiveDate = date.parse()?;
            planner.reschedule(&ShiftId::new(shift_id), date)?;
            storage.save(planner.agenda())?;
            0
        }
        Commands::Cancel { shift_id } => {
            planner.cancel(&ShiftId::new(shift_id))?;
            storage.save(planner.agenda())?;
            0
        }
        Commands::Check { report } => {
            let conflicts = planner.detect_conflicts();
            if conflicts.is_empty() {
                println!("OK: no conflicts");
                0
            } else {
                eprintln!("Found {} conflict(s)", conflicts.len());
                if let Some(path) = report {
                    // CSV simple
                    let mut w = csv::Writer::from_path(path)?;
                    w.write_record(["doctor_id", "shift_a", "shift_b", "kind"])?;
                    for c in &conflicts {
                        w.write_record([
                            c.doctor.as_str(),
                            c.shift_a.as_str(),
                            c.shift_b.as_str(),
                            match c.kind {
                                ConflictKind::Overlap => "overlap",
                                ConflictKind::DoubleBooking => "double",
                            },
                        ])?;
                    }
                    w.flush()?;
                }
                // Código 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Notify {
            doctor,
            days_before,
            out,
        } => {
            let renderer = TextReminder;
            let reminder = prepare_reminder(
                planner.agenda(),
                &DoctorId::new(doctor),
                days_before,
                now,
                &renderer,
            )?;
            std::fs::write(&out, reminder.content)?;
            println!(
                "Reminder generated for {} (shift {}) at {}",
                reminder.doctor_name,
                reminder.shift_id,
                reminder.notice_at.format("%Y-%m-%d %H:%M")
            );
            0
        }
    };

    std::process::exit(code);
}
