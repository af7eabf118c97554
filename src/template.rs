use crate::model::{Doctor, Shift, ShiftId};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::planner::PlanError;

/// Clave cerrada de plantilla. Una clave desconocida no es representable;
/// solo el parseo desde texto externo (CLI/CSV) puede fallar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKey {
    Diurno,
    Nocturno,
    Veinticuatro,
}

impl TemplateKey {
    pub const ALL: [TemplateKey; 3] = [
        TemplateKey::Diurno,
        TemplateKey::Nocturno,
        TemplateKey::Veinticuatro,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKey::Diurno => "diurno",
            TemplateKey::Nocturno => "nocturno",
            TemplateKey::Veinticuatro => "veinticuatro",
        }
    }

    /// Plantilla asociada a la clave (total: toda clave tiene entrada).
    pub fn template(self) -> &'static ShiftTemplate {
        &registry()[self as usize]
    }
}

impl FromStr for TemplateKey {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "diurno" => Ok(TemplateKey::Diurno),
            "nocturno" => Ok(TemplateKey::Nocturno),
            "veinticuatro" | "24" | "24h" => Ok(TemplateKey::Veinticuatro),
            other => Err(PlanError::UnknownTemplate(other.to_string())),
        }
    }
}

/// Plantilla de turno: forma reutilizable con nombre.
///
/// `duration_hours` se guarda pre-calculada porque el intervalo de la
/// plantilla puede cruzar medianoche.
#[derive(Debug, Clone, Serialize)]
pub struct ShiftTemplate {
    pub key: TemplateKey,
    pub label: &'static str,
    #[serde(with = "crate::model::hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "crate::model::hhmm")]
    pub end_time: NaiveTime,
    pub duration_hours: f64,
    pub nocturno: bool,
    pub recargo_percent: f64,
}

impl ShiftTemplate {
    /// Regla de cruce de medianoche: `end <= start`. La igualdad es la
    /// plantilla de 24 horas, que avanza exactamente un día, nunca un
    /// intervalo vacío.
    pub fn spans_midnight(&self) -> bool {
        self.end_time <= self.start_time
    }
}

/// Registro fijo de plantillas, definido al arranque y nunca mutado.
/// El orden sigue `TemplateKey::ALL` (estable para listados de UI).
pub fn registry() -> &'static [ShiftTemplate] {
    static REGISTRY: OnceLock<Vec<ShiftTemplate>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        vec![
            ShiftTemplate {
                key: TemplateKey::Diurno,
                label: "Turno Diurno",
                start_time: hm(7, 0),
                end_time: hm(19, 0),
                duration_hours: 12.0,
                nocturno: false,
                recargo_percent: 0.0,
            },
            ShiftTemplate {
                key: TemplateKey::Nocturno,
                label: "Turno Nocturno",
                start_time: hm(19, 0),
                end_time: hm(7, 0),
                duration_hours: 12.0,
                nocturno: true,
                recargo_percent: 35.0,
            },
            ShiftTemplate {
                key: TemplateKey::Veinticuatro,
                label: "Turno de 24 horas",
                start_time: hm(7, 0),
                end_time: hm(7, 0),
                duration_hours: 24.0,
                nocturno: true,
                recargo_percent: 35.0,
            },
        ]
    })
}

fn hm(h: u32, m: u32) -> NaiveTime {
    // Las plantillas integradas usan horas válidas fijas.
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

/// Fábrica de turnos: plantilla + médico + fecha → registro completo.
///
/// Calcula `end_date` y `spans_midnight` y copia los campos
/// desnormalizados. No persiste nada; eso es responsabilidad del llamador.
pub fn create_shift_from_template(key: TemplateKey, doctor: &Doctor, date: NaiveDate) -> Shift {
    let template = key.template();
    let spans_midnight = template.spans_midnight();
    let end_date = if spans_midnight {
        date.succ_opt().unwrap()
    } else {
        date
    };
    Shift {
        id: ShiftId::random(),
        doctor_id: doctor.id.clone(),
        doctor_name: doctor.display_name.clone(),
        start_date: date,
        end_date: Some(end_date),
        start_time: template.start_time,
        end_time: template.end_time,
        shift_type: template.label.to_string(),
        duration_hours: template.duration_hours,
        nocturno: template.nocturno,
        recargo_percent: template.recargo_percent,
        spans_midnight,
        status: None,
        observations: None,
    }
}
