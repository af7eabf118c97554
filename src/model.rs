use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identificador fuerte para Doctor
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoctorId(String);

impl DoctorId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Médico (referencia emitida por el proveedor de identidad)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: DoctorId,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Doctor {
    pub fn new<I: AsRef<str>, D: Into<String>>(id: I, display_name: D) -> Self {
        Self {
            id: DoctorId::new(id),
            display_name: display_name.into(),
            email: None,
        }
    }
}

/// Identificador fuerte para Shift
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftId(String);

impl ShiftId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Estado efectivo de un turno.
///
/// `Finalizado` existe en dos sentidos: derivado (el reloj pasó el fin del
/// turno) o administrativo (guardado en `Shift::status`, gana siempre).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftStatus {
    #[serde(rename = "próximo")]
    Proximo,
    #[serde(rename = "activo")]
    Activo,
    #[serde(rename = "finalizado")]
    Finalizado,
}

impl ShiftStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftStatus::Proximo => "próximo",
            ShiftStatus::Activo => "activo",
            ShiftStatus::Finalizado => "finalizado",
        }
    }
}

impl std::fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Turno persistido: asignación de un médico a un intervalo en una fecha.
///
/// Los campos de plantilla (`type`, `durationHours`, `nocturno`,
/// `recargoPercent`) se copian al crear el turno; editar la plantilla
/// después no cambia turnos ya creados.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: ShiftId,
    pub doctor_id: DoctorId,
    pub doctor_name: String,
    /// Los registros antiguos usan la clave `date`; siempre se escribe
    /// `startDate`.
    #[serde(alias = "date")]
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    #[serde(rename = "type")]
    pub shift_type: String,
    pub duration_hours: f64,
    pub nocturno: bool,
    pub recargo_percent: f64,
    #[serde(default)]
    pub spans_midnight: bool,
    /// Override administrativo; solo `finalizado` tiene efecto.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ShiftStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
}

impl Shift {
    /// Cruce de medianoche efectivo: el flag guardado, o la comparación
    /// lexical `endTime <= startTime` para registros que no lo persisten.
    /// La igualdad cubre el turno de 24 horas: con `durationHours > 0`
    /// un intervalo legítimo de duración cero no existe.
    pub fn spans_midnight_effective(&self) -> bool {
        self.spans_midnight || self.end_time <= self.start_time
    }
}

/// Agenda completa (imagen en memoria de la colección persistida)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Agenda {
    pub doctors: Vec<Doctor>,
    pub shifts: Vec<Shift>,
}

impl Agenda {
    pub fn find_doctor<'a>(&'a self, id: &DoctorId) -> Option<&'a Doctor> {
        self.doctors.iter().find(|d| &d.id == id)
    }
    pub fn find_shift<'a>(&'a self, id: &ShiftId) -> Option<&'a Shift> {
        self.shifts.iter().find(|s| &s.id == id)
    }
    pub fn find_shift_mut(&mut self, id: &ShiftId) -> Option<&mut Shift> {
        self.shifts.iter_mut().find(|s| &s.id == id)
    }
}

/// Serde para horas de pared `"HH:MM"` (formato del almacén de documentos).
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&t.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
