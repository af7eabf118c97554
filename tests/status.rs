#![forbid(unsafe_code)]
use chrono::{NaiveDate, NaiveDateTime};
use turnero::{
    compute_shift_status, create_shift_from_template, shift_interval, Doctor, Shift, ShiftId,
    ShiftStatus, TemplateKey,
};

fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn doctor() -> Doctor {
    Doctor::new("d1", "Dra. Salazar")
}

#[test]
fn diurno_same_day_scenario() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let shift = create_shift_from_template(TemplateKey::Diurno, &doctor(), date);

    assert_eq!(
        compute_shift_status(&shift, dt(2024, 2, 28, 23, 0)),
        ShiftStatus::Proximo
    );
    assert_eq!(
        compute_shift_status(&shift, dt(2024, 3, 1, 12, 0)),
        ShiftStatus::Activo
    );
    assert_eq!(
        compute_shift_status(&shift, dt(2024, 3, 2, 0, 0)),
        ShiftStatus::Finalizado
    );
}

#[test]
fn boundaries_are_inclusive() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let shift = create_shift_from_template(TemplateKey::Diurno, &doctor(), date);

    // exactamente al inicio y exactamente al fin: activo
    assert_eq!(
        compute_shift_status(&shift, dt(2024, 3, 1, 7, 0)),
        ShiftStatus::Activo
    );
    assert_eq!(
        compute_shift_status(&shift, dt(2024, 3, 1, 19, 0)),
        ShiftStatus::Activo
    );
    // un segundo después del fin: finalizado
    let just_after = NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(19, 0, 1)
        .unwrap();
    assert_eq!(
        compute_shift_status(&shift, just_after),
        ShiftStatus::Finalizado
    );
    // un minuto antes del inicio: próximo
    assert_eq!(
        compute_shift_status(&shift, dt(2024, 3, 1, 6, 59)),
        ShiftStatus::Proximo
    );
}

#[test]
fn nocturno_spans_midnight() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
    let shift = create_shift_from_template(TemplateKey::Nocturno, &doctor(), date);
    assert!(shift.spans_midnight);
    assert_eq!(shift.end_date, date.succ_opt());

    assert_eq!(
        compute_shift_status(&shift, dt(2024, 1, 10, 18, 59)),
        ShiftStatus::Proximo
    );
    assert_eq!(
        compute_shift_status(&shift, dt(2024, 1, 10, 23, 0)),
        ShiftStatus::Activo
    );
    // después de medianoche local sigue activo (el fin ancla al día siguiente)
    assert_eq!(
        compute_shift_status(&shift, dt(2024, 1, 11, 6, 59)),
        ShiftStatus::Activo
    );
    assert_eq!(
        compute_shift_status(&shift, dt(2024, 1, 11, 7, 1)),
        ShiftStatus::Finalizado
    );
}

#[test]
fn veinticuatro_is_full_day_forward() {
    let date = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
    let shift = create_shift_from_template(TemplateKey::Veinticuatro, &doctor(), date);
    assert!(shift.spans_midnight);

    let (start, end) = shift_interval(&shift);
    assert_eq!(end - start, chrono::Duration::hours(24));

    assert_eq!(
        compute_shift_status(&shift, dt(2024, 5, 21, 6, 59)),
        ShiftStatus::Activo
    );
    assert_eq!(
        compute_shift_status(&shift, dt(2024, 5, 21, 7, 1)),
        ShiftStatus::Finalizado
    );
}

#[test]
fn administrative_override_wins() {
    // ventana en el futuro lejano, pero cerrado administrativamente
    let date = NaiveDate::from_ymd_opt(2099, 1, 1).unwrap();
    let mut shift = create_shift_from_template(TemplateKey::Diurno, &doctor(), date);
    shift.status = Some(ShiftStatus::Finalizado);

    assert_eq!(
        compute_shift_status(&shift, dt(2024, 1, 1, 0, 0)),
        ShiftStatus::Finalizado
    );
}

#[test]
fn derivation_is_idempotent() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let shift = create_shift_from_template(TemplateKey::Nocturno, &doctor(), date);
    let now = dt(2024, 3, 1, 20, 0);
    assert_eq!(
        compute_shift_status(&shift, now),
        compute_shift_status(&shift, now)
    );
}

#[test]
fn legacy_record_without_end_date_uses_lexical_fallback() {
    // registro antiguo: sin endDate ni spansMidnight persistidos
    let shift = Shift {
        id: ShiftId::new("s-legacy"),
        doctor_id: doctor().id,
        doctor_name: "Dra. Salazar".into(),
        start_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        end_date: None,
        start_time: chrono::NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
        end_time: chrono::NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
        shift_type: "Turno Nocturno".into(),
        duration_hours: 12.0,
        nocturno: true,
        recargo_percent: 35.0,
        spans_midnight: false,
        status: None,
        observations: None,
    };

    let (_, end) = shift_interval(&shift);
    assert_eq!(end, dt(2024, 1, 11, 7, 0));
    assert_eq!(
        compute_shift_status(&shift, dt(2024, 1, 11, 6, 0)),
        ShiftStatus::Activo
    );
}

#[test]
fn legacy_24h_record_without_flags_spans_full_day() {
    // registro antiguo de 24 horas: inicio == fin, sin endDate ni
    // spansMidnight; nunca un intervalo de duración cero
    let shift = Shift {
        id: ShiftId::new("s-legacy-24"),
        doctor_id: doctor().id,
        doctor_name: "Dra. Salazar".into(),
        start_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        end_date: None,
        start_time: chrono::NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
        end_time: chrono::NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
        shift_type: "Turno de 24 horas".into(),
        duration_hours: 24.0,
        nocturno: true,
        recargo_percent: 35.0,
        spans_midnight: false,
        status: None,
        observations: None,
    };

    let (start, end) = shift_interval(&shift);
    assert_eq!(end - start, chrono::Duration::hours(24));
    assert_eq!(
        compute_shift_status(&shift, dt(2024, 1, 10, 12, 0)),
        ShiftStatus::Activo
    );
    assert_eq!(
        compute_shift_status(&shift, dt(2024, 1, 11, 7, 1)),
        ShiftStatus::Finalizado
    );
}
