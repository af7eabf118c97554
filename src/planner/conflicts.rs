use super::{util, Conflict, ConflictKind, Planner};
use crate::model::Shift;
use crate::status::shift_interval;

pub(super) fn detect_conflicts(planner: &Planner) -> Vec<Conflict> {
    let mut out = Vec::new();

    for doctor in planner.agenda.doctors.iter() {
        let mut shifts: Vec<&Shift> = planner
            .agenda
            .shifts
            .iter()
            .filter(|s| s.doctor_id == doctor.id)
            .collect();
        shifts.sort_by_key(|s| shift_interval(s).0);

        for (idx, a) in shifts.iter().enumerate() {
            let (a_start, a_end) = shift_interval(a);
            for b in shifts.iter().skip(idx + 1) {
                let (b_start, b_end) = shift_interval(b);
                if !util::overlaps(a_start, a_end, b_start, b_end) {
                    continue;
                }
                let kind = if a_start == b_start && a_end == b_end {
                    ConflictKind::DoubleBooking
                } else {
                    ConflictKind::Overlap
                };
                out.push(Conflict {
                    doctor: doctor.id.clone(),
                    shift_a: a.id.clone(),
                    shift_b: b.id.clone(),
                    kind,
                });
            }
        }
    }

    out
}
