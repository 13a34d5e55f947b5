use super::{util::SlotOccupancy, ScheduleGenerator, MAX_SLOTS_PER_EMPLOYEE};
use crate::model::{Assignment, ShiftSlot, Snapshot};
use rand::seq::SliceRandom;
use rand::Rng;

pub(super) fn generate<R: Rng>(
    generator: &mut ScheduleGenerator<R>,
    snapshot: &Snapshot,
) -> Assignment {
    let mut assignment = Assignment::new();
    let mut occupancy = SlotOccupancy::default();

    for (employee, preferences) in snapshot {
        let mut candidates: Vec<ShiftSlot> = preferences.iter().copied().collect();
        candidates.shuffle(&mut generator.rng);

        let mut granted = Vec::new();
        let mut days_worked = 0usize;

        // premier arrivé, premier servi : un créneau refusé n'est jamais re-proposé
        for slot in candidates {
            if days_worked < MAX_SLOTS_PER_EMPLOYEE && !occupancy.is_full(&slot) {
                occupancy.occupy(slot, employee);
                granted.push(slot);
                days_worked += 1;
                #[cfg(feature = "logging")]
                tracing::trace!(employee = %employee, slot = %slot, "slot granted");
            }
        }

        #[cfg(feature = "logging")]
        tracing::debug!(
            employee = %employee,
            requested = preferences.len(),
            granted = granted.len(),
            "employee scheduled"
        );
        assignment.insert(employee.clone(), granted);
    }

    assignment
}
