use super::{Violation, ViolationKind, MAX_SLOTS_PER_EMPLOYEE, SLOT_CAPACITY};
use crate::model::{Assignment, Snapshot};

pub(super) fn audit(snapshot: &Snapshot, assignment: &Assignment) -> Vec<Violation> {
    let mut out = Vec::new();

    for (employee, slots) in assignment.iter() {
        let Some(requested) = snapshot.get(employee) else {
            out.push(Violation {
                employee: Some(employee.clone()),
                slot: None,
                kind: ViolationKind::UnknownEmployee,
            });
            continue;
        };

        if slots.len() > MAX_SLOTS_PER_EMPLOYEE {
            out.push(Violation {
                employee: Some(employee.clone()),
                slot: None,
                kind: ViolationKind::TooManySlots,
            });
        }

        for slot in slots.iter().filter(|s| !requested.contains(*s)) {
            out.push(Violation {
                employee: Some(employee.clone()),
                slot: Some(*slot),
                kind: ViolationKind::NotRequested,
            });
        }
    }

    for (slot, holders) in assignment.by_slot() {
        if holders.len() > SLOT_CAPACITY {
            out.push(Violation {
                employee: None,
                slot: Some(slot),
                kind: ViolationKind::SlotOverCapacity,
            });
        }
    }

    out
}
