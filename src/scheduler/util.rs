use super::SLOT_CAPACITY;
use crate::model::{EmployeeName, ShiftSlot};
use std::collections::HashMap;

/// Occupation des créneaux pendant une seule passe de génération.
#[derive(Debug, Default)]
pub(super) struct SlotOccupancy<'a> {
    holders: HashMap<ShiftSlot, Vec<&'a EmployeeName>>,
}

impl<'a> SlotOccupancy<'a> {
    pub(super) fn is_full(&self, slot: &ShiftSlot) -> bool {
        self.holders.get(slot).map_or(0, Vec::len) >= SLOT_CAPACITY
    }

    pub(super) fn occupy(&mut self, slot: ShiftSlot, employee: &'a EmployeeName) {
        self.holders.entry(slot).or_default().push(employee);
    }
}
