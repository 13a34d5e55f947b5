use crate::model::{EmployeeName, ShiftSlot};
use std::fmt;

/// Nombre maximal de créneaux accordés à un employé par génération.
pub const MAX_SLOTS_PER_EMPLOYEE: usize = 5;

/// Nombre maximal d'employés sur un même créneau.
pub const SLOT_CAPACITY: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    TooManySlots,
    SlotOverCapacity,
    NotRequested,
    UnknownEmployee,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub employee: Option<EmployeeName>,
    pub slot: Option<ShiftSlot>,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            ViolationKind::TooManySlots => "too many slots",
            ViolationKind::SlotOverCapacity => "slot over capacity",
            ViolationKind::NotRequested => "slot not requested",
            ViolationKind::UnknownEmployee => "unknown employee",
        };
        write!(f, "{kind}")?;
        if let Some(name) = &self.employee {
            write!(f, " | {name}")?;
        }
        if let Some(slot) = &self.slot {
            write!(f, " | {slot}")?;
        }
        Ok(())
    }
}
