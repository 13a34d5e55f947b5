#![forbid(unsafe_code)]
//! Créneaux — collecte de préférences et planning aléatoire plafonné (sans BD).
//!
//! - 21 créneaux fixes (7 jours × matin/après-midi/soir).
//! - Dernière saisie gagnante par employé.
//! - Génération : mélange aléatoire puis premier créneau libre,
//!   5 créneaux max par employé, 2 employés max par créneau.

#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod preferences;
pub mod scheduler;

pub use model::{Assignment, Day, EmployeeName, Period, PreferenceSet, ShiftSlot, Snapshot};
pub use preferences::{PreferenceStore, ValidationError};
pub use scheduler::{
    audit, ScheduleGenerator, Violation, ViolationKind, MAX_SLOTS_PER_EMPLOYEE, SLOT_CAPACITY,
};
