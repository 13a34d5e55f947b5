mod assignment;
mod conflicts;
mod types;
mod util;

pub use types::{Violation, ViolationKind, MAX_SLOTS_PER_EMPLOYEE, SLOT_CAPACITY};

use crate::model::{Assignment, Snapshot};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Générateur de planning : mélange aléatoire puis premier créneau libre.
///
/// La source d'aléa est fournie par l'appelant ; sans graine, deux appels sur
/// les mêmes préférences peuvent donner des plannings différents.
#[derive(Debug)]
pub struct ScheduleGenerator<R = SmallRng> {
    rng: R,
}

impl ScheduleGenerator<SmallRng> {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Générateur reproductible (CLI `--seed`, tests).
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for ScheduleGenerator<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ScheduleGenerator<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Produit une nouvelle affectation à partir d'un instantané des préférences.
    /// N'échoue jamais : un employé sans créneau libre reçoit une liste vide.
    pub fn generate(&mut self, snapshot: &Snapshot) -> Assignment {
        assignment::generate(self, snapshot)
    }
}

/// Vérifie plafonds et appartenance d'une affectation (vide si tout est conforme).
pub fn audit(snapshot: &Snapshot, assignment: &Assignment) -> Vec<Violation> {
    conflicts::audit(snapshot, assignment)
}
