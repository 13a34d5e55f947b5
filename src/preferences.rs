use crate::model::{EmployeeName, PreferenceSet, ShiftSlot, SlotParseError, Snapshot};
use thiserror::Error;

/// Erreurs de saisie : aucune ne modifie le magasin.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("please enter an employee name")]
    EmptyName,
    #[error("please select at least one shift")]
    NoShiftsSelected,
    #[error("invalid shift: {0}")]
    InvalidSlot(#[from] SlotParseError),
}

/// Préférences déclarées, indexées par employé (dernière saisie gagnante).
#[derive(Debug, Default, Clone)]
pub struct PreferenceStore {
    entries: Snapshot,
}

impl PreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enregistre (ou remplace) les créneaux souhaités par `name`.
    pub fn submit<I>(&mut self, name: &str, slots: I) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = ShiftSlot>,
    {
        let name = EmployeeName::new(name).map_err(|_| ValidationError::EmptyName)?;
        let slots: PreferenceSet = slots.into_iter().collect();
        if slots.is_empty() {
            return Err(ValidationError::NoShiftsSelected);
        }
        #[cfg(feature = "logging")]
        tracing::debug!(employee = %name, slots = slots.len(), "preferences saved");
        self.entries.insert(name, slots);
        Ok(())
    }

    /// Variante de `submit` à partir de libellés (`"Monday - Morning"`, `"Monday-Morning"`).
    pub fn submit_labels<I, S>(&mut self, name: &str, labels: I) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let labels: Vec<S> = labels.into_iter().collect();
        if labels.is_empty() {
            return Err(ValidationError::NoShiftsSelected);
        }
        let slots = labels
            .iter()
            .map(|l| l.as_ref().parse::<ShiftSlot>())
            .collect::<Result<Vec<_>, _>>()?;
        self.submit(name, slots)
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&PreferenceSet> {
        let name = EmployeeName::new(name).ok()?;
        self.entries.get(&name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
