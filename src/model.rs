use chrono::Weekday;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Jour de la semaine (lundi en premier, comme la grille de saisie).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl From<Day> for Weekday {
    fn from(day: Day) -> Self {
        match day {
            Day::Monday => Weekday::Mon,
            Day::Tuesday => Weekday::Tue,
            Day::Wednesday => Weekday::Wed,
            Day::Thursday => Weekday::Thu,
            Day::Friday => Weekday::Fri,
            Day::Saturday => Weekday::Sat,
            Day::Sunday => Weekday::Sun,
        }
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        Day::ALL[weekday.num_days_from_monday() as usize]
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Day {
    type Err = SlotParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // noms complets ou abrégés (`Mon`, `monday`)
        s.parse::<Weekday>()
            .map(Day::from)
            .map_err(|_| SlotParseError::UnknownDay(s.to_string()))
    }
}

/// Période de la journée.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Period {
    Morning,
    Afternoon,
    Evening,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Morning, Period::Afternoon, Period::Evening];

    pub fn name(self) -> &'static str {
        match self {
            Period::Morning => "Morning",
            Period::Afternoon => "Afternoon",
            Period::Evening => "Evening",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Period {
    type Err = SlotParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Period::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SlotParseError::UnknownPeriod(s.to_string()))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotParseError {
    #[error("malformed slot label: {0:?} (expected \"<Day> - <Period>\")")]
    Malformed(String),
    #[error("unknown day: {0:?}")]
    UnknownDay(String),
    #[error("unknown period: {0:?}")]
    UnknownPeriod(String),
}

/// Créneau (jour, période). L'univers complet compte 21 créneaux.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShiftSlot {
    pub day: Day,
    pub period: Period,
}

impl ShiftSlot {
    pub const fn new(day: Day, period: Period) -> Self {
        Self { day, period }
    }

    /// Les 21 créneaux, triés par jour puis par période.
    pub fn all() -> impl Iterator<Item = ShiftSlot> {
        Day::ALL
            .into_iter()
            .flat_map(|day| Period::ALL.into_iter().map(move |period| ShiftSlot { day, period }))
    }

    /// Libellé d'affichage `"<Day> - <Period>"`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ShiftSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.day, self.period)
    }
}

impl FromStr for ShiftSlot {
    type Err = SlotParseError;

    /// Accepte `"Monday - Morning"` comme la forme compacte `"Monday-Morning"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let (day, period) = raw
            .split_once(" - ")
            .or_else(|| raw.split_once('-'))
            .ok_or_else(|| SlotParseError::Malformed(raw.to_string()))?;
        Ok(ShiftSlot {
            day: day.parse()?,
            period: period.parse()?,
        })
    }
}

#[cfg(feature = "serde")]
impl Serialize for ShiftSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for ShiftSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("employee name cannot be empty")]
pub struct EmptyNameError;

/// Identifiant fort pour un employé : nom non vide, sans espaces de bord.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct EmployeeName(String);

impl EmployeeName {
    pub fn new<S: AsRef<str>>(s: S) -> Result<Self, EmptyNameError> {
        let trimmed = s.as_ref().trim();
        if trimmed.is_empty() {
            return Err(EmptyNameError);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmployeeName {
    type Error = EmptyNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmployeeName> for String {
    fn from(name: EmployeeName) -> Self {
        name.0
    }
}

impl fmt::Display for EmployeeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Créneaux souhaités par un employé (ensemble, donc dédupliqué).
pub type PreferenceSet = BTreeSet<ShiftSlot>;

/// Vue en lecture seule du magasin de préférences.
pub type Snapshot = BTreeMap<EmployeeName, PreferenceSet>;

/// Résultat d'une génération : créneaux accordés par employé, dans l'ordre d'attribution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Assignment {
    granted: BTreeMap<EmployeeName, Vec<ShiftSlot>>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: EmployeeName, slots: Vec<ShiftSlot>) {
        self.granted.insert(name, slots);
    }

    pub fn get(&self, name: &EmployeeName) -> Option<&[ShiftSlot]> {
        self.granted.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.granted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.granted.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EmployeeName, &[ShiftSlot])> {
        self.granted.iter().map(|(name, slots)| (name, slots.as_slice()))
    }

    /// Occupants de chaque créneau de l'univers, dans l'ordre jour/période.
    pub fn by_slot(&self) -> Vec<(ShiftSlot, Vec<&EmployeeName>)> {
        ShiftSlot::all()
            .map(|slot| {
                let holders = self
                    .granted
                    .iter()
                    .filter(|(_, slots)| slots.contains(&slot))
                    .map(|(name, _)| name)
                    .collect();
                (slot, holders)
            })
            .collect()
    }

    /// Une ligne par employé : nom et libellés séparés par `", "`.
    pub fn rows(&self) -> Vec<(String, String)> {
        self.granted
            .iter()
            .map(|(name, slots)| (name.to_string(), join_labels(slots)))
            .collect()
    }
}

pub(crate) fn join_labels(slots: &[ShiftSlot]) -> String {
    slots
        .iter()
        .map(ShiftSlot::label)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn universe_has_21_ordered_slots() {
        let all: Vec<_> = ShiftSlot::all().collect();
        assert_eq!(all.len(), 21);
        assert_eq!(all[0], ShiftSlot::new(Day::Monday, Period::Morning));
        assert_eq!(all[20], ShiftSlot::new(Day::Sunday, Period::Evening));
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn label_parses_both_forms() {
        let slot = ShiftSlot::new(Day::Tuesday, Period::Afternoon);
        assert_eq!(slot.label(), "Tuesday - Afternoon");
        assert_eq!("Tuesday - Afternoon".parse::<ShiftSlot>().unwrap(), slot);
        assert_eq!(" tuesday-AFTERNOON ".parse::<ShiftSlot>().unwrap(), slot);
    }

    #[test]
    fn short_day_names_parse() {
        assert_eq!(
            "Tue - Afternoon".parse::<ShiftSlot>().unwrap(),
            ShiftSlot::new(Day::Tuesday, Period::Afternoon)
        );
        assert_eq!("sun".parse::<Day>().unwrap(), Day::Sunday);
        assert_eq!(
            "Su".parse::<Day>(),
            Err(SlotParseError::UnknownDay("Su".into()))
        );
    }

    #[test]
    fn bad_labels_are_rejected() {
        assert_eq!(
            "Funday - Morning".parse::<ShiftSlot>(),
            Err(SlotParseError::UnknownDay("Funday".into()))
        );
        assert_eq!(
            "Monday - Night".parse::<ShiftSlot>(),
            Err(SlotParseError::UnknownPeriod("Night".into()))
        );
        assert!(matches!(
            "Monday".parse::<ShiftSlot>(),
            Err(SlotParseError::Malformed(_))
        ));
    }

    #[test]
    fn weekday_conversion_is_monday_first() {
        for day in Day::ALL {
            assert_eq!(Day::from(Weekday::from(day)), day);
        }
        assert_eq!(Day::from(Weekday::Sun), Day::Sunday);
    }

    #[test]
    fn employee_name_is_trimmed() {
        assert_eq!(EmployeeName::new("  Alice ").unwrap().as_str(), "Alice");
        assert_eq!(EmployeeName::new(" \t "), Err(EmptyNameError));
    }
}
