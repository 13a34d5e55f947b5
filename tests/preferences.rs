#![forbid(unsafe_code)]
use creneaux::{Day, Period, PreferenceStore, ShiftSlot, ValidationError};

fn slot(day: Day, period: Period) -> ShiftSlot {
    ShiftSlot::new(day, period)
}

#[test]
fn submit_then_snapshot_reflects_pair() {
    let mut store = PreferenceStore::new();
    let wanted = [
        slot(Day::Monday, Period::Morning),
        slot(Day::Sunday, Period::Evening),
    ];
    store.submit("Alice", wanted).unwrap();

    let snap = store.snapshot();
    assert_eq!(snap.len(), 1);
    let (name, slots) = snap.iter().next().unwrap();
    assert_eq!(name.as_str(), "Alice");
    assert_eq!(slots.iter().copied().collect::<Vec<_>>(), wanted.to_vec());
}

#[test]
fn blank_name_is_rejected_without_mutation() {
    let mut store = PreferenceStore::new();
    store
        .submit("Bob", [slot(Day::Friday, Period::Afternoon)])
        .unwrap();
    let before = store.snapshot().clone();

    for name in ["", "   ", "\t\n"] {
        let err = store
            .submit(name, [slot(Day::Monday, Period::Morning)])
            .unwrap_err();
        assert_eq!(err, ValidationError::EmptyName);
    }
    assert_eq!(store.snapshot(), &before);
}

#[test]
fn empty_selection_is_rejected() {
    let mut store = PreferenceStore::new();
    let err = store.submit("Carol", Vec::new()).unwrap_err();
    assert_eq!(err, ValidationError::NoShiftsSelected);
    assert!(store.is_empty());
}

#[test]
fn resubmission_overwrites_instead_of_merging() {
    let mut store = PreferenceStore::new();
    store
        .submit(
            "Alice",
            [
                slot(Day::Monday, Period::Morning),
                slot(Day::Monday, Period::Afternoon),
            ],
        )
        .unwrap();
    store
        .submit(" Alice ", [slot(Day::Saturday, Period::Evening)])
        .unwrap();

    assert_eq!(store.len(), 1);
    let prefs = store.get("Alice").unwrap();
    assert_eq!(prefs.len(), 1);
    assert!(prefs.contains(&slot(Day::Saturday, Period::Evening)));
}

#[test]
fn labels_are_accepted_in_both_forms() {
    let mut store = PreferenceStore::new();
    store
        .submit_labels("Dan", ["Wednesday - Evening", "thursday-morning"])
        .unwrap();
    let prefs = store.get("Dan").unwrap();
    assert!(prefs.contains(&slot(Day::Wednesday, Period::Evening)));
    assert!(prefs.contains(&slot(Day::Thursday, Period::Morning)));
}
