use crate::model::{join_labels, Assignment};
use crate::preferences::PreferenceStore;
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Import de préférences depuis CSV: header `name,slots`, créneaux séparés par `;`.
///
/// Les lignes sont soumises dans l'ordre du fichier (la dernière gagne).
/// Retourne le nombre de lignes soumises.
pub fn import_preferences_csv<P: AsRef<Path>>(
    path: P,
    store: &mut PreferenceStore,
) -> anyhow::Result<usize> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path.as_ref())
        .with_context(|| format!("reading {}", path.as_ref().display()))?;
    let mut count = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        let slots = rec.get(1).unwrap_or("");
        store
            .submit_labels(name, split_labels(slots))
            .with_context(|| format!("invalid preferences row for {name:?}"))?;
        count += 1;
    }
    Ok(count)
}

/// Analyse une préférence en ligne `"Nom=Monday - Morning;Tuesday-Evening"`.
pub fn parse_inline_preference(raw: &str) -> anyhow::Result<(String, Vec<String>)> {
    let Some((name, slots)) = raw.split_once('=') else {
        bail!("expected NAME=SLOT;SLOT, got {raw:?}");
    };
    let labels = split_labels(slots).map(str::to_string).collect();
    Ok((name.trim().to_string(), labels))
}

fn split_labels(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(';').map(str::trim).filter(|l| !l.is_empty())
}

/// Export JSON de l'affectation (jolie mise en forme)
pub fn export_assignment_json<P: AsRef<Path>>(
    path: P,
    assignment: &Assignment,
) -> anyhow::Result<()> {
    let json = serde_json::to_vec_pretty(assignment)?;
    write_atomic(path, &json)
}

pub fn import_assignment_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Assignment> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let assignment: Assignment = serde_json::from_slice(&data)
        .with_context(|| format!("parsing assignment {}", path.display()))?;
    Ok(assignment)
}

/// Export CSV par employé: header `employee,assigned_shifts`
pub fn export_assignment_csv<P: AsRef<Path>>(
    path: P,
    assignment: &Assignment,
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_writer(Vec::new());
    w.write_record(["employee", "assigned_shifts"])?;
    for (name, slots) in assignment.rows() {
        w.write_record([name.as_str(), slots.as_str()])?;
    }
    let bytes = w.into_inner().context("flushing csv buffer")?;
    write_atomic(path, &bytes)
}

/// Export CSV par créneau (21 lignes): header `slot,employees`
pub fn export_by_slot_csv<P: AsRef<Path>>(path: P, assignment: &Assignment) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_writer(Vec::new());
    w.write_record(["slot", "employees"])?;
    for (slot, holders) in assignment.by_slot() {
        let names = holders
            .iter()
            .map(|n| n.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        w.write_record([slot.label(), names])?;
    }
    let bytes = w.into_inner().context("flushing csv buffer")?;
    write_atomic(path, &bytes)
}

/// Rendu texte compact : `nom | créneau, créneau` (ou `-` si rien n'est accordé).
pub fn render_table(assignment: &Assignment) -> String {
    let mut out = String::new();
    for (name, slots) in assignment.iter() {
        let granted = if slots.is_empty() {
            "-".to_string()
        } else {
            join_labels(slots)
        };
        out.push_str(&format!("{name} | {granted}\n"));
    }
    out
}

fn write_atomic<P: AsRef<Path>>(path: P, bytes: &[u8]) -> anyhow::Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).with_context(|| "atomic rename")?;
    Ok(())
}
