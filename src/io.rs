use crate::model::{Schedule, Worker};
use crate::recruitment::DEFAULT_RECRUITMENT_SOURCE;
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de signaleurs depuis CSV: header `name,certified[,source][,active]`
pub fn import_workers_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Worker>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        if name.is_empty() {
            bail!("invalid worker row (empty name)");
        }
        let certified = rec.get(1).context("missing certified")?.trim();
        let certified = parse_bool(certified)
            .with_context(|| format!("invalid certified value for worker {name}"))?;

        let source = rec
            .get(2)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_RECRUITMENT_SOURCE);
        let mut worker = Worker::new(name, certified, source);
        if let Some(flag) = rec.get(3) {
            let flag = flag.trim();
            if !flag.is_empty() {
                worker.active = parse_bool(flag)
                    .with_context(|| format!("invalid active value for worker {name}"))?;
            }
        }
        out.push(worker);
    }
    Ok(out)
}

fn parse_bool(s: &str) -> anyhow::Result<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        _ => bail!("expected boolean"),
    }
}

/// Export JSON du calendrier, clés `YYYY-MM-DD`
pub fn export_schedule_json<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(schedule)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV: header `date,shift_type,start_time,end_time,worker_id,worker_name`
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    write_schedule_rows(&mut w, schedule)?;
    w.flush()?;
    Ok(())
}

/// Rendu CSV en mémoire (même format que `export_schedule_csv`).
pub fn schedule_to_csv_string(schedule: &Schedule) -> anyhow::Result<String> {
    let mut w = WriterBuilder::new().has_headers(true).from_writer(Vec::new());
    write_schedule_rows(&mut w, schedule)?;
    let bytes = w
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing csv buffer: {}", e.error()))?;
    Ok(String::from_utf8(bytes)?)
}

fn write_schedule_rows<W: std::io::Write>(
    w: &mut csv::Writer<W>,
    schedule: &Schedule,
) -> anyhow::Result<()> {
    w.write_record([
        "date",
        "shift_type",
        "start_time",
        "end_time",
        "worker_id",
        "worker_name",
    ])?;
    for (date, assignments) in schedule.iter() {
        let date = date.to_string();
        for a in assignments {
            w.write_record([
                date.as_str(),
                a.shift_type.as_str(),
                a.start_time.as_str(),
                a.end_time.as_str(),
                a.worker_id.as_str(),
                a.worker_name.as_str(),
            ])?;
        }
    }
    Ok(())
}
