use crate::model::{Assignment, Schedule, WorkerId};
use anyhow::{bail, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Chantier nécessitant des signaleurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSite {
    pub id: String,
    pub name: String,
    pub location: String,
    pub required_flaggers: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl JobSite {
    pub fn new<N: Into<String>, L: Into<String>>(
        name: N,
        location: L,
        required_flaggers: u32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self> {
        if required_flaggers == 0 {
            bail!("job site requires at least one flagger");
        }
        if end_date < start_date {
            bail!("job site end date must not precede start date");
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            location: location.into(),
            required_flaggers,
            start_date,
            end_date,
        })
    }

    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Résultat d'un dispatch pour une date.
#[derive(Debug, Clone)]
pub struct Dispatch<'a> {
    pub date: NaiveDate,
    pub assigned: Vec<&'a Assignment>,
    /// Types de quart demandés sans signaleur ce jour-là.
    pub missing: Vec<String>,
    pub required: u32,
}

impl Dispatch<'_> {
    /// Nombre de signaleurs distincts trouvés.
    pub fn flagger_count(&self) -> usize {
        let mut ids: Vec<&WorkerId> = self.assigned.iter().map(|a| &a.worker_id).collect();
        ids.sort();
        ids.dedup();
        ids.len()
    }

    pub fn is_covered(&self) -> bool {
        self.missing.is_empty() && self.flagger_count() >= self.required as usize
    }
}

/// Premier quart de type `kind` à la date donnée.
pub fn find_shift<'a>(schedule: &'a Schedule, date: NaiveDate, kind: &str) -> Option<&'a Assignment> {
    schedule.on(date).iter().find(|a| a.shift_type == kind)
}

/// Cherche un signaleur de garde pour chaque type de quart demandé.
pub fn dispatch<'a, S: AsRef<str>>(
    job: &JobSite,
    schedule: &'a Schedule,
    date: NaiveDate,
    kinds: &[S],
) -> Result<Dispatch<'a>> {
    if !job.covers(date) {
        bail!(
            "{date} is outside job {} window ({} .. {})",
            job.name,
            job.start_date,
            job.end_date
        );
    }
    if kinds.is_empty() {
        bail!("at least one shift kind must be requested");
    }

    let mut seen: Vec<&str> = Vec::new();
    let mut assigned = Vec::new();
    let mut missing = Vec::new();
    for kind in kinds {
        let kind = kind.as_ref();
        // un type demandé deux fois ne compte qu'une fois
        if seen.contains(&kind) {
            continue;
        }
        seen.push(kind);
        match find_shift(schedule, date, kind) {
            Some(a) => assigned.push(a),
            None => missing.push(kind.to_string()),
        }
    }
    Ok(Dispatch {
        date,
        assigned,
        missing,
        required: job.required_flaggers,
    })
}
