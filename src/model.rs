use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Identifiant fort pour Worker
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorkerId(String);

impl WorkerId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
    /// Forme courte (8 premiers caractères) pour l'affichage.
    pub fn short(&self) -> &str {
        self.0.get(..8).unwrap_or(&self.0)
    }
}

/// Signaleur pouvant être placé dans la rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub id: WorkerId,
    pub name: String,
    #[serde(default)]
    pub certified: bool,
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_source() -> String {
    "App Signup".to_string()
}

fn default_active() -> bool {
    true
}

impl Worker {
    pub fn new<N: Into<String>, S: Into<String>>(name: N, certified: bool, source: S) -> Self {
        Self::with_id(WorkerId::random(), name, certified, source)
    }

    pub fn with_id<N: Into<String>, S: Into<String>>(
        id: WorkerId,
        name: N,
        certified: bool,
        source: S,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            certified,
            source: source.into(),
            active: true,
        }
    }
}

/// Pool de signaleurs, dans l'ordre d'insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerPool {
    pub workers: Vec<Worker>,
}

impl WorkerPool {
    pub fn find_by_id<'a>(&'a self, id: &WorkerId) -> Option<&'a Worker> {
        self.workers.iter().find(|w| &w.id == id)
    }
    pub fn find_by_name<'a>(&'a self, name: &str) -> Option<&'a Worker> {
        self.workers.iter().find(|w| w.name == name)
    }
    pub fn len(&self) -> usize {
        self.workers.len()
    }
    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }
}

/// Un quart attribué à un signaleur pour une date donnée.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub worker_id: WorkerId,
    pub worker_name: String,
    pub shift_type: String,
    /// `HH:00`
    pub start_time: String,
    /// `HH:00`
    pub end_time: String,
}

/// Calendrier produit par le générateur.
///
/// Une date absente et une date sans quart sont équivalentes : `on` renvoie
/// une tranche vide dans les deux cas.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    days: BTreeMap<NaiveDate, Vec<Assignment>>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, date: NaiveDate, assignment: Assignment) {
        self.days.entry(date).or_default().push(assignment);
    }

    pub fn on(&self, date: NaiveDate) -> &[Assignment] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Dates ayant au moins un quart, en ordre chronologique.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &[Assignment])> + '_ {
        self.days.iter().map(|(d, a)| (*d, a.as_slice()))
    }

    /// Nombre total de quarts attribués.
    pub fn assignment_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.assignment_count() == 0
    }
}
