use crate::scheduler::SchedError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Longueur de cycle par défaut (jours).
pub const DEFAULT_CYCLE_DAYS: u32 = 28;

/// Type de quart : nom et heures de début/fin.
///
/// `end_hour <= start_hour` signifie que le quart passe minuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftKind {
    pub name: String,
    pub start_hour: u8,
    pub end_hour: u8,
}

impl ShiftKind {
    pub fn new<N: Into<String>>(name: N, start_hour: u8, end_hour: u8) -> Self {
        Self {
            name: name.into(),
            start_hour,
            end_hour,
        }
    }

    pub fn start_time(&self) -> String {
        format_hour(self.start_hour)
    }

    pub fn end_time(&self) -> String {
        format_hour(self.end_hour)
    }

    pub fn wraps_midnight(&self) -> bool {
        self.end_hour <= self.start_hour
    }

    /// Durée en heures, en tenant compte du passage de minuit.
    pub fn duration_hours(&self) -> u8 {
        let hours = (i16::from(self.end_hour) - i16::from(self.start_hour)).rem_euclid(24);
        hours as u8
    }

    fn validate(&self) -> Result<(), SchedError> {
        if self.name.trim().is_empty() {
            return Err(SchedError::InvalidShiftKind(
                "shift kind name cannot be empty".to_string(),
            ));
        }
        if self.start_hour > 23 || self.end_hour > 23 {
            return Err(SchedError::InvalidShiftKind(format!(
                "{}: hours must be in 0..=23",
                self.name
            )));
        }
        if self.start_hour == self.end_hour {
            return Err(SchedError::InvalidShiftKind(format!(
                "{}: start_hour and end_hour cannot be equal",
                self.name
            )));
        }
        Ok(())
    }
}

/// Configuration d'une rotation : longueur de cycle et table ordonnée des quarts.
///
/// L'ordre de `shift_kinds` fixe l'ordre des créneaux de chaque journée et
/// celui du motif de rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationConfig {
    pub cycle_days: u32,
    pub shift_kinds: Vec<ShiftKind>,
    #[serde(default = "default_off_slots")]
    pub off_slots: u8,
}

fn default_off_slots() -> u8 {
    2
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self::reference(DEFAULT_CYCLE_DAYS)
    }
}

impl RotationConfig {
    /// Jour 06-14, Soir 14-22, Nuit 22-06, deux jours OFF par bloc.
    pub fn reference(cycle_days: u32) -> Self {
        Self {
            cycle_days,
            shift_kinds: vec![
                ShiftKind::new("Day", 6, 14),
                ShiftKind::new("Swing", 14, 22),
                ShiftKind::new("Grave", 22, 6),
            ],
            off_slots: default_off_slots(),
        }
    }

    pub fn with_cycle_days(mut self, cycle_days: u32) -> Self {
        self.cycle_days = cycle_days;
        self
    }

    pub fn kind(&self, name: &str) -> Option<&ShiftKind> {
        self.shift_kinds.iter().find(|k| k.name == name)
    }

    pub fn validate(&self) -> Result<(), SchedError> {
        if self.cycle_days == 0 {
            return Err(SchedError::InvalidCycleDays);
        }
        if self.shift_kinds.is_empty() {
            return Err(SchedError::EmptyShiftTable);
        }
        if self.off_slots == 0 {
            return Err(SchedError::InvalidOffSlots);
        }
        for (i, kind) in self.shift_kinds.iter().enumerate() {
            kind.validate()?;
            if self.shift_kinds[..i].iter().any(|k| k.name == kind.name) {
                return Err(SchedError::DuplicateShiftKind(kind.name.clone()));
            }
        }
        Ok(())
    }
}

pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> Result<RotationConfig> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    let config: RotationConfig = serde_json::from_slice(&data)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("validating config {}", path.display()))?;
    Ok(config)
}

pub fn export_config_json<P: AsRef<Path>>(path: P, config: &RotationConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

pub(crate) fn format_hour(hour: u8) -> String {
    format!("{hour:02}:00")
}
