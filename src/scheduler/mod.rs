mod pattern;
mod rotation;
mod types;
mod util;

pub use pattern::{base_block, rotation_pattern, Slot};
pub use types::{ErrorKind, SchedError};
pub use util::parse_date;

use crate::config::RotationConfig;
use crate::model::{Schedule, Worker};
use chrono::NaiveDate;

/// Générateur de rotation : pool ordonné + configuration, sans état mutable.
///
/// `generate` prend `&self` ; un même générateur peut servir plusieurs fois
/// et produit toujours le même calendrier pour les mêmes paramètres.
#[derive(Debug, Clone)]
pub struct RotationGenerator {
    workers: Vec<Worker>,
    config: RotationConfig,
}

impl RotationGenerator {
    /// Table des quarts de référence, cycle de `cycle_days` jours.
    pub fn new(workers: Vec<Worker>, cycle_days: u32) -> Result<Self, SchedError> {
        Self::with_config(workers, RotationConfig::reference(cycle_days))
    }

    pub fn with_config(workers: Vec<Worker>, config: RotationConfig) -> Result<Self, SchedError> {
        if workers.is_empty() {
            return Err(SchedError::EmptyPool);
        }
        config.validate()?;
        Ok(Self { workers, config })
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn pool_size(&self) -> usize {
        self.workers.len()
    }

    pub fn config(&self) -> &RotationConfig {
        &self.config
    }

    /// Signaleur occupant le créneau `shift_index` au jour `day_offset`.
    ///
    /// Le pool tourne d'un cran par jour : l'index de créneau est lu dans le
    /// pool décalé de `day_offset mod taille`.
    pub fn worker_at(&self, day_offset: usize, shift_index: usize) -> &Worker {
        let pool_size = self.workers.len();
        let rotation_offset = day_offset % pool_size;
        let worker_index = (day_offset + shift_index) % pool_size;
        &self.workers[(worker_index + rotation_offset) % pool_size]
    }

    /// Génère `cycles` cycles complets à partir de `start`.
    pub fn generate(&self, start: NaiveDate, cycles: u32) -> Result<Schedule, SchedError> {
        rotation::generate(self, start, cycles)
    }

    /// Comme `generate`, avec une date `YYYY-MM-DD`.
    pub fn generate_from_str(&self, start: &str, cycles: u32) -> Result<Schedule, SchedError> {
        let start = util::parse_date(start)?;
        self.generate(start, cycles)
    }
}
