#![forbid(unsafe_code)]
//! FlagPro — rotation de quarts pour signaleurs routiers (sans BD).
//!
//! - Générateur de rotation déterministe (Jour/Soir/Nuit + jours OFF).
//! - Configuration explicite de la table des quarts (JSON).
//! - Intégration des recrues, recherche de dispatch par chantier.
//! - Stockage du pool en JSON, export du calendrier JSON/CSV.

pub mod config;
pub mod dispatch;
pub mod io;
pub mod model;
pub mod recruitment;
pub mod scheduler;
pub mod storage;

pub use config::{load_config_from_file, RotationConfig, ShiftKind, DEFAULT_CYCLE_DAYS};
pub use dispatch::{dispatch, find_shift, Dispatch, JobSite};
pub use model::{Assignment, Schedule, Worker, WorkerId, WorkerPool};
pub use recruitment::{dispatchable, recruit_worker, Intake, IntakeNotice, IntakeRenderer, TextIntake};
pub use scheduler::{ErrorKind, RotationGenerator, SchedError};
pub use storage::{JsonStorage, Storage};
