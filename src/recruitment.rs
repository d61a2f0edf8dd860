use crate::model::Worker;
use tracing::{info, warn};

/// Source attribuée par défaut aux recrues.
pub const DEFAULT_RECRUITMENT_SOURCE: &str = "Herb's Noon";

/// Avis produit à l'intégration d'une recrue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeNotice {
    Info(String),
    /// Recrue non certifiée : à vérifier avant planification.
    Warning(String),
}

impl IntakeNotice {
    pub fn message(&self) -> &str {
        match self {
            IntakeNotice::Info(m) | IntakeNotice::Warning(m) => m,
        }
    }
    pub fn is_warning(&self) -> bool {
        matches!(self, IntakeNotice::Warning(_))
    }
}

#[derive(Debug, Clone)]
pub struct Intake {
    pub worker: Worker,
    pub notice: IntakeNotice,
}

/// Permet de customiser le rendu du message d'intégration.
pub trait IntakeRenderer {
    fn render(&self, worker: &Worker) -> String;
}

/// Gabarit texte simple.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextIntake;

impl IntakeRenderer for TextIntake {
    fn render(&self, worker: &Worker) -> String {
        let mut message = format!(
            "[Recruitment Success] Worker '{name}' (ID: {id}...) onboarded from {source}.",
            name = worker.name,
            id = worker.id.short(),
            source = worker.source
        );
        if !worker.certified {
            message.push_str(
                " ALERT: Worker requires certification verification before scheduling.",
            );
        }
        message
    }
}

/// Intègre une recrue et prépare l'avis correspondant.
pub fn recruit_worker(
    name: &str,
    certified: bool,
    source: Option<&str>,
    renderer: &dyn IntakeRenderer,
) -> Intake {
    let worker = Worker::new(
        name.trim(),
        certified,
        source.unwrap_or(DEFAULT_RECRUITMENT_SOURCE),
    );
    let message = renderer.render(&worker);
    let notice = if certified {
        info!(worker = %worker.id.as_str(), "recruit onboarded");
        IntakeNotice::Info(message)
    } else {
        warn!(worker = %worker.id.as_str(), "recruit onboarded without certification");
        IntakeNotice::Warning(message)
    };
    Intake { worker, notice }
}

/// Signaleurs actifs et certifiés, dans l'ordre d'origine.
///
/// Le générateur ne vérifie pas la certification ; filtrer ici avant de le construire.
pub fn dispatchable(workers: &[Worker]) -> Vec<Worker> {
    workers
        .iter()
        .filter(|w| w.active && w.certified)
        .cloned()
        .collect()
}
