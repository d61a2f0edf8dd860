#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use chrono::{Days, Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use flagpro::{
    config::{load_config_from_file, RotationConfig, DEFAULT_CYCLE_DAYS},
    dispatch::{dispatch, JobSite},
    io,
    model::{Schedule, Worker},
    recruitment::{dispatchable, recruit_worker, IntakeNotice, TextIntake},
    scheduler::{parse_date, RotationGenerator},
    storage::{JsonStorage, Storage},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de rotation de quarts pour signaleurs
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON du pool de signaleurs
    #[arg(long, global = true, default_value = "pool.json")]
    pool: String,

    #[command(subcommand)]
    cmd: Commands,
}

/// Paramètres de génération communs à `generate` et `dispatch`
#[derive(Args, Debug)]
struct GenerateArgs {
    /// Date de début YYYY-MM-DD (défaut : aujourd'hui)
    #[arg(long)]
    start: Option<String>,
    /// Longueur du cycle en jours (défaut : celle de --config, sinon 28)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    cycle_days: Option<u32>,
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    cycles: u32,
    /// Table des quarts JSON (défaut : Day/Swing/Grave)
    #[arg(long)]
    config: Option<String>,
    /// N'utiliser que les signaleurs actifs et certifiés
    #[arg(long)]
    certified_only: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Intégrer une recrue
    Recruit {
        #[arg(long)]
        name: String,
        #[arg(long)]
        certified: bool,
        #[arg(long)]
        source: Option<String>,
    },

    /// Importer des signaleurs depuis un CSV
    ImportWorkers {
        #[arg(long)]
        csv: String,
    },

    /// Lister le pool
    ListWorkers,

    /// Générer le calendrier de rotation
    Generate {
        #[command(flatten)]
        params: GenerateArgs,
        /// Nombre de jours affichés
        #[arg(long, default_value_t = 3)]
        show_days: u32,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Trouver les signaleurs de garde pour un chantier
    Dispatch {
        #[command(flatten)]
        params: GenerateArgs,
        #[arg(long)]
        job: String,
        #[arg(long)]
        location: String,
        #[arg(long, default_value_t = 2)]
        required: u32,
        /// Date du dispatch (défaut : date de début)
        #[arg(long)]
        date: Option<String>,
        /// Début du chantier (défaut : date du dispatch)
        #[arg(long)]
        job_start: Option<String>,
        /// Fin du chantier (défaut : date du dispatch)
        #[arg(long)]
        job_end: Option<String>,
        /// liste "Day,Swing,..."
        #[arg(long, default_value = "Day,Swing")]
        kinds: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.pool)?;
    let mut pool = storage.load_or_default()?;

    let code = match cli.cmd {
        Commands::Recruit {
            name,
            certified,
            source,
        } => {
            let intake = recruit_worker(&name, certified, source.as_deref(), &TextIntake);
            match &intake.notice {
                IntakeNotice::Info(m) => println!("{m}"),
                IntakeNotice::Warning(m) => eprintln!("WARNING: {m}"),
            }
            pool.workers.push(intake.worker);
            storage.save(&pool)?;
            println!("Total active workers: {}", active_count(&pool.workers));
            0
        }
        Commands::ImportWorkers { csv } => {
            let workers = io::import_workers_csv(csv)?;
            let uncertified = workers.iter().filter(|w| !w.certified).count();
            pool.workers.extend(workers);
            storage.save(&pool)?;
            if uncertified > 0 {
                eprintln!("WARNING: {uncertified} worker(s) require certification verification");
            }
            println!("Total active workers: {}", active_count(&pool.workers));
            0
        }
        Commands::ListWorkers => {
            for w in &pool.workers {
                println!(
                    "{} | {} | certified={} | active={} | {}",
                    w.id.short(),
                    w.name,
                    w.certified,
                    w.active,
                    w.source
                );
            }
            0
        }
        Commands::Generate {
            params,
            show_days,
            out_json,
            out_csv,
        } => {
            let (start, total_days, schedule) = build_schedule(&pool.workers, &params)?;
            if let Some(path) = out_json {
                io::export_schedule_json(path, &schedule)?;
            }
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, &schedule)?;
            }
            println!("Generated {total_days}-day rotation schedule");
            for offset in 0..show_days.min(total_days) {
                let date = start
                    .checked_add_days(Days::new(u64::from(offset)))
                    .context("date overflow")?;
                print_day(&schedule, date);
            }
            0
        }
        Commands::Dispatch {
            params,
            job,
            location,
            required,
            date,
            job_start,
            job_end,
            kinds,
        } => {
            let (start, _, schedule) = build_schedule(&pool.workers, &params)?;
            let date = date_or(date.as_deref(), start, "--date")?;
            let job_start = date_or(job_start.as_deref(), date, "--job-start")?;
            let job_end = date_or(job_end.as_deref(), date, "--job-end")?;
            let kinds: Vec<&str> = kinds
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect();
            let site = JobSite::new(job, location, required, job_start, job_end)?;
            let outcome = dispatch(&site, &schedule, date, &kinds)?;
            println!(
                "{} requires {} flagger(s) on {}.",
                site.name, site.required_flaggers, date
            );
            for a in &outcome.assigned {
                println!("DISPATCHED ({} shift): {}", a.shift_type, a.worker_name);
            }
            if outcome.is_covered() {
                println!("Flaggers clock in/out at {}.", site.location);
                0
            } else {
                eprintln!(
                    "Not enough scheduled shifts for {} on {} (missing: {})",
                    site.name,
                    date,
                    outcome.missing.join(",")
                );
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
    };

    std::process::exit(code);
}

fn build_schedule(
    workers: &[Worker],
    params: &GenerateArgs,
) -> Result<(NaiveDate, u32, Schedule)> {
    let mut config = match &params.config {
        Some(path) => load_config_from_file(path)?,
        None => RotationConfig::reference(DEFAULT_CYCLE_DAYS),
    };
    if let Some(days) = params.cycle_days {
        config = config.with_cycle_days(days);
    }
    let workers = if params.certified_only {
        dispatchable(workers)
    } else {
        workers.to_vec()
    };
    let generator = RotationGenerator::with_config(workers, config)?;
    let start = match &params.start {
        Some(raw) => parse_date(raw)?,
        None => Local::now().date_naive(),
    };
    let schedule = generator.generate(start, params.cycles)?;
    let total_days = generator.config().cycle_days.saturating_mul(params.cycles);
    Ok((start, total_days, schedule))
}

fn date_or(raw: Option<&str>, default: NaiveDate, flag: &str) -> Result<NaiveDate> {
    match raw {
        Some(raw) => parse_date(raw).with_context(|| format!("parsing {flag}")),
        None => Ok(default),
    }
}

fn active_count(workers: &[Worker]) -> usize {
    workers.iter().filter(|w| w.active).count()
}

fn print_day(schedule: &Schedule, date: NaiveDate) {
    println!("Date: {date}");
    let shifts = schedule.on(date);
    if shifts.is_empty() {
        println!("  No shifts scheduled.");
        return;
    }
    for a in shifts {
        println!(
            "  {:<6} {} → {} | {}",
            a.shift_type, a.start_time, a.end_time, a.worker_name
        );
    }
}
