//! Command-line frontend for the reception desk.
//!
//! One subcommand per access-layer call; rows are echoed back the way the
//! desk's table view would show them. Presence of required inputs is
//! enforced here, not in the core.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reception_core::{Database, Patient, PatientRegistry, VisitLedger, VisitRecord};

#[derive(Parser)]
#[command(name = "reception")]
#[command(about = "Doctor's reception desk: patient registration and visit ledger")]
struct Cli {
    /// Path to the database file
    #[arg(long, default_value = "medical.db")]
    db: PathBuf,

    /// Print results as JSON instead of plain rows
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a patient, or update an existing registration in place
    Register {
        /// External patient id
        id_number: String,
        /// First name
        first_name: String,
        /// Last name
        last_name: String,
        /// Date of birth (YYYY-MM-DD)
        birth_date: NaiveDate,
    },
    /// Find patients by id number or last name
    FindPatients {
        /// External patient id (wins when both filters are given)
        #[arg(long)]
        id_number: Option<String>,
        /// Exact last name
        #[arg(long)]
        last_name: Option<String>,
    },
    /// Record a visit
    RecordVisit {
        /// id_number of the visiting patient (not validated)
        patient_id: String,
        /// Visit date (YYYY-MM-DD)
        visit_date: NaiveDate,
        /// Payment in whole currency units
        payment_amount: i64,
        /// Last name as entered at the desk
        last_name: String,
    },
    /// Find visits by patient id or the registered patient's last name
    FindVisits {
        /// id_number of the visiting patient (wins when both filters are given)
        #[arg(long)]
        patient_id: Option<String>,
        /// Exact last name of the linked patient
        #[arg(long)]
        last_name: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let db = Database::open(&cli.db)
        .with_context(|| format!("opening database at {}", cli.db.display()))?;

    match cli.command {
        Commands::Register {
            id_number,
            first_name,
            last_name,
            birth_date,
        } => {
            let patient = PatientRegistry::new(&db)
                .register_or_update(&id_number, &first_name, &last_name, birth_date)
                .context("registering patient")?;
            print_patients(&[patient], cli.json)?;
        }
        Commands::FindPatients {
            id_number,
            last_name,
        } => {
            let patients = PatientRegistry::new(&db)
                .find(id_number.as_deref(), last_name.as_deref())
                .context("finding patients")?;
            print_patients(&patients, cli.json)?;
        }
        Commands::RecordVisit {
            patient_id,
            visit_date,
            payment_amount,
            last_name,
        } => {
            let visit = VisitLedger::new(&db)
                .record(&patient_id, visit_date, payment_amount, &last_name)
                .context("recording visit")?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&visit)?);
            } else {
                println!(
                    "recorded visit #{} for {} on {}",
                    visit.id.unwrap_or_default(),
                    visit.patient_id,
                    visit.visit_date
                );
            }
        }
        Commands::FindVisits {
            patient_id,
            last_name,
        } => {
            let records = VisitLedger::new(&db)
                .find(patient_id.as_deref(), last_name.as_deref())
                .context("finding visits")?;
            print_visits(&records, cli.json)?;
        }
    }

    Ok(())
}

fn print_patients(patients: &[Patient], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(patients)?);
        return Ok(());
    }
    if patients.is_empty() {
        println!("no patients found");
        return Ok(());
    }
    for p in patients {
        println!(
            "{:<10} {:<24} born {}",
            p.id_number,
            p.full_name(),
            p.birth_date
        );
    }
    Ok(())
}

fn print_visits(records: &[VisitRecord], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }
    if records.is_empty() {
        println!("no visits found");
        return Ok(());
    }
    for r in records {
        let patient = match &r.patient {
            Some(p) => p.full_name(),
            None => "(unregistered patient)".to_string(),
        };
        println!(
            "{:<10} {}  paid {:>6}  {:<16} {}",
            r.visit.patient_id,
            r.visit.visit_date,
            r.visit.payment_amount,
            r.visit.patient_last_name,
            patient
        );
    }
    Ok(())
}
