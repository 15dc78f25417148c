//! Medidash hospital dashboard demo CLI
//!
//! Runs the walk-through scenarios against the sample ward, or opens a store
//! from a config file and prints one page of it.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- dashboard
//!   cargo run -p demo -- patients --priority high --sort priority
//!   cargo run -p demo -- medicines --stock low
//!   cargo run -p demo -- --config medidash.toml theme --toggle

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use medidash_auth::{AuthGate, Route};
use medidash_config::AppConfig;
use medidash_contracts::{
    error::MedidashResult,
    ids::NotificationId,
    medicine::StockBucket,
    patient::{PatientStatus, Priority},
};
use medidash_core::{Store, SystemClock};
use medidash_query::{
    dashboard, MedicineQuery, MedicineSortKey, PatientQuery, PatientSortKey, SortDirection,
};
use medidash_ref_hospital::{
    mock_data::seed_data,
    scenarios::{
        access_control::{self, submit_login, LoginAttempt, INVALID_CREDENTIALS},
        dashboard_overview::{self, Overview},
        inventory_review, patient_intake,
    },
    workflow::toggle_theme,
};
use medidash_validate::LoginForm;

// ── CLI definition ────────────────────────────────────────────────────────────

/// Medidash: hospital dashboard demo.
///
/// Scenario subcommands walk through one page each against the sample ward.
/// The remaining subcommands open a store from `--config` and print a view.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "Medidash hospital dashboard demo",
    long_about = "Runs Medidash walk-through scenarios and prints dashboard, patient,\n\
                  medicine and notification views of the sample ward."
)]
struct Cli {
    /// TOML config file. Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all four scenarios in sequence.
    RunAll,
    /// Scenario 1: dashboard cards, bookings and notifications.
    DashboardOverview,
    /// Scenario 2: patient registration, search and discharge.
    PatientIntake,
    /// Scenario 3: inventory filters, receiving and restocking.
    InventoryReview,
    /// Scenario 4: login form, auth gate and route guards.
    AccessControl,
    /// Print the dashboard cards.
    Dashboard,
    /// List patients.
    Patients {
        /// Matches name, email, phone or symptoms.
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        status: Option<PatientStatus>,
        #[arg(long)]
        priority: Option<Priority>,
        /// name, date or priority.
        #[arg(long, default_value = "date")]
        sort: PatientSortKey,
        /// asc or desc.
        #[arg(long, default_value = "desc")]
        direction: SortDirection,
    },
    /// List medicines.
    Medicines {
        /// Matches name, category, manufacturer or batch number.
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// available, low or out.
        #[arg(long)]
        stock: Option<StockBucket>,
        /// name, stock, expiry or price.
        #[arg(long, default_value = "name")]
        sort: MedicineSortKey,
        /// asc or desc.
        #[arg(long, default_value = "asc")]
        direction: SortDirection,
    },
    /// List notifications, optionally marking one read or clearing all.
    Notifications {
        #[arg(long)]
        mark_read: Option<String>,
        #[arg(long)]
        clear: bool,
    },
    /// Try a login and show which pages the session reaches.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Show the saved theme, or flip it.
    Theme {
        #[arg(long)]
        toggle: bool,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = load_config(cli.config.as_ref()).and_then(|config| run(cli.command, &config));

    if let Err(e) = result {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&PathBuf>) -> MedidashResult<AppConfig> {
    match path {
        Some(path) => AppConfig::from_file(path),
        None => Ok(AppConfig::default()),
    }
}

/// Open a store the way `config` describes: saved theme first, then the
/// sample ward if asked for.
fn open_store(config: &AppConfig) -> MedidashResult<Store> {
    let mut store = Store::new(Box::new(SystemClock), config.preference_store())?;
    if config.seed_demo_data {
        let now = store.now();
        store.seed(seed_data(now));
    }
    info!(
        patients = store.patients().len(),
        medicines = store.medicines().len(),
        theme = %store.theme(),
        "store opened"
    );
    Ok(store)
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

fn run(command: Command, config: &AppConfig) -> MedidashResult<()> {
    match command {
        Command::RunAll => {
            print_banner();
            dashboard_overview::run_scenario()?;
            patient_intake::run_scenario()?;
            inventory_review::run_scenario()?;
            access_control::run_scenario()?;
            println!("All scenarios completed successfully.");
            Ok(())
        }
        Command::DashboardOverview => dashboard_overview::run_scenario(),
        Command::PatientIntake => patient_intake::run_scenario(),
        Command::InventoryReview => inventory_review::run_scenario(),
        Command::AccessControl => access_control::run_scenario(),
        Command::Dashboard => show_dashboard(config),
        Command::Patients {
            search,
            status,
            priority,
            sort,
            direction,
        } => {
            let query = PatientQuery {
                search: search.unwrap_or_default(),
                status,
                priority,
                sort_by: sort,
                direction,
            };
            show_patients(config, &query)
        }
        Command::Medicines {
            search,
            category,
            stock,
            sort,
            direction,
        } => {
            let query = MedicineQuery {
                search: search.unwrap_or_default(),
                category,
                stock,
                sort_by: sort,
                direction,
            };
            show_medicines(config, &query)
        }
        Command::Notifications { mark_read, clear } => {
            show_notifications(config, mark_read.map(NotificationId::from), clear)
        }
        Command::Login { email, password } => try_login(config, LoginForm::new(email, password)),
        Command::Theme { toggle } => show_theme(config, toggle),
    }
}

// ── Views ─────────────────────────────────────────────────────────────────────

fn show_dashboard(config: &AppConfig) -> MedidashResult<()> {
    let store = open_store(config)?;
    let overview = Overview::build(&store, &config.dashboard);
    let stats = overview.stats;

    println!("Dashboard ({})", store.today());
    println!("  Total patients          {}", stats.total_patients);
    println!("  Patients today          {}", stats.patients_today);
    println!("  Critical patients       {}", stats.critical_patients);
    println!("  Low-stock medicines     {}", stats.low_stock_medicines);
    println!("  Appointments today      {}", stats.appointments_today);
    println!("  Completed consultations {}", stats.completed_consultations);
    println!("  Unread notifications    {}", overview.unread);
    println!();
    println!("Recent patients");
    for p in &overview.recent {
        println!("  {:<22} {:<16} {}", p.name, p.status, p.priority);
    }
    println!("Expiring within {} days", config.dashboard.expiry_window_days);
    for m in &overview.expiring {
        println!("  {:<14} {}", m.name, m.expiry_date);
    }
    Ok(())
}

fn show_patients(config: &AppConfig, query: &PatientQuery) -> MedidashResult<()> {
    let store = open_store(config)?;
    let view = query.run(store.patients());
    println!("{} of {} patient(s)", view.len(), store.patients().len());
    for p in view {
        println!(
            "  {:<38} {:<22} {:<16} {:<8} {}",
            p.id,
            p.name,
            p.status,
            p.priority,
            p.appointment_date.format("%Y-%m-%d %H:%M")
        );
    }
    Ok(())
}

fn show_medicines(config: &AppConfig, query: &MedicineQuery) -> MedidashResult<()> {
    let store = open_store(config)?;
    let view = query.run(store.medicines());
    println!("{} of {} medicine(s)", view.len(), store.medicines().len());
    for m in view {
        println!(
            "  {:<14} {:<15} {:>4}/{:<4} {:<9} Rs {:>7.2}  expires {}",
            m.name,
            m.category,
            m.stock,
            m.min_stock,
            m.stock_bucket(),
            m.price,
            m.expiry_date
        );
    }
    println!("Inventory value: Rs {:.2}", dashboard::inventory_value(store.medicines()));
    Ok(())
}

fn show_notifications(
    config: &AppConfig,
    mark_read: Option<NotificationId>,
    clear: bool,
) -> MedidashResult<()> {
    let mut store = open_store(config)?;
    if let Some(id) = mark_read {
        if store.mark_notification_read(&id).is_none() {
            println!("No notification with id {id}");
        }
    }
    if clear {
        println!("Cleared {} notification(s)", store.clear_all_notifications());
    }
    println!("{} unread", store.unread_notification_count());
    for n in store.notifications() {
        let marker = if n.read { ' ' } else { '*' };
        println!("  {marker} {:<4} {:<8} {}: {}", n.id, n.kind, n.title, n.message);
    }
    Ok(())
}

fn try_login(config: &AppConfig, form: LoginForm) -> MedidashResult<()> {
    let mut gate = AuthGate::new(config.auth.clone());
    match submit_login(&mut gate, &form)? {
        LoginAttempt::Invalid(report) => {
            for failure in &report.failures {
                println!("{}: {}", failure.field, failure.message);
            }
        }
        LoginAttempt::Refused => println!("{INVALID_CREDENTIALS}"),
        LoginAttempt::SignedIn(user) => println!("Signed in as {} ({})", user.name, user.role),
    }
    for page in Route::PAGES {
        println!("  {:<14} -> {}", page.path(), gate.resolve(page.path()));
    }
    Ok(())
}

fn show_theme(config: &AppConfig, toggle: bool) -> MedidashResult<()> {
    let mut store = open_store(config)?;
    if toggle && toggle_theme(&mut store).is_none() {
        if let Some(error) = store.notifications().first() {
            println!("{}", error.message);
        }
    }
    println!("Theme: {}", store.theme());
    if config.preferences.path.is_none() {
        println!("(no preferences path configured; the theme is not saved)");
    }
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("Medidash: Hospital Dashboard");
    println!("Sample Ward Demo");
    println!("============================");
    println!();
    println!("Every page reads from one store:");
    println!("  [1] Patients, medicines, records, appointments and notifications");
    println!("  [2] Forms validate before the store is called");
    println!("  [3] Adds and deletes raise a notification; edits are announced by the page");
    println!("  [4] Dashboard counts are recomputed on every read");
    println!();
}
