use std::sync::Arc;

use anyhow::Result;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use appointment_cell::{AppointmentTableController, RosterRow};
use booking_cell::BookingOverlay;
use directory_cell::{DirectoryContent, DirectoryController};
use shared_config::AppConfig;
use shared_gateway::ApiClient;
use shared_models::{Doctor, MemorySessionStore, Notifier, Patient, SessionStore, ROLE_KEY, TOKEN_KEY};

/// Stands in for the host UI's blocking dialogs.
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str) {
        println!("[notice] {}", message);
    }

    fn confirm(&self, message: &str) -> bool {
        println!("[confirm] {} (assuming yes)", message);
        true
    }
}

/// Stands in for the external booking modal.
struct TerminalOverlay;

impl BookingOverlay for TerminalOverlay {
    fn open(&self, doctor: &Doctor, patient: &Patient) {
        println!("[overlay] booking {} for {}", doctor.name, patient.name);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting clinic dashboard");

    let config = AppConfig::from_env();

    // The external auth flow owns this store; the demo seeds it from the
    // environment instead.
    let store = Arc::new(MemorySessionStore::new());
    if let Ok(token) = std::env::var("CLINIC_TOKEN") {
        store.set(TOKEN_KEY, &token);
    }
    let role = std::env::var("CLINIC_ROLE").unwrap_or_else(|_| "patient".into());
    store.set(ROLE_KEY, &role);

    let api = ApiClient::new(&config);
    let notifier = Arc::new(TerminalNotifier);
    let overlay = Arc::new(TerminalOverlay);

    let mut directory =
        DirectoryController::new(api.clone(), store.clone(), notifier.clone(), overlay)?;
    directory.load_all().await;

    match &directory.view().content {
        DirectoryContent::Cards(cards) => {
            info!("Directory holds {} doctors", cards.len());
            for card in cards {
                println!("{} | {} | {}", card.name, card.specialty, card.availability);
            }
        }
        DirectoryContent::Placeholder(text) => println!("{}", text),
    }

    // The roster query needs a doctor token; skip it when none is present.
    if store.token().is_some() {
        let mut roster = AppointmentTableController::new(api, store.clone(), notifier);
        roster.reload().await;

        info!("Roster for {}", roster.selected_date());
        for row in &roster.view().rows {
            match row {
                RosterRow::Appointment(row) => {
                    println!(
                        "{} | {} | {}",
                        row.patient_name, row.patient_phone, row.patient_email
                    );
                }
                RosterRow::Message(text) | RosterRow::Error(text) => println!("{}", text),
            }
        }
    }

    Ok(())
}
