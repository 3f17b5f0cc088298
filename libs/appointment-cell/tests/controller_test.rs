use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use appointment_cell::{AppointmentTableController, RosterRow};
use shared_config::AppConfig;
use shared_gateway::ApiClient;
use shared_models::{MemorySessionStore, Notifier, TOKEN_KEY};

#[derive(Default)]
struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

impl RecordingNotifier {
    fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&AppConfig {
        api_base_url: server.uri(),
        request_timeout_secs: 5,
    })
}

fn store_with_token() -> Arc<MemorySessionStore> {
    let store = Arc::new(MemorySessionStore::new());
    store.set(TOKEN_KEY, "doctor-token");
    store
}

fn controller_for(
    server: &MockServer,
    store: Arc<MemorySessionStore>,
    notifier: Arc<RecordingNotifier>,
) -> AppointmentTableController {
    AppointmentTableController::new(client_for(server), store, notifier)
}

fn appointment_json(id: i64, name: &str) -> serde_json::Value {
    json!({
        "appointmentId": id,
        "doctorId": 1,
        "patientId": id + 100,
        "patientName": name,
        "patientPhone": "5550001111",
        "patientEmail": format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        "appointmentTime": "2024-01-02T10:30:00",
        "status": 0
    })
}

#[tokio::test]
async fn test_empty_result_renders_single_message_row() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/appointments/2024-01-02/null/doctor-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"appointments": []})))
        .mount(&mock_server)
        .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let mut controller = controller_for(&mock_server, store_with_token(), notifier);

    controller
        .set_date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())
        .await;

    let rows = &controller.view().rows;
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0],
        RosterRow::Message("No Appointments found for today.".to_string())
    );
}

#[tokio::test]
async fn test_rows_rendered_per_returned_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/appointments/2024-01-02/null/doctor-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "appointments": [appointment_json(1, "Rosa Vance"), appointment_json(2, "Omar Diaz")]
        })))
        .mount(&mock_server)
        .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let mut controller = controller_for(&mock_server, store_with_token(), notifier);

    controller
        .set_date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())
        .await;

    let rows = &controller.view().rows;
    assert_eq!(rows.len(), 2);
    match &rows[0] {
        RosterRow::Appointment(row) => {
            assert_eq!(row.appointment_id, Some(1));
            assert_eq!(row.patient_name, "Rosa Vance");
            assert_eq!(row.doctor_id, Some(1));
        }
        other => panic!("expected appointment row, got {:?}", other),
    }
}

#[tokio::test]
async fn test_gateway_failure_renders_single_error_row() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .mount(&mock_server)
        .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let mut controller = controller_for(&mock_server, store_with_token(), notifier);

    controller
        .set_date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())
        .await;

    let rows = &controller.view().rows;
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0],
        RosterRow::Error("Error loading appointments. Try again later.".to_string())
    );
}

#[tokio::test]
async fn test_name_filter_travels_as_sentinel_when_absent() {
    let mock_server = MockServer::start().await;

    // Blank input resets the filter, so the reserved "null" segment is on
    // the wire, never an empty segment.
    Mock::given(method("GET"))
        .and(path("/appointments/2024-01-02/null/doctor-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"appointments": []})))
        .expect(2)
        .mount(&mock_server)
        .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let mut controller = controller_for(&mock_server, store_with_token(), notifier);

    controller
        .set_date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())
        .await;
    controller.set_name_input("   ").await;

    assert_eq!(controller.name_filter(), None);
}

#[tokio::test]
async fn test_name_filter_travels_verbatim_when_present() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/appointments/2024-01-02/null/doctor-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"appointments": []})))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/appointments/2024-01-02/Vance/doctor-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "appointments": [appointment_json(1, "Rosa Vance")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let mut controller = controller_for(&mock_server, store_with_token(), notifier);

    controller
        .set_date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())
        .await;
    controller.set_name_input("  Vance  ").await;

    assert_eq!(controller.name_filter(), Some("Vance"));
    assert_eq!(controller.view().rows.len(), 1);
}

#[tokio::test]
async fn test_date_change_discards_prior_rows_entirely() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/appointments/2024-01-01/null/doctor-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "appointments": [appointment_json(1, "Rosa Vance")]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/appointments/2024-01-02/null/doctor-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"appointments": []})))
        .mount(&mock_server)
        .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let mut controller = controller_for(&mock_server, store_with_token(), notifier);

    controller
        .set_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        .await;
    assert_eq!(controller.view().rows.len(), 1);
    assert!(matches!(controller.view().rows[0], RosterRow::Appointment(_)));

    controller
        .set_date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())
        .await;
    let rows = &controller.view().rows;
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0],
        RosterRow::Message("No Appointments found for today.".to_string())
    );
}

#[tokio::test]
async fn test_jump_to_today_targets_current_date() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"appointments": []})))
        .mount(&mock_server)
        .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let mut controller = controller_for(&mock_server, store_with_token(), notifier);

    controller
        .set_date(NaiveDate::from_ymd_opt(2020, 6, 1).unwrap())
        .await;
    controller.jump_to_today().await;

    assert_eq!(controller.selected_date(), chrono::Local::now().date_naive());
}

#[tokio::test]
async fn test_missing_token_short_circuits_without_network() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"appointments": []})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemorySessionStore::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let mut controller = controller_for(&mock_server, store, notifier.clone());

    controller.reload().await;

    assert_eq!(
        notifier.messages(),
        vec!["Session expired. Please log in again."]
    );
    assert!(controller.view().rows.is_empty());
}

#[tokio::test]
async fn test_stale_completion_is_discarded() {
    let mock_server = MockServer::start().await;

    let notifier = Arc::new(RecordingNotifier::default());
    let mut controller = controller_for(&mock_server, store_with_token(), notifier);

    // Two reloads in flight; the older one resolves after the newer one.
    let stale = controller.begin_reload();
    let current = controller.begin_reload();

    let newer: Vec<appointment_cell::AppointmentRecord> =
        serde_json::from_value(json!([appointment_json(2, "Omar Diaz")])).unwrap();
    controller.finish_reload(current, Ok(newer));

    let older: Vec<appointment_cell::AppointmentRecord> =
        serde_json::from_value(json!([appointment_json(1, "Rosa Vance")])).unwrap();
    controller.finish_reload(stale, Ok(older));

    let rows = &controller.view().rows;
    assert_eq!(rows.len(), 1);
    match &rows[0] {
        RosterRow::Appointment(row) => assert_eq!(row.patient_name, "Omar Diaz"),
        other => panic!("expected appointment row, got {:?}", other),
    }
}
