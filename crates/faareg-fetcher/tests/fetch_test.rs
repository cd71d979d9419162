use faareg_core::AppConfig;
use faareg_fetcher::{FetchError, RegistrationFetcher};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LOOKUP_PATH: &str = "/AircraftInquiry/Search/NNumberResult";
const ASSIGNED_PAGE: &str = include_str!("fixtures/n265ft.html");
const NOT_ASSIGNED_PAGE: &str = include_str!("fixtures/not_assigned.html");

async fn registry_serving(tail: &str, status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LOOKUP_PATH))
        .and(query_param("nNumberTxt", tail))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&server)
        .await;
    server
}

fn fetcher_for(base_url: String) -> RegistrationFetcher {
    let mut config = AppConfig::default();
    config.registry.base_url = base_url;
    config.http.timeout_secs = 5;
    RegistrationFetcher::from_config(&config).expect("create fetcher")
}

#[tokio::test]
async fn test_fetch_assigned_registration() {
    let server = registry_serving("265FT", 200, ASSIGNED_PAGE).await;
    let fetcher = fetcher_for(format!("{}{LOOKUP_PATH}", server.uri()));

    let registration = fetcher.fetch("265FT").await.expect("fetch registration");

    let aircraft = &registration.aircraft;
    assert_eq!(aircraft.registration, "N265FT");
    assert_eq!(aircraft.serial_number, "465-46");
    assert_eq!(aircraft.status, "Valid");
    assert_eq!(aircraft.manufacturer_name, "ROCKWELL INTERNATIONAL CORP");
    assert_eq!(aircraft.model, "NA-265-65");
    assert_eq!(aircraft.mode_s_code_oct, "51111037");
    assert_eq!(aircraft.mode_s_code_hex, "A2921F");
    assert_eq!(aircraft.mfr_year, "1981");
    assert_eq!(aircraft.fractional_owner, "NO");

    let owner = &registration.registered_owner;
    assert_eq!(owner.name, "PALMETTO AVIATION LLC");
    assert_eq!(owner.state, "SOUTH CAROLINA");
    assert_eq!(owner.zip_code, "29607-1234");
    assert_eq!(owner.country, "UNITED STATES");

    let airworthiness = &registration.airworthiness;
    assert_eq!(airworthiness.type_certificate_data_sheet, "A2WE");
    assert_eq!(airworthiness.engine_model, "TFE731-3R-1D");
    assert_eq!(airworthiness.date, "03/27/1981");
    assert_eq!(airworthiness.exception_code, "None");
}

#[tokio::test]
async fn test_fetch_fields_are_trimmed() {
    let server = registry_serving("265FT", 200, ASSIGNED_PAGE).await;
    let fetcher = fetcher_for(format!("{}{LOOKUP_PATH}", server.uri()));

    let registration = fetcher.fetch("265FT").await.expect("fetch registration");
    let value = serde_json::to_value(&registration).expect("serialize registration");

    for section in ["aircraft", "registered_owner", "airworthiness"] {
        let fields = value[section].as_object().expect("section is an object");
        for (name, field) in fields {
            let text = field.as_str().expect("field is text");
            assert_eq!(text, text.trim(), "{section}.{name} is not trimmed");
        }
    }
}

#[tokio::test]
async fn test_fetch_is_idempotent() {
    let server = registry_serving("265FT", 200, ASSIGNED_PAGE).await;
    let fetcher = fetcher_for(format!("{}{LOOKUP_PATH}", server.uri()));

    let first = fetcher.fetch("265FT").await.expect("first fetch");
    let second = fetcher.fetch("265FT").await.expect("second fetch");
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_fetch_not_assigned() {
    let server = registry_serving("99999", 200, NOT_ASSIGNED_PAGE).await;
    let fetcher = fetcher_for(format!("{}{LOOKUP_PATH}", server.uri()));

    let err = fetcher.fetch("99999").await.unwrap_err();
    assert!(
        matches!(err, FetchError::NotAssigned { ref identifier } if identifier == "99999"),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn test_fetch_server_error_is_unable_to_query() {
    let server = registry_serving("265FT", 503, "Service Unavailable").await;
    let fetcher = fetcher_for(format!("{}{LOOKUP_PATH}", server.uri()));

    let err = fetcher.fetch("265FT").await.unwrap_err();
    assert!(matches!(err, FetchError::UnableToQuery { .. }), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_fetch_unreachable_endpoint() {
    // Bind then drop a listener so the port is known to be closed.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind listener");
        listener.local_addr().expect("local addr").port()
    };
    let fetcher = fetcher_for(format!("http://127.0.0.1:{port}{LOOKUP_PATH}"));

    let err = fetcher.fetch("265FT").await.unwrap_err();
    assert!(matches!(err, FetchError::UnableToQuery { .. }), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_fetch_malformed_base_url() {
    let fetcher = fetcher_for("registry.faa.gov without scheme".to_string());

    let err = fetcher.fetch("265FT").await.unwrap_err();
    assert!(matches!(err, FetchError::UnableToQuery { .. }), "unexpected error: {err:?}");
}

#[tokio::test]
#[ignore = "Queries the live FAA registry"]
async fn test_live_registry_lookup() {
    let fetcher = RegistrationFetcher::new().expect("create fetcher");
    let registration = fetcher.fetch("265FT").await.expect("fetch registration");

    assert_eq!(registration.aircraft.registration, "N265FT");
    assert_eq!(registration.aircraft.serial_number, "465-46");
    assert_eq!(
        registration.aircraft.manufacturer_name,
        "ROCKWELL INTERNATIONAL CORP"
    );
    assert_eq!(registration.aircraft.model, "NA-265-65");
    assert_eq!(registration.aircraft.mode_s_code_hex, "A2921F");
}
