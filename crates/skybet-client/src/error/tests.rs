//! Unit tests for error module.

use super::*;

#[test]
fn test_request_error_display() {
    let error = Error::Request {
        status: 404,
        body: "not found".to_string(),
    };

    let display = format!("{}", error);
    assert!(display.contains("404"));
    assert!(display.contains("not found"));
}

#[test]
fn test_missing_parameter_display() {
    let error = Error::MissingParameter("api_user".to_string());

    let display = format!("{}", error);
    assert!(display.contains("Missing parameter"));
    assert!(display.contains("\"api_user\""));
}

#[test]
fn test_chain_error_display() {
    let error = Error::Chain("endpoint already set".to_string());

    assert_eq!(format!("{}", error), "Chain error: endpoint already set");
}

#[test]
fn test_config_error_display() {
    let error = Error::Config("base_uri cannot be empty".to_string());

    assert_eq!(
        format!("{}", error),
        "Configuration error: base_uri cannot be empty"
    );
}

#[test]
fn test_status_only_for_request_errors() {
    let request = Error::Request {
        status: 503,
        body: String::new(),
    };
    assert_eq!(request.status(), Some(503));
    assert_eq!(Error::Chain("x".to_string()).status(), None);
}

#[test]
fn test_json_error_from() {
    let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error: Error = parse_err.into();

    assert!(matches!(error, Error::Json(_)));
    assert!(format!("{:?}", error).contains("Json"));
}
