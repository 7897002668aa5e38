use docchat_ox::{DocChat, DocChatRequestError, ENDPOINT_ENV};

#[test]
fn test_client_creation() {
    let client = DocChat::new("http://localhost:8000");

    assert_eq!(client.base_url(), "http://localhost:8000");
    assert!(format!("{:?}", client).contains("DocChat"));
}

#[test]
fn test_client_builder() {
    let client = DocChat::builder().base_url("http://backend:9000").build();

    assert_eq!(client.base_url(), "http://backend:9000");
}

#[test]
#[ignore = "Environment variable tests are unreliable in concurrent test execution"]
fn test_client_from_env_missing_endpoint() {
    unsafe {
        std::env::remove_var(ENDPOINT_ENV);
    }

    let result = DocChat::load_from_env();
    assert!(matches!(result, Err(DocChatRequestError::MissingEndpoint)));
}

#[test]
fn test_client_from_env_with_endpoint() {
    unsafe {
        std::env::set_var(ENDPOINT_ENV, "http://localhost:8000");
    }

    let result = DocChat::load_from_env();
    assert!(result.is_ok());

    unsafe {
        std::env::remove_var(ENDPOINT_ENV);
    }
}

#[test]
fn missing_endpoint_error_names_the_variable() {
    let message = DocChatRequestError::MissingEndpoint.to_string();

    assert!(message.contains("ENDPOINT"));
    assert!(message.contains("not configured"));
}

#[test]
fn status_error_carries_code_and_body() {
    let err = DocChatRequestError::Status {
        status: reqwest::StatusCode::BAD_GATEWAY,
        body: "upstream unavailable".to_string(),
    };

    let message = err.to_string();
    assert!(message.contains("502"));
    assert!(message.contains("upstream unavailable"));
}
