//! `ApiClient` against a local HTTP server standing in for the backend.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use signup_client::{ApiClient, RegistrationApi};
use signup_shared::{ApiError, FormField, RegistrationForm};

#[derive(Clone)]
struct Backend {
    received: Arc<Mutex<Vec<serde_json::Value>>>,
    reply: (StatusCode, String),
}

async fn create_user(
    State(backend): State<Backend>,
    Json(body): Json<serde_json::Value>,
) -> (StatusCode, String) {
    backend.received.lock().unwrap().push(body);
    backend.reply.clone()
}

async fn serve(reply: (StatusCode, &str)) -> (ApiClient, Arc<Mutex<Vec<serde_json::Value>>>) {
    let received = Arc::new(Mutex::new(Vec::new()));
    let backend = Backend {
        received: received.clone(),
        reply: (reply.0, reply.1.to_string()),
    };
    let app = Router::new()
        .route("/user", post(create_user))
        .with_state(backend);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = ApiClient::new().with_base_url(format!("http://{addr}"));
    (client, received)
}

fn form() -> RegistrationForm {
    let mut form = RegistrationForm::default();
    form.set(FormField::Name, "Ada Lovelace");
    form.set(FormField::Email, "ada@example.com");
    form.set(FormField::Password, "analytical");
    form.set(FormField::ConfirmPassword, "analytical");
    form
}

#[tokio::test]
async fn posts_form_as_camel_case_json() {
    let (client, received) = serve((StatusCode::CREATED, r#"{"id":"42"}"#)).await;

    client.register_user(&form()).await.unwrap();

    let received = received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(
        received[0],
        serde_json::json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "password": "analytical",
            "confirmPassword": "analytical",
        })
    );
}

#[tokio::test]
async fn any_success_body_is_accepted() {
    let (client, _) = serve((StatusCode::OK, "created")).await;
    assert_eq!(client.register_user(&form()).await, Ok(()));

    let (client, _) = serve((StatusCode::NO_CONTENT, "")).await;
    assert_eq!(client.register_user(&form()).await, Ok(()));
}

#[tokio::test]
async fn error_body_is_returned_with_status() {
    let (client, _) = serve((StatusCode::BAD_REQUEST, r#"{"message":"Email already in use"}"#)).await;

    let err = client.register_user(&form()).await.unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(err.server_message().as_deref(), Some("Email already in use"));
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new().with_base_url(format!("http://{addr}"));
    let err = client.register_user(&form()).await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)), "{err:?}");
    assert_eq!(err.server_message(), None);
}
