use serde_json::json;
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{any, method, path},
};

use crate::helpers::spawn_app;

fn email_subscription() -> serde_json::Value {
    json!({
        "type": "EMAIL",
        "email": "a@b.com",
        "webhookUrl": "",
        "bedroomPreferences": ["B1"],
        "pricePreferences": ["ANY"],
    })
}

#[tokio::test]
async fn subscribe_returns_200_for_a_valid_email_subscription() {
    let app = spawn_app().await;

    Mock::given(path("/create_subscription"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "abc" })))
        .expect(1)
        .mount(&app.subscription_server)
        .await;

    let response = app.post_subscription(&email_subscription()).await;

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn subscribe_forwards_only_the_active_contact_field() {
    let app = spawn_app().await;

    Mock::given(path("/create_subscription"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.subscription_server)
        .await;

    app.post_subscription(&email_subscription()).await;

    let received = &app.subscription_server.received_requests().await.unwrap()[0];
    let body: serde_json::Value = serde_json::from_slice(&received.body).unwrap();
    assert_eq!(
        body,
        json!({
            "type": "EMAIL",
            "email": "a@b.com",
            "bedroomPreferences": ["B1"],
            "pricePreferences": ["ANY"],
        })
    );
}

#[tokio::test]
async fn subscribe_accepts_a_webhook_subscription() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.subscription_server)
        .await;

    let response = app
        .post_subscription(&json!({
            "type": "WEBHOOK",
            "webhookUrl": "https://discord.com/api/webhooks/1/abc",
            "bedroomPreferences": ["B2", "B3"],
            "pricePreferences": ["P700_999"],
        }))
        .await;

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn subscribe_returns_400_with_field_messages_for_invalid_forms() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.subscription_server)
        .await;

    let test_cases = vec![
        (
            json!({"type": "EMAIL", "email": "", "bedroomPreferences": ["B1"], "pricePreferences": ["ANY"]}),
            "email",
            "empty email",
        ),
        (
            json!({"type": "WEBHOOK", "webhookUrl": "not-a-url", "bedroomPreferences": ["ANY"], "pricePreferences": ["ANY"]}),
            "webhookUrl",
            "invalid webhook url",
        ),
        (
            json!({"type": "EMAIL", "email": "a@b.com", "bedroomPreferences": [], "pricePreferences": ["ANY"]}),
            "bedroomPreferences",
            "no bedroom preference",
        ),
        (
            json!({"type": "EMAIL", "email": "a@b.com", "bedroomPreferences": ["B1"], "pricePreferences": ["P9"]}),
            "pricePreferences",
            "unknown price code",
        ),
    ];

    for (body, field, description) in test_cases {
        let response = app.post_subscription(&body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 Bad Request when the payload was {}.",
            description
        );
        let error: serde_json::Value = response.json().await.unwrap();
        assert!(
            error["errors"][field].is_array(),
            "No message for {} when the payload was {}.",
            field,
            description
        );
    }
}

#[tokio::test]
async fn subscribe_returns_502_with_the_service_error_message() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "Email already subscribed" })),
        )
        .expect(1)
        .mount(&app.subscription_server)
        .await;

    let response = app.post_subscription(&email_subscription()).await;

    assert_eq!(502, response.status().as_u16());
    let error: serde_json::Value = response.json().await.unwrap();
    assert_eq!(error["error"], "Email already subscribed");
}

#[tokio::test]
async fn subscribe_returns_500_when_the_service_is_unreachable() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(3)))
        .mount(&app.subscription_server)
        .await;

    let response = app.post_subscription(&email_subscription()).await;

    assert_eq!(500, response.status().as_u16());
    let error: serde_json::Value = response.json().await.unwrap();
    assert_eq!(error["error"], "An unexpected error occurred");
}

#[tokio::test]
async fn subscribe_reports_mistyped_fields_under_the_field() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.subscription_server)
        .await;

    let test_cases = vec![
        (
            json!({"type": "EMAIL", "email": "a@b.com", "bedroomPreferences": "B1", "pricePreferences": ["ANY"]}),
            "bedroomPreferences",
            "a string instead of an array",
        ),
        (
            json!({"type": "EMAIL", "email": "a@b.com", "bedroomPreferences": ["B1"], "pricePreferences": null}),
            "pricePreferences",
            "a null price array",
        ),
        (
            json!({"type": null, "email": "a@b.com", "bedroomPreferences": ["B1"], "pricePreferences": ["ANY"]}),
            "email",
            "a null contact type",
        ),
    ];

    for (body, field, description) in test_cases {
        let response = app.post_subscription(&body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 Bad Request when the payload was {}.",
            description
        );
        let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
        assert_eq!(content_type, "application/json");
        let error: serde_json::Value = response.json().await.unwrap();
        assert!(
            error["errors"][field].is_array(),
            "No message for {} when the payload was {}.",
            field,
            description
        );
    }
}

#[tokio::test]
async fn subscribe_answers_a_non_object_body_with_every_field_message() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .post(format!("{}/subscriptions", &app.address))
        .header("Content-Type", "application/json")
        .body("[1, 2")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
    let error: serde_json::Value = response.json().await.unwrap();
    assert!(error["errors"]["email"].is_array());
    assert!(error["errors"]["bedroomPreferences"].is_array());
    assert!(error["errors"]["pricePreferences"].is_array());
}
