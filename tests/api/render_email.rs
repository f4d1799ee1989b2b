use serde_json::json;

use crate::helpers::spawn_app;

fn valid_body() -> serde_json::Value {
    json!({
        "price": "$1,095",
        "bedrooms": "3 bedrooms",
        "address": "140 Elizabeth St, Guelph",
        "description": "Three bedroom townhouse with parking.",
        "listingUrl": "https://thecannon.ca/housing/777",
        "subscriptionBedrooms": "3 bedrooms",
        "subscriptionPriceRange": "$1000-1499",
    })
}

#[tokio::test]
async fn render_email_returns_200_and_html_for_valid_props() {
    let app = spawn_app().await;

    let response = app.post_render_email(&valid_body()).await;

    assert_eq!(200, response.status().as_u16());
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let html = response.text().await.unwrap();
    assert!(html.starts_with("<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\""));
    assert!(html.contains("140 Elizabeth St, Guelph"));
    assert!(html.contains("$1,095"));
}

#[tokio::test]
async fn render_email_returns_400_naming_missing_props() {
    let app = spawn_app().await;
    let test_cases = vec![
        ("address", "missing the address"),
        ("price", "missing the price"),
        ("listingUrl", "missing the listing url"),
        ("subscriptionPriceRange", "missing the subscription price range"),
    ];

    for (field, description) in test_cases {
        let mut body = valid_body();
        body.as_object_mut().unwrap().remove(field);

        let response = app.post_render_email(&body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            description
        );
        let error: serde_json::Value = response.json().await.unwrap();
        assert_eq!(error["missing"], json!([field]));
        assert_eq!(error["required"].as_array().unwrap().len(), 6);
    }
}

#[tokio::test]
async fn render_email_returns_400_for_non_string_props() {
    let app = spawn_app().await;
    let mut body = valid_body();
    body["bedrooms"] = json!(3);

    let response = app.post_render_email(&body).await;

    assert_eq!(400, response.status().as_u16());
    let error: serde_json::Value = response.json().await.unwrap();
    assert_eq!(error["missing"], json!(["bedrooms"]));
}

#[tokio::test]
async fn render_email_returns_400_for_a_non_json_body() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .post(format!("{}/render-email", &app.address))
        .header("Content-Type", "application/json")
        .body("price=1")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn render_email_rejects_other_methods_with_405() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .get(format!("{}/render-email", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(405, response.status().as_u16());
    let error: serde_json::Value = response.json().await.unwrap();
    assert_eq!(error["error"], "Method not allowed");
}

#[tokio::test]
async fn render_email_shows_placeholder_without_cover_image() {
    let app = spawn_app().await;

    let html = app
        .post_render_email(&valid_body())
        .await
        .text()
        .await
        .unwrap();
    assert!(!html.contains("<img"));
    assert!(html.contains("New listing on TheCannon</p>"));

    let mut body = valid_body();
    body["coverImageUrl"] = json!("https://img.example.com/777.jpg");
    let html = app.post_render_email(&body).await.text().await.unwrap();
    assert!(html.contains("<img"));
}

#[tokio::test]
async fn identical_requests_render_identical_documents() {
    let app = spawn_app().await;

    let first = app.post_render_email(&valid_body()).await.text().await.unwrap();
    let second = app.post_render_email(&valid_body()).await.text().await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn render_email_keeps_slashes_in_listing_text() {
    let app = spawn_app().await;
    let mut body = valid_body();
    body["address"] = json!("Unit 3/140 Elizabeth St");
    body["price"] = json!("$1,095/mo");

    let response = app.post_render_email(&body).await;

    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("Unit 3/140 Elizabeth St"));
    assert!(html.contains("$1,095/mo"));
    assert!(html.contains(r#"href="https://thecannon.ca/housing/777""#));
}
