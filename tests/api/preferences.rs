use crate::helpers::spawn_app;

#[tokio::test]
async fn preference_options_are_listed_in_display_order() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .get(format!("{}/preferences/options", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.unwrap();
    let bedroom_codes: Vec<_> = body["bedrooms"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["value"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(bedroom_codes, ["ANY", "B1", "B2", "B3", "B4", "B5_PLUS"]);

    assert_eq!(body["prices"][0]["label"], "Any Price");
    assert_eq!(body["prices"][5]["value"], "P1500_PLUS");
}
