mod common;

use serde_json::{json, Value};

// The pool cannot hand out connections, so no handler may run.
#[tokio::test]
async fn agent_routes_fail_when_database_is_unreachable() {
    let address = common::spawn_app_without_database().await;
    let client = reqwest::Client::new();

    let requests = vec![
        client.get(&format!("{}/api/v1/agents", &address)),
        client
            .post(&format!("{}/api/v1/createAgent", &address))
            .json(&common::gabriel()),
        client
            .put(&format!("{}/api/v1/updateAgent/A201", &address))
            .json(&json!({"AGENT_NAME": "Sam"})),
        // would be a 400 if the handler ran
        client
            .patch(&format!("{}/api/v1/patchAgent/A201", &address))
            .json(&json!({})),
        client.delete(&format!("{}/api/v1/deleteAgent?id=A201", &address)),
    ];

    for request in requests {
        let response = request.send().await.expect("Failed to execute request.");
        assert_eq!(500, response.status().as_u16());

        let body: Value = response.json().await.expect("Error body is not json");
        assert_eq!(body["message"], "Error connecting to database");
        assert_eq!(body["code"], 500);
    }
}

// Only the agent routes check out a connection.
#[tokio::test]
async fn unknown_api_path_is_not_found_without_database() {
    let address = common::spawn_app_without_database().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/api/v1/unknown", &address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(404, response.status().as_u16());

    // wrong method on an agent path matches no resource either
    let response = client
        .get(&format!("{}/api/v1/createAgent", &address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(404, response.status().as_u16());

    let response = client
        .get(&format!("{}/health_check", &address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());
}
