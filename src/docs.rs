//! Swagger 2.0 document describing the agent routes, served under `/docs`.

use crate::configuration::DocsSettings;
use serde_json::{json, Value};

fn agent_schema(examples: &[(&str, Value)]) -> Value {
    let mut properties = serde_json::Map::new();
    for (name, example) in examples {
        let kind = if example.is_number() { "number" } else { "string" };
        properties.insert(
            name.to_string(),
            json!({ "type": kind, "example": example }),
        );
    }

    json!({ "type": "object", "properties": properties })
}

fn id_parameter(location: &str, description: &str, example: &str) -> Value {
    json!({
        "name": "id",
        "in": location,
        "description": description,
        "required": true,
        "type": "string",
        "example": example
    })
}

fn body_parameter(description: &str, schema: Value) -> Value {
    json!({
        "name": "agentData",
        "in": "body",
        "description": description,
        "required": true,
        "schema": schema
    })
}

pub fn api_document(settings: &DocsSettings) -> Value {
    let create_schema = agent_schema(
        &[
            ("AGENT_CODE", json!("A201")),
            ("AGENT_NAME", json!("Gabriel")),
            ("WORKING_AREA", json!("Costa Rica")),
            ("COMMISSION", json!(0.11)),
            ("PHONE_NO", json!("+1-336-454-7880")),
            ("COUNTRY", json!("Brazil")),
        ],
    );
    let update_schema = agent_schema(
        &[
            ("AGENT_NAME", json!("John Doe")),
            ("WORKING_AREA", json!("New York")),
            ("COMMISSION", json!(0.15)),
            ("PHONE_NO", json!("+1-123-456-7890")),
            ("COUNTRY", json!("USA")),
        ],
    );
    let patch_schema = agent_schema(
        &[
            ("AGENT_NAME", json!("Sam")),
            ("WORKING_AREA", json!("Melbourne")),
            ("COUNTRY", json!("Australia")),
        ],
    );
    let server_error = json!({ "description": "Database or query error" });

    let list = json!({
        "get": {
            "description": "Get all agents",
            "produces": ["application/json"],
            "responses": {
                "200": { "description": "To get all the agents information." },
                "500": server_error
            }
        }
    });
    let create = json!({
        "post": {
            "description": "Create a new agent",
            "produces": ["application/json"],
            "parameters": [body_parameter("Agent data to create", create_schema)],
            "responses": {
                "201": { "description": "Agent created successfully" },
                "500": server_error
            }
        }
    });
    let update = json!({
        "put": {
            "description": "Update a specific agent",
            "produces": ["application/json"],
            "parameters": [
                id_parameter("path", "Agent ID to update", "A007"),
                body_parameter("Agent data to update", update_schema)
            ],
            "responses": {
                "204": { "description": "Agent updated successfully" },
                "500": server_error
            }
        }
    });
    let patch = json!({
        "patch": {
            "description": "Update some fields of a specific agent",
            "produces": ["application/json"],
            "parameters": [
                id_parameter("path", "Agent ID to update", "A201"),
                body_parameter("Agent fields to update", patch_schema)
            ],
            "responses": {
                "204": { "description": "Agent updated successfully" },
                "400": { "description": "No valid fields to update" },
                "500": server_error
            }
        }
    });
    let delete = json!({
        "delete": {
            "description": "Delete a specific agent by ID",
            "produces": ["application/json"],
            "parameters": [id_parameter("query", "Agent ID to delete", "A007")],
            "responses": {
                "204": { "description": "Agent deleted successfully" },
                "400": { "description": "Missing id parameter" },
                "500": server_error
            }
        }
    });

    let mut document = json!({
        "swagger": "2.0",
        "info": {
            "title": settings.title,
            "version": settings.version,
            "description": settings.description,
        },
        "basePath": "/",
        "paths": {
            "/api/v1/agents": list,
            "/api/v1/createAgent": create,
            "/api/v1/updateAgent/{id}": update,
            "/api/v1/patchAgent/{id}": patch,
            "/api/v1/deleteAgent": delete,
        }
    });

    if let Some(host) = &settings.host {
        document["host"] = json!(host);
    }

    document
}

/// Page rendering `/docs/openapi.json` with swagger-ui.
pub const DOCS_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Agents related API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/docs/openapi.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;
