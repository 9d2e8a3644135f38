#![allow(dead_code)]

use axum::Router;
use consumed::{
    AppState,
    config::{Config, FeedConfig, LoggingConfig, ServerConfig},
};
use serde_json::{Value, json};

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        feed: FeedConfig::default(),
        logging: LoggingConfig::default(),
    }
}

pub fn create_test_app() -> Router {
    consumed::router(AppState {
        config: test_config(),
    })
}

pub fn event(id: &str, user_id: &str, action_type: &str, title: &str, timestamp: &str) -> Value {
    json!({
        "id": id,
        "userId": user_id,
        "actionType": action_type,
        "mediaItem": { "title": title, "mediaType": "movie" },
        "timestamp": timestamp,
    })
}

pub fn list_add(id: &str, user_id: &str, list_name: &str, title: &str, timestamp: &str) -> Value {
    let mut value = event(id, user_id, "list_add", title, timestamp);
    value["listName"] = json!(list_name);
    value
}
