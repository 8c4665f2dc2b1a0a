#![allow(dead_code)]

use std::time::Duration;

use freshkit::{Client, Config, Credentials};
use wiremock::MockServer;

/// `base64("key:X")`, the Basic credentials for API key `key`.
pub const API_KEY_AUTH: &str = "Basic a2V5Olg=";

/// Configuration pointed at a mock server, with millisecond retry waits.
pub fn config(server: &MockServer) -> Config {
    Config::with_api_key(server.uri(), "key").retry_after(Duration::from_millis(10))
}

pub fn basic_config(server: &MockServer, username: &str, password: &str) -> Config {
    Config::new(
        server.uri(),
        Credentials::Basic {
            username: username.to_string(),
            password: password.to_string(),
        },
    )
    .retry_after(Duration::from_millis(10))
}

pub fn client(server: &MockServer) -> Client {
    Client::new(&config(server)).expect("client")
}
