use std::thread;
use std::time::Duration;

use log::debug;
use serde::Serialize;

use crate::config::InsightsConfig;

/// Payload for the one-shot launch ping.
#[derive(Debug, Serialize)]
struct LaunchPayload {
    app: &'static str,
    version: &'static str,
    os: &'static str,
    session: String,
}

impl LaunchPayload {
    fn new() -> Self {
        Self {
            app: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            os: std::env::consts::OS,
            session: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// Fire the launch ping, if configured.
///
/// Called once at startup and invisible past this point: the request runs
/// on a detached thread, the response body is discarded, and every failure
/// is swallowed after a debug log. Nothing downstream observes whether the
/// ping happened.
pub fn init(config: &InsightsConfig) {
    if !config.enabled || config.endpoint.is_empty() {
        debug!("insights disabled, skipping launch ping");
        return;
    }
    let endpoint = config.endpoint.clone();
    let spawned = thread::Builder::new()
        .name("insights".to_string())
        .spawn(move || send_ping(&endpoint));
    if let Err(e) = spawned {
        debug!("insights thread failed to spawn: {e}");
    }
}

fn send_ping(endpoint: &str) {
    let client = match reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            debug!("insights client build failed: {e}");
            return;
        }
    };
    match client.post(endpoint).json(&LaunchPayload::new()).send() {
        Ok(response) => debug!("launch ping sent ({})", response.status()),
        Err(e) => debug!("launch ping failed: {e}"),
    }
}
