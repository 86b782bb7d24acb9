use reqwest::Client;
use std::time::Duration;

use crate::config::BackendConfig;

pub fn build_backend_client(backend: &BackendConfig) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(backend.timeout_secs))
        .connect_timeout(Duration::from_secs(backend.connect_timeout_secs))
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(90))
        .build()
        .unwrap_or_else(|_| Client::new())
}
