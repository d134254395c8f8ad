use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde_json::Value;
use std::path::Path;
use std::time::Instant;
use tracing::debug;

use crate::commands::connection::ConnectionOptions;
use crate::config::UserConfig;
use crate::http::ApplianceClient;
use crate::ui::{request_box, response_box, spinner::Spinner};

pub struct SendOptions {
    pub method: String,
    pub call: String,
    pub data: Option<String>,
    pub raw: bool,
    pub connection: ConnectionOptions,
}

pub async fn handle_send(options: SendOptions, config: &UserConfig) -> Result<()> {
    let credential = options.connection.credential(config)?;
    let client = ApplianceClient::new(&options.connection.client_options(config)?)?;
    let payload = read_payload(options.data.as_deref()).await?;

    if !options.raw {
        let preview = client.build_request(&options.method, &options.call, payload.clone(), &credential)?;
        request_box::print_request_box(&preview);
    }

    let start = Instant::now();
    let spinner = Spinner::new(&format!("{} {}", options.method, options.call));
    let result = client
        .send(&options.method, &options.call, payload, &credential)
        .await;
    spinner.finish();
    let response = result.with_context(|| format!("Request to {} failed", credential.hostname()))?;

    let status = response.status();
    let response_headers = response.headers().clone();
    let body_bytes = response.bytes().await?;
    let duration = start.elapsed();
    debug!(bytes = body_bytes.len(), ?duration, "read response body");

    if options.raw {
        println!("{}", String::from_utf8_lossy(&body_bytes));
        return Ok(());
    }

    response_box::print_response_box(status, duration, body_bytes.len(), &response_headers);

    if let Ok(json_value) = serde_json::from_slice::<Value>(&body_bytes) {
        let pretty_json = serde_json::to_string_pretty(&json_value)?;
        for (i, line) in pretty_json.lines().enumerate() {
            println!("{:>3}  {}", (i + 1).to_string().dimmed(), line);
        }
    } else if let Ok(text) = std::str::from_utf8(&body_bytes) {
        println!("{}", text);
    } else {
        println!("{}", "[Binary data]".dimmed());
    }

    Ok(())
}

/// Request body from `--data`: `@path` reads a file, anything else is sent
/// as given, and no flag means an empty body.
pub async fn read_payload(data: Option<&str>) -> Result<Vec<u8>> {
    match data {
        Some(data) => match data.strip_prefix('@') {
            Some(path) => tokio::fs::read(Path::new(path))
                .await
                .with_context(|| format!("Could not read payload file {}", path)),
            None => Ok(data.as_bytes().to_vec()),
        },
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_payload_inline_and_empty() {
        assert!(read_payload(None).await.unwrap().is_empty());
        assert_eq!(
            read_payload(Some(r#"{"limit": 10}"#)).await.unwrap(),
            br#"{"limit": 10}"#.to_vec()
        );
    }

    #[tokio::test]
    async fn test_read_payload_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("query.json");
        std::fs::write(&path, "{\"from\": -1800000}\n").unwrap();

        let payload = read_payload(Some(&format!("@{}", path.display()))).await.unwrap();
        assert_eq!(payload, b"{\"from\": -1800000}\n".to_vec());

        assert!(read_payload(Some("@/definitely/not/here.json")).await.is_err());
    }
}
