use anyhow::{bail, Context, Result};
use owo_colors::OwoColorize;

use crate::commands::connection::ConnectionOptions;
use crate::config::UserConfig;
use crate::credential::Credential;
use crate::http::ApplianceClient;
use crate::models::Device;
use crate::ui::spinner::Spinner;

pub async fn handle_devices(
    limit: Option<usize>,
    connection: ConnectionOptions,
    config: &UserConfig,
) -> Result<()> {
    let credential = connection.credential(config)?;
    let client = ApplianceClient::new(&connection.client_options(config)?)?;

    let spinner = Spinner::new(&format!("Fetching devices from {}", credential.hostname()));
    let result = fetch_devices(&client, &credential, limit).await;
    spinner.finish();
    let devices = result?;

    for device in &devices {
        println!(
            "{:>8}  {:<40}  {:<39}  {}",
            device.id.to_string().dimmed(),
            device.name(),
            device.address().unwrap_or("-"),
            device.device_class.cyan()
        );
    }
    println!("\n{} {} devices", "✓".green(), devices.len());

    Ok(())
}

/// `GET devices`, decoded. A non-success status is reported with the
/// appliance's message.
pub async fn fetch_devices(
    client: &ApplianceClient,
    credential: &Credential,
    limit: Option<usize>,
) -> Result<Vec<Device>> {
    let call = match limit {
        Some(limit) => format!("devices?limit={}", limit),
        None => "devices".to_string(),
    };

    let response = client.send("GET", &call, "", credential).await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        bail!("Appliance returned {}: {}", status, body.trim());
    }

    serde_json::from_str(&body).context("Unexpected devices payload")
}
