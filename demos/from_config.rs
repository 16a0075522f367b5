use anyhow::Result;
use serde_json::json;
use zabbix_rs::{Config, ZabbixApiClient};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Expects a config.toml with an [api] table; logs in immediately
    // when username/password are present.
    let config = Config::from_file("config.toml")?;
    let mut client = ZabbixApiClient::connect(config).await?;

    let problems = client
        .problem_get(json!({"recent": true, "sortfield": ["eventid"], "sortorder": "DESC"}))
        .await?;

    println!(
        "Current problems:\n{}",
        serde_json::to_string_pretty(&problems)?
    );

    client.logout((), "").await?;
    Ok(())
}
