use anyhow::Result;
use serde_json::json;
use zabbix_rs::ZabbixApiClient;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let url = std::env::var("ZABBIX_URL")?;
    let user = std::env::var("ZABBIX_USER")?;
    let password = std::env::var("ZABBIX_PASSWORD")?;

    let mut client = ZabbixApiClient::builder(url)
        .default_param("output", "extend")
        .log_communication(true)
        .build()?;

    // Token is cached in the temp directory; rerunning this program
    // reuses it instead of logging in again.
    client
        .login(json!({"user": user, "password": password}), "", None)
        .await?;
    println!("Logged in, token cached");

    let hosts = client
        .call("host.get", json!({"selectInterfaces": "extend"}), "hostid", true)
        .await?;

    if let Some(hosts) = hosts.as_object() {
        println!("Found {} hosts:", hosts.len());
        for (hostid, host) in hosts {
            println!("{:<10} {}", hostid, host["host"].as_str().unwrap_or("?"));
        }
    }

    Ok(())
}
