use anyhow::Result;
use zabbix_rs::ZabbixApiClient;

#[tokio::main]
async fn main() -> Result<()> {
    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost/api_jsonrpc.php".to_string());

    // apiinfo.version is anonymous, so no login needed.
    let mut client = ZabbixApiClient::new(url)?;
    let version = client.version().await?;

    println!("Zabbix API version: {version}");
    Ok(())
}
