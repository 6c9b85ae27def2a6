//! Server inventory using the Leaseweb client.
//!
//! This program reads the API token from the environment, lists every
//! server in one site and prints its addresses, location and power state.

use leaseweb_baremetal::{LeasewebClient, LeasewebClientBuilder, LeasewebResult};

#[tokio::main]
async fn main() -> LeasewebResult<()> {
    dotenvy::dotenv().ok();

    let client: LeasewebClient = LeasewebClientBuilder::from_env()?.build()?;
    let site = std::env::args().nth(1);

    // 1. Walk every page of the server list.
    let servers = client.all_servers(site.as_deref()).await?;
    println!("Found {} servers", servers.len());

    // 2. Print one line per server, with its power state.
    for server in &servers {
        let power = client.power_info(&server.id).await?;
        println!(
            "  • {} [{}] public={} ipmi={} {}/{}/{}/{} {}",
            server.id,
            server.contract.reference,
            server.public_ip().unwrap_or("-"),
            server.remote_management_ip().unwrap_or("-"),
            server.location.site,
            server.location.suite,
            server.location.rack,
            server.location.unit,
            if power.is_powered_on() { "on" } else { "off" }
        );
    }

    Ok(())
}
