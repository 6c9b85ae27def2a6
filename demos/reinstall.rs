//! Reinstalling a server using the Leaseweb client.
//!
//! This program picks an operating system from the catalog, boots the
//! server over PXE and launches an installation, then polls the job once.

use leaseweb_baremetal::{LeasewebClientBuilder, LeasewebError, LeasewebResult, Payload};
use serde_json::json;

#[tokio::main]
async fn main() -> LeasewebResult<()> {
    dotenvy::dotenv().ok();

    let mut args = std::env::args().skip(1);
    let (Some(server_id), Some(os_id)) = (args.next(), args.next()) else {
        eprintln!("usage: reinstall <server-id> <operating-system-id>");
        return Ok(());
    };

    let client = LeasewebClientBuilder::from_env()?.build()?;

    // 1. Check the operating system exists.
    let systems = client.operating_systems().await?;
    let Some(os) = systems.iter().find(|os| os.id == os_id) else {
        eprintln!("unknown operating system {os_id}");
        return Ok(());
    };
    println!("Installing {} on server {server_id}", os.name);

    // 2. Launch the job.
    let mut payload = Payload::new();
    payload.insert("operatingSystemId".to_string(), json!(os.id));
    payload.insert("doEmailNotification".to_string(), json!(false));
    let job = client.launch_installation_job(&server_id, &payload).await?;
    println!("Launched job {} ({})", job.uuid, job.status);

    // 3. Read it back through the jobs list.
    match client.latest_installation_job(&server_id).await {
        Ok(latest) => println!("Latest installation job: {} ({})", latest.uuid, latest.status),
        Err(LeasewebError::NotFound { message, .. }) => println!("{message}"),
        Err(e) => return Err(e),
    }

    Ok(())
}
