mod common;

use simpro::SimsListFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = common::client_from_env()?;

    let mut filter = SimsListFilter::default();
    if let Ok(status) = std::env::var("SIMPRO_STATUS") {
        filter = filter.status(status);
    }

    let response = client.sims().get_sims(&filter).await?;
    println!("sim_count: {}", response.sim_count);
    for sim in response.sims {
        println!(
            "{} iccid={} msisdn={} status={} workflow={}",
            sim.id, sim.iccid, sim.msisdn, sim.status, sim.workflow_status
        );
    }

    Ok(())
}
