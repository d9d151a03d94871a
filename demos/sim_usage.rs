mod common;

use simpro::{Iccid, SimUsageQuery};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = common::client_from_env()?;

    let iccids = match std::env::var("SIMPRO_ICCIDS") {
        Ok(raw) => raw.split(',').map(Iccid::new).collect::<Result<Vec<_>, _>>()?,
        Err(_) => Vec::new(),
    };

    let usage = client
        .sims()
        .get_sim_usage(&SimUsageQuery::for_iccids(iccids))
        .await?;
    for sim in usage.sims {
        println!(
            "{} data up={} down={} sms up={} down={} last_seen={} in_session={}",
            sim.iccid,
            sim.month_to_date_bytes_up,
            sim.month_to_date_bytes_down,
            sim.month_to_date_sms_up,
            sim.month_to_date_sms_down,
            sim.last_seen,
            sim.in_current_session
        );
    }

    Ok(())
}
