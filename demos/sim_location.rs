mod common;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = common::client_from_env()?;
    let iccid = common::required_env("SIMPRO_ICCID")?;

    let locations = client.sims().get_sim_location(&iccid).await?;
    for location in locations {
        println!(
            "{} lat={} lon={} postal_code={}",
            location.timestamp, location.latitude, location.longitude, location.postal_code
        );
    }

    Ok(())
}
