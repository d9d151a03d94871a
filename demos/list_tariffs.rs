mod common;

use simpro::{AccountNumber, TariffListFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = common::client_from_env()?;

    let account_numbers = match std::env::var("SIMPRO_ACCOUNT_NUMBERS") {
        Ok(raw) => raw
            .split(',')
            .map(AccountNumber::new)
            .collect::<Result<Vec<_>, _>>()?,
        Err(_) => Vec::new(),
    };

    let tariffs = client
        .tariffs()
        .get_tariffs(&TariffListFilter::for_accounts(account_numbers))
        .await?;
    for tariff in tariffs {
        let bearers = tariff
            .bearers
            .iter()
            .map(|bearer| bearer.name.as_str())
            .collect::<Vec<_>>()
            .join("/");
        tracing::info!(tariff_id = tariff.id, "tariff loaded");
        println!(
            "{} {} mno={} account={} bearers={}",
            tariff.id, tariff.name, tariff.mno.name, tariff.account_number, bearers
        );
    }

    Ok(())
}
