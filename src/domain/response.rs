#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimsListResponse {
    pub sims: Vec<SimsListItem>,
    pub sim_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimsListItem {
    pub id: i64,
    pub iccid: String,
    pub eid: String,
    pub msisdn: String,
    pub imsi: String,
    pub status: String,
    pub workflow_status: String,
}

/// Last reported location of a SIM.
///
/// Coordinates are kept as the strings SimPro returns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimLocation {
    pub latitude: String,
    pub longitude: String,
    pub postal_code: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimsUsageResponse {
    pub sims: Vec<SimsUsageItem>,
}

/// Month-to-date usage counters for one SIM.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimsUsageItem {
    pub iccid: String,
    pub msisdn: String,
    pub month_to_date_bytes_up: String,
    pub month_to_date_bytes_down: String,
    pub month_to_date_voice_up: String,
    pub month_to_date_voice_down: String,
    pub month_to_date_sms_up: String,
    pub month_to_date_sms_down: String,
    pub last_seen: String,
    pub in_current_session: bool,
}

pub type TariffListResponse = Vec<TariffListItem>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TariffListItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub mno: Mno,
    pub contract_length: i64,
    pub customer_name: String,
    pub account_number: String,
    pub bearers: Vec<TariffBearer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TariffBearer {
    pub name: String,
}

/// Mobile network operator attached to a tariff.
///
/// SimPro reports it either as a bare name or as an object with an id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Mno {
    pub id: Option<i64>,
    pub name: String,
}
