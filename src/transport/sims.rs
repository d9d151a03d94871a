use serde::Deserialize;

use super::TransportError;
use super::endpoint::Endpoint;
use super::query::Query;
use super::text::{nullable, text};
use crate::domain::{
    AccountNumber, Iccid, SimLocation, SimUsageQuery, SimsListFilter, SimsListItem,
    SimsListResponse, SimsUsageItem, SimsUsageResponse,
};

#[derive(Debug, Clone, Deserialize)]
struct SimsListJsonResponse {
    #[serde(default, deserialize_with = "nullable")]
    sims: Vec<SimsListJsonItem>,
    #[serde(default, deserialize_with = "nullable")]
    sim_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
struct SimsListJsonItem {
    #[serde(default, deserialize_with = "nullable")]
    id: i64,
    #[serde(default, deserialize_with = "text")]
    iccid: String,
    #[serde(default, deserialize_with = "text")]
    eid: String,
    #[serde(default, deserialize_with = "text")]
    msisdn: String,
    #[serde(default, deserialize_with = "text")]
    imsi: String,
    #[serde(default, deserialize_with = "text")]
    status: String,
    #[serde(default, deserialize_with = "text")]
    workflow_status: String,
}

#[derive(Debug, Clone, Deserialize)]
struct SimLocationJsonItem {
    #[serde(default, deserialize_with = "text")]
    latitude: String,
    #[serde(default, deserialize_with = "text")]
    longitude: String,
    #[serde(default, deserialize_with = "text")]
    postal_code: String,
    #[serde(default, deserialize_with = "text")]
    timestamp: String,
}

#[derive(Debug, Clone, Deserialize)]
struct SimsUsageJsonResponse {
    #[serde(default, deserialize_with = "nullable")]
    sims: Vec<SimsUsageJsonItem>,
}

#[derive(Debug, Clone, Deserialize)]
struct SimsUsageJsonItem {
    #[serde(default, deserialize_with = "text")]
    iccid: String,
    #[serde(default, deserialize_with = "text")]
    msisdn: String,
    #[serde(default, deserialize_with = "text")]
    month_to_date_bytes_up: String,
    #[serde(default, deserialize_with = "text")]
    month_to_date_bytes_down: String,
    #[serde(default, deserialize_with = "text")]
    month_to_date_voice_up: String,
    #[serde(default, deserialize_with = "text")]
    month_to_date_voice_down: String,
    #[serde(default, deserialize_with = "text")]
    month_to_date_sms_up: String,
    #[serde(default, deserialize_with = "text")]
    month_to_date_sms_down: String,
    #[serde(default, deserialize_with = "text")]
    last_seen: String,
    #[serde(default, deserialize_with = "nullable")]
    in_current_session: bool,
}

pub fn encode_sims_list_query(filter: &SimsListFilter) -> String {
    let mut query = Query::new();
    query.push_opt("status", filter.status.as_deref());
    query.push_opt(
        AccountNumber::FIELD,
        filter.account_number.as_ref().map(AccountNumber::as_str),
    );
    query.push_opt("tariff_name", filter.tariff_name.as_deref());
    query.push_opt("mno", filter.mno.as_deref());
    query.push_opt("custom_field1", filter.custom_field1.as_deref());
    query.append_to(Endpoint::SimsList.template())
}

pub fn encode_sim_usage_query(request: &SimUsageQuery) -> String {
    let iccids = request.iccids.iter().map(Iccid::as_str).collect::<Vec<_>>();

    let mut query = Query::new();
    query.push_list(Iccid::FIELD, &iccids);
    query.push_positive("page", request.page.page);
    query.push_positive("limit", request.page.limit);
    query.append_to(Endpoint::SimsUsage.template())
}

/// The ICCID goes into the path and is repeated as a query parameter, which
/// the SimPro API requires for this resource.
pub fn sim_location_path(iccid: &Iccid) -> String {
    let path = Endpoint::SimLocation.render(&[(Iccid::FIELD, iccid.as_str())]);
    let mut query = Query::new();
    query.push(Iccid::FIELD, iccid.as_str());
    query.append_to(&path)
}

pub fn decode_sims_list_json_response(json: &[u8]) -> Result<SimsListResponse, TransportError> {
    let parsed: SimsListJsonResponse = serde_json::from_slice(json)?;
    Ok(SimsListResponse {
        sims: parsed
            .sims
            .into_iter()
            .map(|item| SimsListItem {
                id: item.id,
                iccid: item.iccid,
                eid: item.eid,
                msisdn: item.msisdn,
                imsi: item.imsi,
                status: item.status,
                workflow_status: item.workflow_status,
            })
            .collect(),
        sim_count: parsed.sim_count,
    })
}

pub fn decode_sim_location_json_response(
    json: &[u8],
) -> Result<Vec<SimLocation>, TransportError> {
    let parsed: Option<Vec<SimLocationJsonItem>> = serde_json::from_slice(json)?;
    Ok(parsed
        .unwrap_or_default()
        .into_iter()
        .map(|item| SimLocation {
            latitude: item.latitude,
            longitude: item.longitude,
            postal_code: item.postal_code,
            timestamp: item.timestamp,
        })
        .collect())
}

pub fn decode_sim_usage_json_response(json: &[u8]) -> Result<SimsUsageResponse, TransportError> {
    let parsed: SimsUsageJsonResponse = serde_json::from_slice(json)?;
    Ok(SimsUsageResponse {
        sims: parsed
            .sims
            .into_iter()
            .map(|item| SimsUsageItem {
                iccid: item.iccid,
                msisdn: item.msisdn,
                month_to_date_bytes_up: item.month_to_date_bytes_up,
                month_to_date_bytes_down: item.month_to_date_bytes_down,
                month_to_date_voice_up: item.month_to_date_voice_up,
                month_to_date_voice_down: item.month_to_date_voice_down,
                month_to_date_sms_up: item.month_to_date_sms_up,
                month_to_date_sms_down: item.month_to_date_sms_down,
                last_seen: item.last_seen,
                in_current_session: item.in_current_session,
            })
            .collect(),
    })
}
