use super::decode;
use crate::client::{SimProClient, SimProError};
use crate::domain::{
    Iccid, SimLocation, SimUsageQuery, SimsListFilter, SimsListResponse, SimsUsageResponse,
};
use crate::transport::{
    decode_sim_location_json_response, decode_sim_usage_json_response,
    decode_sims_list_json_response, encode_sim_usage_query, encode_sims_list_query,
    sim_location_path,
};

/// SIM endpoints of the SimPro v3 API.
#[derive(Debug, Clone, Copy)]
pub struct SimService<'a> {
    client: &'a SimProClient,
}

impl<'a> SimService<'a> {
    pub fn new(client: &'a SimProClient) -> Self {
        Self { client }
    }

    /// `GET /sims`: list SIMs matching `filter`.
    pub async fn get_sims(&self, filter: &SimsListFilter) -> Result<SimsListResponse, SimProError> {
        let path = encode_sims_list_query(filter);
        let body = self.client.get(&path).await?;
        decode(&path, &body, decode_sims_list_json_response)
    }

    /// `GET /sims/{iccid}/location`: last known locations of one SIM.
    ///
    /// A blank `iccid` fails with [`SimProError::Validation`] before any
    /// request is made.
    pub async fn get_sim_location(&self, iccid: &str) -> Result<Vec<SimLocation>, SimProError> {
        let iccid = Iccid::new(iccid)?;
        let path = sim_location_path(&iccid);
        let body = self.client.get(&path).await?;
        decode(&path, &body, decode_sim_location_json_response)
    }

    /// `GET /sims/usage`: month-to-date usage, optionally for selected ICCIDs.
    pub async fn get_sim_usage(
        &self,
        request: &SimUsageQuery,
    ) -> Result<SimsUsageResponse, SimProError> {
        let path = encode_sim_usage_query(request);
        let body = self.client.get(&path).await?;
        decode(&path, &body, decode_sim_usage_json_response)
    }
}
