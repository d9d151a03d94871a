use super::decode;
use crate::client::{SimProClient, SimProError};
use crate::domain::{TariffListFilter, TariffListResponse};
use crate::transport::{decode_tariff_list_json_response, encode_tariff_list_query};

/// Tariff endpoints of the SimPro v3 API.
#[derive(Debug, Clone, Copy)]
pub struct TariffService<'a> {
    client: &'a SimProClient,
}

impl<'a> TariffService<'a> {
    pub fn new(client: &'a SimProClient) -> Self {
        Self { client }
    }

    /// `GET /tariffs`: tariffs, optionally restricted to some billing accounts.
    pub async fn get_tariffs(
        &self,
        filter: &TariffListFilter,
    ) -> Result<TariffListResponse, SimProError> {
        let path = encode_tariff_list_query(filter);
        let body = self.client.get(&path).await?;
        decode(&path, &body, decode_tariff_list_json_response)
    }
}
