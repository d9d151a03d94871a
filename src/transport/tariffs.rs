use serde::Deserialize;

use super::TransportError;
use super::endpoint::Endpoint;
use super::query::Query;
use super::text::{nullable, text};
use crate::domain::{
    AccountNumber, Mno, TariffBearer, TariffListFilter, TariffListItem, TariffListResponse,
};

#[derive(Debug, Clone, Deserialize)]
struct TariffJsonItem {
    #[serde(default, deserialize_with = "nullable")]
    id: i64,
    #[serde(default, deserialize_with = "text")]
    name: String,
    #[serde(default, deserialize_with = "text")]
    description: String,
    #[serde(default)]
    mno: Option<TransportMno>,
    #[serde(default, deserialize_with = "nullable")]
    contract_length: i64,
    #[serde(default, deserialize_with = "text")]
    customer_name: String,
    #[serde(default, deserialize_with = "text")]
    account_number: String,
    #[serde(default, deserialize_with = "nullable")]
    bearers: Vec<BearerJsonItem>,
}

#[derive(Debug, Clone, Deserialize)]
struct BearerJsonItem {
    #[serde(default, deserialize_with = "text")]
    name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TransportMno {
    Name(String),
    Detailed {
        #[serde(default)]
        id: Option<i64>,
        #[serde(default, deserialize_with = "text")]
        name: String,
    },
}

impl From<TransportMno> for Mno {
    fn from(value: TransportMno) -> Self {
        match value {
            TransportMno::Name(name) => Mno { id: None, name },
            TransportMno::Detailed { id, name } => Mno { id, name },
        }
    }
}

pub fn encode_tariff_list_query(filter: &TariffListFilter) -> String {
    let account_numbers = filter
        .account_numbers
        .iter()
        .map(AccountNumber::as_str)
        .collect::<Vec<_>>();

    let mut query = Query::new();
    query.push_list("account_numbers", &account_numbers);
    query.push_positive("page", filter.page.page);
    query.push_positive("limit", filter.page.limit);
    query.append_to(Endpoint::TariffsList.template())
}

pub fn decode_tariff_list_json_response(json: &[u8]) -> Result<TariffListResponse, TransportError> {
    let parsed: Option<Vec<TariffJsonItem>> = serde_json::from_slice(json)?;
    Ok(parsed
        .unwrap_or_default()
        .into_iter()
        .map(|item| TariffListItem {
            id: item.id,
            name: item.name,
            description: item.description,
            mno: item.mno.map(Mno::from).unwrap_or_default(),
            contract_length: item.contract_length,
            customer_name: item.customer_name,
            account_number: item.account_number,
            bearers: item
                .bearers
                .into_iter()
                .map(|bearer| TariffBearer { name: bearer.name })
                .collect(),
        })
        .collect())
}
