//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod endpoint;
mod query;
mod sims;
mod tariffs;
mod text;

pub use endpoint::Endpoint;
pub use query::encode_list;
pub use sims::{
    decode_sim_location_json_response, decode_sim_usage_json_response,
    decode_sims_list_json_response, encode_sim_usage_query, encode_sims_list_query,
    sim_location_path,
};
pub use tariffs::{decode_tariff_list_json_response, encode_tariff_list_query};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}
