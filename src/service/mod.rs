//! Resource services: one stateless façade per SimPro resource family.
//!
//! A service borrows a [`SimProClient`](crate::SimProClient), builds the path
//! and query for each call, delegates to the client, and decodes the JSON body.

mod sims;
mod tariffs;

pub use sims::SimService;
pub use tariffs::TariffService;

use crate::client::SimProError;
use crate::transport::TransportError;

fn decode<T>(
    path: &str,
    body: &[u8],
    decoder: fn(&[u8]) -> Result<T, TransportError>,
) -> Result<T, SimProError> {
    decoder(body).map_err(|err| {
        tracing::debug!(endpoint = path, error = %err, "failed to decode SimPro response");
        SimProError::Decoding {
            endpoint: path.to_owned(),
            source: Box::new(err),
        }
    })
}
