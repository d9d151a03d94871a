use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

/// A consistent copy of the API key and API client identifier.
///
/// An empty value means the corresponding header is not sent.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialPair {
    api_key: String,
    api_client: String,
}

impl CredentialPair {
    pub fn new(api_key: impl Into<String>, api_client: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_client: api_client.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_client(&self) -> &str {
        &self.api_client
    }
}

impl fmt::Debug for CredentialPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialPair")
            .field("api_key", &redacted(&self.api_key))
            .field("api_client", &self.api_client)
            .finish()
    }
}

fn redacted(value: &str) -> &'static str {
    if value.is_empty() { "<empty>" } else { "<redacted>" }
}

/// Runtime-mutable SimPro credentials shared by every clone of a client.
///
/// The lock is held only while copying or overwriting the pair, so a request
/// in flight never blocks a credential update. Each request works from the
/// [`snapshot`](Credentials::snapshot) taken when it started.
#[derive(Default)]
pub struct Credentials {
    pair: Mutex<CredentialPair>,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_client: impl Into<String>) -> Self {
        Self {
            pair: Mutex::new(CredentialPair::new(api_key, api_client)),
        }
    }

    pub fn snapshot(&self) -> CredentialPair {
        self.lock().clone()
    }

    /// Replace the API key. An empty key disables the `x-api-key` header.
    pub fn set_api_key(&self, api_key: impl Into<String>) {
        let api_key = api_key.into();
        let api_key_set = !api_key.is_empty();
        self.lock().api_key = api_key;
        debug!(api_key_set, "SimPro API key updated");
    }

    /// Replace the API client identifier. An empty value disables the `x-api-client` header.
    pub fn set_api_client(&self, api_client: impl Into<String>) {
        let api_client = api_client.into();
        let api_client_set = !api_client.is_empty();
        self.lock().api_client = api_client;
        debug!(api_client_set, "SimPro API client updated");
    }

    /// Replace both values under a single lock acquisition.
    pub fn set(&self, api_key: impl Into<String>, api_client: impl Into<String>) {
        let pair = CredentialPair::new(api_key, api_client);
        let api_key_set = !pair.api_key.is_empty();
        let api_client_set = !pair.api_client.is_empty();
        *self.lock() = pair;
        debug!(api_key_set, api_client_set, "SimPro credentials updated");
    }

    // The pair is overwritten as a whole, so a poisoned lock still holds valid data.
    fn lock(&self) -> MutexGuard<'_, CredentialPair> {
        self.pair.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credentials").field(&self.snapshot()).finish()
    }
}
