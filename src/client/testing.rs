use std::error::Error as StdError;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{BoxFuture, Credentials, HttpRequest, HttpResponse, HttpTransport, SimProClient};

#[derive(Debug, Clone)]
pub(crate) struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

#[derive(Debug)]
struct FakeTransportState {
    requests: Vec<HttpRequest>,
    response: Result<(u16, Vec<u8>), String>,
}

impl FakeTransport {
    pub(crate) fn new(response_status: u16, response_body: impl Into<Vec<u8>>) -> Self {
        Self::with_response(Ok((response_status, response_body.into())))
    }

    pub(crate) fn failing(message: impl Into<String>) -> Self {
        Self::with_response(Err(message.into()))
    }

    fn with_response(response: Result<(u16, Vec<u8>), String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeTransportState {
                requests: Vec::new(),
                response,
            })),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub(crate) fn last_request(&self) -> Option<HttpRequest> {
        self.state.lock().unwrap().requests.last().cloned()
    }

    pub(crate) fn last_url(&self) -> Option<String> {
        self.last_request().map(|request| request.url)
    }

    pub(crate) fn last_header(&self, name: &str) -> Option<String> {
        self.last_request().and_then(|request| {
            request
                .headers
                .into_iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value)
        })
    }
}

impl HttpTransport for FakeTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = {
                let mut state = self.state.lock().unwrap();
                state.requests.push(request);
                state.response.clone()
            };
            match response {
                Ok((status, body)) => Ok(HttpResponse { status, body }),
                Err(message) => Err(message.into()),
            }
        })
    }
}

pub(crate) fn make_client(
    api_key: &str,
    api_client: &str,
    transport: FakeTransport,
) -> SimProClient {
    SimProClient {
        base_url: "https://example.invalid/api/v3".to_owned(),
        timeout: Duration::from_secs(10),
        credentials: Arc::new(Credentials::new(api_key, api_client)),
        http: Arc::new(transport),
    }
}
