use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use crate::{adapters, model};

pub enum MockFailure {
    Service,
    Client,
}

pub struct MockClient {
    pub body: Vec<u8>,
    pub failure: Option<MockFailure>,
    // shared so callers can still observe the count after boxing the client
    pub calls: Arc<AtomicUsize>,
}

impl MockClient {
    pub fn returning(body: &[u8]) -> Self {
        Self {
            body: body.to_vec(),
            failure: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(failure: MockFailure) -> Self {
        Self {
            body: Vec::new(),
            failure: Some(failure),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl adapters::ObjectStore for MockClient {
    fn fetch_object(
        &self,
        _bucket: &str,
        key: &str,
    ) -> Result<Vec<u8>, model::error::FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.failure {
            Some(MockFailure::Service) => Err(model::error::FetchError::Service(format!(
                "failed to get_object: {}, service unavailable",
                key
            ))),
            Some(MockFailure::Client) => Err(model::error::FetchError::Client(format!(
                "failed to get_object: {}, connection refused",
                key
            ))),
            None => Ok(self.body.clone()),
        }
    }
}
