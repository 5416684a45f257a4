use crate::model::error::FetchError;

/// Identifies one remote object. Built once at startup, never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectLocator {
    pub bucket: String,
    pub key: String,
}

impl ObjectLocator {
    pub fn new(bucket: &str, key: &str) -> Self {
        Self {
            bucket: bucket.to_string(),
            key: key.to_string(),
        }
    }

    pub fn parse_uri(uri: &str) -> Result<Self, FetchError> {
        let rest = match uri.strip_prefix("s3://") {
            Some(rest) => rest,
            None => {
                return Err(FetchError::Client(format!(
                    "failed to parse scheme of: {}",
                    uri
                )));
            }
        };

        let (bucket, key) = match rest.split_once('/') {
            Some((bucket, key)) => (bucket, key),
            None => {
                return Err(FetchError::Client(format!(
                    "failed to parse key of: {}",
                    uri
                )));
            }
        };

        if bucket.is_empty() || key.is_empty() {
            return Err(FetchError::Client(format!(
                "failed to parse bucket and key of: {}",
                uri
            )));
        }

        Ok(Self::new(bucket, key))
    }
}
