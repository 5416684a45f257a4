use crate::{adapters, model, util};

impl adapters::ObjectStore for aws_sdk_s3::Client {
    fn fetch_object(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<Vec<u8>, model::error::FetchError> {
        let req = self.get_object().bucket(bucket).key(key);

        let o = match util::poll::poll_until_ready(req.send()) {
            Err(err) => {
                // a populated service error means the store itself rejected or
                // failed the request; everything else is local dispatch/transport
                if err.as_service_error().is_some() {
                    return Err(model::error::FetchError::Service(format!(
                        "failed to get_object: {}, {}",
                        key, err
                    )));
                }

                return Err(model::error::FetchError::Client(format!(
                    "failed to get_object: {}, {}",
                    key, err
                )));
            }
            Ok(o) => o,
        };

        // collect consumes the body stream; on failure the stream is dropped
        // here, so the underlying connection is released on every path
        let bytes = util::poll::poll_until_ready(o.body.collect()).map_err(|err| {
            model::error::FetchError::Client(format!("failed to collect body: {}, {}", key, err))
        })?;

        Ok(bytes.into_bytes().to_vec())
    }
}
