use std::io::Write;

use tracing::{info, span, Level};

use crate::{adapters, model};

pub struct ObjectFetcher {
    pub client: Box<dyn adapters::ObjectStore>,
    pub locator: model::object::ObjectLocator,
}

impl ObjectFetcher {
    pub fn new(
        client: Box<dyn adapters::ObjectStore>,
        locator: model::object::ObjectLocator,
    ) -> Self {
        Self { client, locator }
    }

    /// Fetches the object once and writes its body as one newline-terminated
    /// line. Nothing is written unless the whole body was fetched.
    pub fn fetch_and_display<W: Write>(
        &self,
        out: &mut W,
    ) -> Result<(), model::error::FetchError> {
        let span = span!(Level::INFO, "fetch_and_display", context = "fetch");
        let _e = span.enter();
        info!(bucket=%self.locator.bucket, key=%self.locator.key, "called");

        let body = self
            .client
            .fetch_object(&self.locator.bucket, &self.locator.key)?;

        // each byte rendered as a character, the way the object is expected
        // to be plain text
        let mut rendered = String::with_capacity(body.len());
        for byte in &body {
            rendered.push(*byte as char);
        }

        writeln!(out, "{}", rendered).map_err(|err| {
            model::error::FetchError::Client(format!(
                "failed to write output: {}, {}",
                self.locator.key, err
            ))
        })?;

        info!(bytes = body.len(), "displayed");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::adapters::mock::{MockClient, MockFailure};

    fn dummy_locator() -> model::object::ObjectLocator {
        model::object::ObjectLocator::new("dummy-bucket", "dummy-key")
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "broken pipe",
            ))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_fetch_and_display() {
        let cases = vec![
            (vec![72, 105], "Hi\n"),
            (vec![], "\n"),
            (b"text content".to_vec(), "text content\n"),
        ];

        for (body, expected) in cases {
            let client = MockClient::returning(&body);
            let fetcher = ObjectFetcher::new(Box::new(client), dummy_locator());

            let mut out = Vec::new();
            let result = fetcher.fetch_and_display(&mut out);

            assert!(result.is_ok(), "failed for case: {:?}", body);
            assert_eq!(
                String::from_utf8(out).unwrap(),
                expected,
                "failed for case: {:?}",
                body
            );
        }
    }

    #[test]
    fn test_fetch_and_display_fetches_once() {
        let client = MockClient::returning(b"Hi");
        let calls = client.calls.clone();
        let fetcher = ObjectFetcher::new(Box::new(client), dummy_locator());

        let mut out = Vec::new();
        fetcher.fetch_and_display(&mut out).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_fetch_and_display_service_failure() {
        let client = MockClient::failing(MockFailure::Service);
        let fetcher = ObjectFetcher::new(Box::new(client), dummy_locator());

        let mut out = Vec::new();
        let result = fetcher.fetch_and_display(&mut out);

        assert!(result.unwrap_err().is_service(), "expected service error");
        assert!(out.is_empty(), "expected no partial output");
    }

    #[test]
    fn test_fetch_and_display_client_failure() {
        let client = MockClient::failing(MockFailure::Client);
        let fetcher = ObjectFetcher::new(Box::new(client), dummy_locator());

        let mut out = Vec::new();
        let result = fetcher.fetch_and_display(&mut out);

        assert!(result.unwrap_err().is_client(), "expected client error");
        assert!(out.is_empty(), "expected no partial output");
    }

    #[test]
    fn test_fetch_and_display_write_failure() {
        let client = MockClient::returning(b"Hi");
        let fetcher = ObjectFetcher::new(Box::new(client), dummy_locator());

        let result = fetcher.fetch_and_display(&mut FailingWriter);

        assert!(result.unwrap_err().is_client(), "expected client error");
    }

    #[test]
    fn test_fetch_and_display_latin1_bytes() {
        // bytes above 0x7f render as their Latin-1 characters
        let client = MockClient::returning(&[72, 233]);
        let fetcher = ObjectFetcher::new(Box::new(client), dummy_locator());

        let mut out = Vec::new();
        fetcher.fetch_and_display(&mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Hé\n");
    }
}
