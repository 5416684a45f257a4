use crate::model;

pub mod mock;
pub mod s3;

pub trait ObjectStore {
    fn fetch_object(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<Vec<u8>, model::error::FetchError>;
}
