//! Envelope for collection responses.

use serde::Serialize;

/// Wraps a collection as `{"data": [...]}`.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: Vec<T>,
}

impl<T> DataResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> FromIterator<T> for DataResponse<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_under_data_key() {
        let response: DataResponse<i32> = vec![1, 2].into_iter().collect();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({ "data": [1, 2] }));
    }

    #[test]
    fn test_empty_collection_is_an_empty_array() {
        let json = serde_json::to_value(DataResponse::<i32>::new(Vec::new())).unwrap();
        assert_eq!(json, serde_json::json!({ "data": [] }));
    }
}
