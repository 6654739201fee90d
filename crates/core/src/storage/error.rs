use thiserror::Error;

/// Errors reported by a record store or a settings store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_not_found_display() {
        let error = StoreError::NotFound {
            entity_type: "Customer",
            id: "customerRecordZone/abc-123".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Customer not found: customerRecordZone/abc-123"
        );
    }

    #[test]
    fn test_store_error_already_exists_display() {
        let error = StoreError::AlreadyExists {
            entity_type: "Zone",
            id: "customerRecordZone".to_string(),
        };
        assert_eq!(error.to_string(), "Zone already exists: customerRecordZone");
    }

    #[test]
    fn test_store_error_connection_failed_display() {
        let error = StoreError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }

    #[test]
    fn test_store_error_query_failed_display() {
        let error = StoreError::QueryFailed("Throughput exceeded, please retry".to_string());
        assert_eq!(
            error.to_string(),
            "Query failed: Throughput exceeded, please retry"
        );
    }

    #[test]
    fn test_store_error_serialization_display() {
        let error = StoreError::Serialization("malformed cursor".to_string());
        assert_eq!(error.to_string(), "Serialization error: malformed cursor");
    }

    #[test]
    fn test_store_error_invalid_data_display() {
        let error = StoreError::InvalidData("unexpected record type".to_string());
        assert_eq!(error.to_string(), "Invalid data: unexpected record type");
    }
}
