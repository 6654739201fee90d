//! DynamoDB storage backend.
//!
//! Stores every zone in one table using `aws-sdk-dynamodb`. The table must
//! already exist with string `PK` and `SK` keys.

mod conversions;
mod error;
mod keys;
mod store;

pub use store::DynamoDbRecordStore;
