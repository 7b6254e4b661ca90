pub mod error;
pub mod query;
pub mod root;
pub mod tools;

pub use error::HttpError;
pub use query::{AddressResponse, HistoryParams, LookupParams, QueryPairs, QueryResponse};
pub use root::RootResponse;
pub use tools::{ValidateIpRequest, ValidateIpResponse};
