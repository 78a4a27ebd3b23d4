pub mod client;
pub mod http;

pub use client::{ApiClient, ApiRequest, ApiResponse, TransportError};
pub use http::ReqwestApiClient;
