//! Transport layer for storefront API communication.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: the async HTTP client for API communication
//! - [`ApiResponse`]: the raw `{ok, data, meta, error}` response envelope
//! - [`Page`]: one page of a cursor-paginated listing
//! - [`ApiError`]: the normalized application-level error shape
//! - [`ClientError`]: unified error type for all API operations
//!
//! The envelope is decoded once here; everything above this layer works
//! with typed payloads and [`ClientError`].

mod errors;
mod http;
mod response;

pub use errors::ClientError;
pub use http::{HttpClient, CUSTOMER_TOKEN_HEADER, SDK_VERSION};
pub use response::{ApiError, ApiResponse, Page, PaginationMeta, PARSE_ERROR_CODE};
