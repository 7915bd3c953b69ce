//! Request and response data model for the RASFF Window search API.

pub mod request;
pub mod response;

pub use request::{build_request_body, Pagination, SearchRequest};
pub use response::{CodeDescription, Country, Notification, SearchResult};
