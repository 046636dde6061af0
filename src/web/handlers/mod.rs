//! HTML template rendering handlers.

mod climsoft_docs;
mod landing;

pub use climsoft_docs::{CLIMSOFT_ENDPOINTS, EndpointDoc, climsoft_docs_handler};
pub use landing::{ApiLink, landing_handler};
