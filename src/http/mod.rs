pub mod client;
pub mod fetch;
pub mod headers;

pub use client::build_http_client;
pub use fetch::fetch_page;
pub use headers::parse_headers;
