pub mod constants;
pub mod extract;
pub mod http;
pub mod logging;
pub mod output;
pub mod processor;
pub mod types;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;
