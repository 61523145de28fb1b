pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod extract;
pub mod ports;
pub mod scrape;
pub mod selectors;

#[cfg(test)]
pub mod test_helpers;
