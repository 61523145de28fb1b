pub mod page_driver;
pub mod record_sink;
