pub mod decoder;
pub mod encoder;
pub mod error;
pub mod fetch;
pub mod thumbnail;
pub mod worker;
