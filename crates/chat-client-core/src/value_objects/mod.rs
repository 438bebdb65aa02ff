//! Value objects - identifiers shared across the client

mod snowflake;

pub use snowflake::{Snowflake, SnowflakeParseError};
