pub mod delimited;
pub mod json;
