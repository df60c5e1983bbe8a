//! Runtime settings for the track store.
//!
//! Settings come from environment variables, an optional TOML file and
//! struct defaults, in that order of precedence.

mod load;
mod schema;

pub use load::resolve_config_path;
pub use schema::*;
