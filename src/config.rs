//! Settings for the library walk and the Audible tooling.
//!
//! Values come from an optional TOML file and `KAUDIOBOOKS__*` environment
//! variables; command line flags are applied on top by the runtime.

mod load;
mod schema;

pub use schema::*;
