pub mod args;
pub mod catalogs;
pub mod error;
pub mod ffi;
pub mod scanner;
pub mod schema;
pub mod types;

pub use args::Args;
pub use catalogs::PARSER_VERSION;
pub use error::{ArgError, SchemaError};
pub use ffi::{compile_to_json, parse_to_json};
pub use scanner::scan;
pub use schema::compile;
pub use types::*;
