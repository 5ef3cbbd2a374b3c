mod accessors;
mod adapter;
mod as_value;
mod attrs;
mod bound_arg;
mod connection;
mod decode_type;
mod dialect;
mod error;
mod field_config;
mod field_view;
mod parse;
mod persister;
mod sql_type;
mod statement;
mod table_config;
mod util;
mod value;

pub use ::anyhow::Context;
pub use accessors::*;
pub use adapter::*;
pub use as_value::*;
pub use attrs::*;
pub use bound_arg::*;
pub use connection::*;
pub use decode_type::*;
pub use dialect::*;
pub use error::*;
pub use field_config::*;
pub use field_view::*;
pub use parse::*;
pub use persister::*;
pub use sql_type::*;
pub use statement::*;
pub use table_config::*;
pub use util::*;
pub use value::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
