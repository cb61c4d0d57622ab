//! Pluck - nested-value path resolution and companion data utilities

pub mod add;
pub mod camel_case;
pub mod chunk;
pub mod eq;
pub mod filter;
pub mod is_empty;
pub mod keys;
pub mod memoize;
pub mod path;
pub mod resolve;
pub mod to_number;
pub mod value;

pub use add::add;
pub use camel_case::camel_case;
pub use chunk::chunk;
pub use eq::eq;
pub use filter::filter;
pub use is_empty::is_empty;
pub use keys::keys;
pub use memoize::Memoized;
pub use path::{Key, PathError, PathInput};
pub use resolve::{resolve, resolve_or, Traversable};
pub use to_number::to_number;
pub use value::{PropKey, Record, Token, Value};
