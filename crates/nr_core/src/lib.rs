pub mod error;
pub mod types;

pub use error::{Error, Stage};
pub use types::{Article, Feed, OrderBy, QueryConfig};

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use super::{Article, Error, Feed, OrderBy, QueryConfig, Result};
}
