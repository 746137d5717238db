pub mod error;
pub mod source;
pub mod store;

pub use error::LoadError;
pub use source::{EmbeddedSource, FileSource, GlossarySource, HttpSource, parse_records};
pub use store::GlossaryStore;
