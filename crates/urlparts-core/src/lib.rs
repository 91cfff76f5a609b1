pub mod config;
pub mod logging;

pub mod decompose;
pub mod error;
pub mod pipeline;
pub mod record;
pub mod sink;
pub mod source;
pub mod transform;

pub use decompose::{decompose, DecomposedUrl};
pub use error::BatchError;
pub use record::{InputRecord, OutputRecord, QueryParam};
