pub mod converting;
pub mod io;
pub mod models;
pub mod runner;

// Re-export key types for easier usage
pub use converting::{Conversion, ConvertSettings, convert_source, transform_block};
pub use io::*;
pub use models::{CandidateFile, CommentBlock};
pub use runner::*;
