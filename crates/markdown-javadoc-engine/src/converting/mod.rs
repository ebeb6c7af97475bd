pub mod extract;
pub mod markup;
pub mod settings;
pub mod transform;

pub use extract::{Conversion, convert_source, find_blocks};
pub use settings::ConvertSettings;
pub use transform::transform_block;
