mod serde;

pub mod constants;
pub mod extractor;
pub mod feature;
pub mod geometry;
pub mod snapshot;


pub use constants::*;
pub use extractor::*;
pub use feature::*;
pub use geometry::*;
pub use snapshot::*;
