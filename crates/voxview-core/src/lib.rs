pub mod error;
pub mod image;
pub mod metadata;
pub mod points;
pub mod spatial;

pub use error::{ImageError, Result};
pub use image::{Image, PixelElement, PixelType, ScalarType};
pub use metadata::{MetaValue, Metadata};
pub use points::PointSet;
pub use spatial::{Direction, Point, Spacing, Vector};
