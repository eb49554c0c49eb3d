pub mod affine;
pub mod error;
pub mod features;
pub mod image;
pub mod points;

pub use affine::LayerAffine;
pub use error::{ConvertError, Result};
pub use features::Features;
pub use image::{image_from_image_layer, image_layer_from_image, ImageLayer};
pub use points::{points_layer_from_pointset, pointset_from_points_layer, PointsLayer};
