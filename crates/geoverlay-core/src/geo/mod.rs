pub mod transform;

pub use transform::{AffineGeoTransform, GeoBounds, GeoreferenceTags};
