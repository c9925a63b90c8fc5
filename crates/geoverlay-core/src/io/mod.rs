pub mod geojson;
pub mod raster;
