use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoverlayError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Degenerate georeference transform (determinant {determinant:e})")]
    DegenerateTransform { determinant: f64 },

    #[error("Invalid georeference: {0}")]
    InvalidGeoreference(String),

    #[error("Invalid feature document: {0}")]
    InvalidFeatureDocument(String),

    #[error("Raster decode failure: {0}")]
    RasterDecode(#[from] image::ImageError),

    #[error("GeoTIFF tag read failure: {0}")]
    GeoTiffTags(#[from] tiff::TiffError),

    #[error("Document parse failure: {0}")]
    DocumentParse(#[from] serde_json::Error),

    #[error("No raster loaded")]
    NoRasterLoaded,
}

pub type Result<T> = std::result::Result<T, GeoverlayError>;
