use std::path::PathBuf;

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to load workbook `{}`: {reason}", .path.display())]
    Load { path: PathBuf, reason: String },

    #[error("column header `{header}` must look like `<Title> (<AxisLabel>)`")]
    HeaderFormat { header: String },

    #[error("failed to render chart: {0}")]
    Render(String),

    #[error("overlay failed for `{}`: {source}", .path.display())]
    ImageIo {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid style option `{field}`: {reason}")]
    Config { field: &'static str, reason: String },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
