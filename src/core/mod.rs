pub mod brand;
pub mod dataset;
pub mod header;
pub mod scale;
pub mod types;

pub use brand::{BrandFamily, ColorMapping, brand_color, resolve_colors};
pub use dataset::{CellValue, Column, TabularDataset};
pub use header::{ChartHeader, parse_header};
pub use scale::LinearScale;
pub use types::{Margins, Viewport};
