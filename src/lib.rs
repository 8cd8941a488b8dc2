pub mod geom;
pub mod math;
pub mod plot;
pub mod utils;
mod error;

pub use error::Error;
pub use geom::ellipse::{
    confidence_scale, ellipse_parameters, EllipseGeometry, EllipseParametersError,
};
pub use plot::PlotBackend;
pub use utils::sample_ellipse_points;
