pub mod covariance;

pub use covariance::{
    confidence_scale, ellipse_parameters, EllipseGeometry, EllipseParametersError,
};
