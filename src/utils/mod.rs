pub mod sampling;

pub use sampling::sample_ellipse_points;
