use crate::geom::ellipse::EllipseGeometry;
use nalgebra as na;

/// Points on the boundary of `ellipse`, evenly spaced in the parametric angle and starting at the
/// positive end of the major axis. Useful for backends that can only draw polylines.
pub fn sample_ellipse_points<F: na::RealField + Copy>(
    ellipse: &EllipseGeometry<F>,
    num_points: usize,
) -> Vec<na::Point2<F>> {
    let transform = na::Isometry2::new(ellipse.center, ellipse.rotation());
    let step = F::two_pi() / na::convert::<f64, F>(num_points as f64);

    (0..num_points)
        .map(|i| {
            let t = step * na::convert::<f64, F>(i as f64);
            let local = na::Point2::new(ellipse.semi_major * t.cos(), ellipse.semi_minor * t.sin());
            transform.transform_point(&local)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::conic;
    use approx::assert_relative_eq;

    fn geometry() -> EllipseGeometry<f64> {
        let cov = na::Matrix2::new(3.0, 1.2, 1.2, 1.0);
        EllipseGeometry::from_covariance(&cov, na::Vector2::new(0.5, -4.0))
    }

    #[test]
    fn test_points_lie_on_boundary() {
        let ellipse = geometry();
        let conic = ellipse.to_conic();
        let points = sample_ellipse_points(&ellipse, 64);

        assert_eq!(points.len(), 64);
        for p in &points {
            assert_relative_eq!(conic::evaluate(&conic, p), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_first_point_is_major_vertex() {
        let ellipse = geometry();
        let first = sample_ellipse_points(&ellipse, 8)[0];

        let distance = (first.coords - ellipse.center).norm();
        assert_relative_eq!(distance, ellipse.semi_major, epsilon = 1e-12);
    }

    #[test]
    fn test_no_points() {
        assert!(sample_ellipse_points(&geometry(), 0).is_empty());
    }
}
