use crate::math::conic;
use nalgebra as na;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EllipseParametersError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Geometry of the one-standard-deviation contour of a 2D Gaussian.
///
/// Angles are in degrees, measured counter-clockwise from the positive x-axis to the major axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipseGeometry<F: na::RealField + Copy> {
    /// Semi-major axis
    pub semi_major: F,
    /// Semi-minor axis
    pub semi_minor: F,
    /// Rotation of the major axis in degrees, within (-90, 90]
    pub rotation_degrees: F,
    /// Center of the ellipse
    pub center: na::Vector2<F>,
}

/// Computes the ellipse of the one-standard-deviation contour described by `cov`.
///
/// `cov` must be 2x2 and `center`, when given, must have two elements. Symmetry and positive
/// semi-definiteness are not checked; see [EllipseGeometry::from_covariance].
pub fn ellipse_parameters<F: na::RealField + Copy>(
    cov: &na::DMatrix<F>,
    center: Option<&na::DVector<F>>,
) -> Result<EllipseGeometry<F>, EllipseParametersError> {
    let (rows, cols) = cov.shape();
    if (rows, cols) != (2, 2) {
        return Err(EllipseParametersError::InvalidInput(format!(
            "covariance matrix must be 2x2, got {}x{}",
            rows, cols
        )));
    }

    let center = match center {
        Some(c) if c.len() != 2 => {
            return Err(EllipseParametersError::InvalidInput(format!(
                "center must have exactly 2 elements, got {}",
                c.len()
            )));
        }
        Some(c) => na::Vector2::new(c[0], c[1]),
        None => na::Vector2::zeros(),
    };

    let cov = cov.fixed_view::<2, 2>(0, 0).into_owned();
    Ok(EllipseGeometry::from_covariance(&cov, center))
}

/// Factor that scales the one-standard-deviation contour to the contour enclosing probability
/// mass `p` of a 2D Gaussian, i.e. the square root of the chi-squared quantile with two degrees of
/// freedom.
pub fn confidence_scale<F: na::RealField + Copy>(p: F) -> Result<F, EllipseParametersError> {
    if !(p >= F::zero() && p < F::one()) {
        let p: f64 = p.to_subset_unchecked();
        return Err(EllipseParametersError::InvalidInput(format!(
            "confidence level must lie in [0, 1), got {}",
            p
        )));
    }
    let two = na::convert::<f64, F>(2.0);
    Ok((-two * (F::one() - p).ln()).sqrt())
}

impl<F: na::RealField + Copy> EllipseGeometry<F> {
    /// Symmetric eigendecomposition of `cov`. The larger eigenvalue gives the semi-major axis and
    /// its eigenvector the rotation.
    ///
    /// Negative eigenvalues, which only occur for matrices that are not positive semi-definite
    /// or through round-off, are clamped to zero and logged.
    pub fn from_covariance(cov: &na::Matrix2<F>, center: na::Vector2<F>) -> Self {
        let eigen = na::SymmetricEigen::new(*cov);
        let values = eigen.eigenvalues;

        // nalgebra does not sort eigenvalues
        let (minor, major) = if values[0] <= values[1] {
            (0, 1)
        } else {
            (1, 0)
        };

        let axis = eigen.eigenvectors.column(major);

        Self {
            semi_major: clamped_sqrt(values[major]),
            semi_minor: clamped_sqrt(values[minor]),
            rotation_degrees: axis_angle_degrees(axis[0], axis[1]),
            center,
        }
    }

    /// Rotation of the major axis in radians
    pub fn rotation(&self) -> F {
        self.rotation_degrees * F::pi() / na::convert::<f64, F>(180.0)
    }

    /// Full length of the major axis
    pub fn width(&self) -> F {
        self.semi_major + self.semi_major
    }

    /// Full length of the minor axis
    pub fn height(&self) -> F {
        self.semi_minor + self.semi_minor
    }

    /// Scales both semi-axes by `k`, e.g. by a [confidence_scale] or a number of standard
    /// deviations.
    pub fn scaled(&self, k: F) -> Result<Self, EllipseParametersError> {
        if k < F::zero() {
            let k: f64 = k.to_subset_unchecked();
            return Err(EllipseParametersError::InvalidInput(format!(
                "scale factor must be non-negative, got {}",
                k
            )));
        }
        Ok(Self {
            semi_major: self.semi_major * k,
            semi_minor: self.semi_minor * k,
            ..*self
        })
    }

    /// Conic matrix $A_Q$ of the ellipse boundary.
    pub fn to_conic(&self) -> na::Matrix3<F> {
        conic::compute_matrix(
            self.semi_major,
            self.semi_minor,
            self.rotation(),
            self.center.x,
            self.center.y,
        )
    }
}

fn clamped_sqrt<F: na::RealField + Copy>(eigenvalue: F) -> F {
    if eigenvalue < F::zero() {
        log::warn!(
            "Clamping negative covariance eigenvalue {:?} to zero",
            eigenvalue
        );
        return F::zero();
    }
    eigenvalue.sqrt()
}

/// Angle of the axis line through `(x, y)`. The vector is flipped into the right half-plane
/// first so that `v` and `-v` give the same angle.
fn axis_angle_degrees<F: na::RealField + Copy>(x: F, y: F) -> F {
    let (x, y) = if x < F::zero() || (x == F::zero() && y < F::zero()) {
        (-x, -y)
    } else {
        (x, y)
    };
    y.atan2(x) * na::convert::<f64, F>(180.0) / F::pi()
}
