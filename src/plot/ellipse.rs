use nalgebra as na;
use serde::{Deserialize, Serialize};

use super::backend::{PlotBackend, Rgba};
use crate::geom::ellipse::{confidence_scale, ellipse_parameters, EllipseGeometry};

/// Figure size used when no axes are given to draw on.
pub const DEFAULT_FIGSIZE: (f64, f64) = (5.0, 5.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EllipseStyle {
    /// Factor applied to the one-standard-deviation semi-axes
    pub scale: f64,
    pub face_color: Option<Rgba>,
    pub edge_color: Option<Rgba>,
    pub alpha: Option<f64>,
    pub line_width: Option<f64>,
}

impl Default for EllipseStyle {
    fn default() -> Self {
        Self {
            scale: 1.0,
            face_color: None,
            edge_color: None,
            alpha: None,
            line_width: None,
        }
    }
}

impl EllipseStyle {
    /// Scales the ellipse to enclose probability mass `p`.
    pub fn with_confidence(self, p: f64) -> Result<Self, crate::Error> {
        Ok(Self {
            scale: confidence_scale(p)?,
            ..self
        })
    }
}

/// Filled ellipse shape as handed to the backend. `width` and `height` are full axis lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipsePatch {
    pub center: [f64; 2],
    pub width: f64,
    pub height: f64,
    pub angle_degrees: f64,
    pub face_color: Option<Rgba>,
    pub edge_color: Option<Rgba>,
    pub alpha: Option<f64>,
    pub line_width: Option<f64>,
}

impl EllipsePatch {
    pub fn from_geometry(
        geometry: &EllipseGeometry<f64>,
        style: &EllipseStyle,
    ) -> Result<Self, crate::Error> {
        let scaled = geometry.scaled(style.scale)?;
        Ok(Self {
            center: [scaled.center.x, scaled.center.y],
            width: scaled.width(),
            height: scaled.height(),
            angle_degrees: scaled.rotation_degrees,
            face_color: style.face_color,
            edge_color: style.edge_color,
            alpha: style.alpha,
            line_width: style.line_width,
        })
    }
}

/// Draws the covariance ellipse of `cov` centered at `mu` (the origin if absent) together with a
/// marker at its center. Creates a new figure when `ax` is `None`.
///
/// Returns the axes drawn on.
pub fn plot_cov_ellipse<B: PlotBackend>(
    backend: &mut B,
    cov: &na::DMatrix<f64>,
    mu: Option<&na::DVector<f64>>,
    ax: Option<B::Axes>,
    style: &EllipseStyle,
) -> Result<B::Axes, crate::Error> {
    let geometry = ellipse_parameters(cov, mu)?;
    let patch = EllipsePatch::from_geometry(&geometry, style)?;

    let ax = match ax {
        Some(ax) => ax,
        None => backend.new_axes(DEFAULT_FIGSIZE),
    };

    log::debug!("Drawing covariance ellipse {:?} on {:?}", patch, ax);
    backend.scatter(&ax, patch.center[0], patch.center[1], style.face_color);
    backend.add_ellipse(&ax, &patch);

    Ok(ax)
}
