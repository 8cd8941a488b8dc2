use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use super::ellipse::EllipsePatch;
use super::style::RcParams;

/// RGBA color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba(pub f64, pub f64, pub f64, pub f64);

impl Rgba {
    pub const BLACK: Self = Self(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self(1.0, 1.0, 1.0, 1.0);

    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self(r, g, b, 1.0)
    }

    /// Linear interpolation towards `other`, `t` in `[0, 1]`.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self(
            mix(self.0, other.0),
            mix(self.1, other.1),
            mix(self.2, other.2),
            mix(self.3, other.3),
        )
    }
}

/// Corners of an axes in figure coordinates, `(x0, y0)` lower left and `(x1, y1)` upper right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bbox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Bbox {
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }
}

/// `[left, bottom, width, height]` rectangle in figure coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl From<Rect> for [f64; 4] {
    fn from(r: Rect) -> Self {
        [r.left, r.bottom, r.width, r.height]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlignment {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlignment {
    Top,
    #[default]
    Center,
    Bottom,
    Baseline,
}

/// Text placed in axes-fraction coordinates, `(0, 0)` lower left and `(1, 1)` upper right of
/// the axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub ha: HorizontalAlignment,
    pub va: VerticalAlignment,
    pub size: f64,
    pub color: Option<Rgba>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineDash {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    pub color: Option<Rgba>,
    pub width: Option<f64>,
    pub dash: LineDash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColorbarOptions {
    pub label: Option<String>,
    /// Derived from the placement side when not set
    pub orientation: Option<Orientation>,
}

/// The plotting library the helpers draw through. It owns figures and axes; the helpers only
/// compute geometry and forward draw commands.
pub trait PlotBackend {
    /// Handle to an axes
    type Axes: Clone + Debug;
    /// A colormapped artist a colorbar can be attached to
    type Mappable;
    type Colorbar;

    /// Position of `ax` in figure coordinates
    fn axes_position(&self, ax: &Self::Axes) -> Bbox;

    /// Adds a new axes to the figure owning `ax` at `rect`
    fn add_axes(&mut self, ax: &Self::Axes, rect: Rect) -> Self::Axes;

    /// Creates a new figure of `figsize` inches with a single axes
    fn new_axes(&mut self, figsize: (f64, f64)) -> Self::Axes;

    fn colorbar(
        &mut self,
        mappable: &Self::Mappable,
        cax: &Self::Axes,
        options: &ColorbarOptions,
    ) -> Self::Colorbar;

    fn text(&mut self, ax: &Self::Axes, annotation: &Annotation);

    fn set_xlim(&mut self, ax: &Self::Axes, lim: (f64, f64));

    fn set_ylim(&mut self, ax: &Self::Axes, lim: (f64, f64));

    fn set_equal_aspect(&mut self, ax: &Self::Axes);

    fn line(&mut self, ax: &Self::Axes, xs: &[f64], ys: &[f64], style: &LineStyle);

    fn scatter(&mut self, ax: &Self::Axes, x: f64, y: f64, color: Option<Rgba>);

    fn add_ellipse(&mut self, ax: &Self::Axes, patch: &EllipsePatch);

    /// Updates global style parameters
    fn update_rc(&mut self, params: &RcParams);
}
