use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use super::backend::{Bbox, ColorbarOptions, Orientation, PlotBackend, Rect};

#[derive(Debug, Error, PartialEq)]
pub enum ColorbarError {
    #[error("Colorbar must extend the 'x' or 'y' axis, got '{0}'")]
    UnknownSide(String),
}

/// Which extent of the host axes the colorbar extends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorbarSide {
    /// Vertical bar to the right of the axes
    #[default]
    X,
    /// Horizontal bar above the axes
    Y,
}

impl ColorbarSide {
    pub fn orientation(&self) -> Orientation {
        match self {
            ColorbarSide::X => Orientation::Vertical,
            ColorbarSide::Y => Orientation::Horizontal,
        }
    }
}

impl FromStr for ColorbarSide {
    type Err = ColorbarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(ColorbarSide::X),
            "y" => Ok(ColorbarSide::Y),
            other => Err(ColorbarError::UnknownSide(other.to_owned())),
        }
    }
}

/// Placement of a colorbar next to its host axes. `spacing` and `width` are fractions of the
/// host's width for [ColorbarSide::X] and of its height for [ColorbarSide::Y].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorbarPlacement {
    pub spacing: f64,
    pub width: f64,
    pub side: ColorbarSide,
}

impl Default for ColorbarPlacement {
    fn default() -> Self {
        Self {
            spacing: 0.05,
            width: 0.05,
            side: ColorbarSide::X,
        }
    }
}

/// Rectangle of a colorbar axes spanning the full height (or width) of `bbox`.
pub fn colorbar_rect(bbox: &Bbox, placement: &ColorbarPlacement) -> Rect {
    let (w, h) = (bbox.width(), bbox.height());
    match placement.side {
        ColorbarSide::X => Rect {
            left: bbox.x1 + placement.spacing * w,
            bottom: bbox.y0,
            width: placement.width * w,
            height: h,
        },
        ColorbarSide::Y => Rect {
            left: bbox.x0,
            bottom: bbox.y1 + placement.spacing * h,
            width: w,
            height: placement.width * h,
        },
    }
}

/// Adds a colorbar axes next to `ax`.
pub fn append_cax_to_ax<B: PlotBackend>(
    backend: &mut B,
    ax: &B::Axes,
    placement: &ColorbarPlacement,
) -> B::Axes {
    let rect = colorbar_rect(&backend.axes_position(ax), placement);
    log::debug!("Appending colorbar axes at {:?} to {:?}", rect, ax);
    backend.add_axes(ax, rect)
}

/// Adds a colorbar for `mappable` next to `ax`, matching its height (or width). The orientation
/// follows the placement side unless `options` sets one.
pub fn append_colorbar_to_axis<B: PlotBackend>(
    backend: &mut B,
    ax: &B::Axes,
    mappable: &B::Mappable,
    placement: &ColorbarPlacement,
    options: &ColorbarOptions,
) -> (B::Colorbar, B::Axes) {
    let cax = append_cax_to_ax(backend, ax, placement);
    let options = ColorbarOptions {
        orientation: options
            .orientation
            .or(Some(placement.side.orientation())),
        ..options.clone()
    };
    let cb = backend.colorbar(mappable, &cax, &options);
    (cb, cax)
}
