//! Convenience helpers drawing through a [PlotBackend].

pub mod backend;
pub mod colorbar;
pub mod colormap;
pub mod ellipse;
pub mod labels;
pub mod scatter;
pub mod style;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::{
    Annotation, Bbox, ColorbarOptions, HorizontalAlignment, LineDash, LineStyle, Orientation,
    PlotBackend, Rect, Rgba, VerticalAlignment,
};
pub use colorbar::{
    append_cax_to_ax, append_colorbar_to_axis, colorbar_rect, ColorbarError, ColorbarPlacement,
    ColorbarSide,
};
pub use colormap::{cmap_indices, scale_values_to_cmap, Colormap, LinearColormap};
pub use ellipse::{plot_cov_ellipse, EllipsePatch, EllipseStyle};
pub use labels::{
    alphabet_labels, apply_subplot_labels, bold_text, bold_texts, LabelCase, SubplotLabelStyle,
};
pub use scatter::{tighten_scatter_plot, DEFAULT_SCATTER_LIMITS};
pub use style::{use_latex_style, use_style, RcParams, RcValue, StyleError};
