use super::backend::{LineStyle, PlotBackend};

pub const DEFAULT_SCATTER_LIMITS: (f64, f64) = (0.0, 1.0);

/// Gives both axes of `ax` the limits `lim`, equalizes the aspect ratio and draws the identity
/// line across the plot.
pub fn tighten_scatter_plot<B: PlotBackend>(
    backend: &mut B,
    ax: &B::Axes,
    lim: (f64, f64),
    line_style: &LineStyle,
) {
    log::debug!("Tightening scatter plot {:?} to {:?}", ax, lim);
    backend.set_xlim(ax, lim);
    backend.set_ylim(ax, lim);
    backend.set_equal_aspect(ax);

    let ends = [lim.0, lim.1];
    backend.line(ax, &ends, &ends, line_style);
}
