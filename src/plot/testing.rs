//! Backend that records draw commands instead of drawing.

use super::backend::{Annotation, Bbox, ColorbarOptions, LineStyle, PlotBackend, Rect, Rgba};
use super::ellipse::EllipsePatch;
use super::style::RcParams;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Command {
    AddAxes { parent: usize, rect: Rect },
    NewAxes { figsize: (f64, f64) },
    Colorbar { mappable: String, cax: usize, options: ColorbarOptions },
    Text { ax: usize, annotation: Annotation },
    XLim { ax: usize, lim: (f64, f64) },
    YLim { ax: usize, lim: (f64, f64) },
    EqualAspect { ax: usize },
    Line { ax: usize, xs: Vec<f64>, ys: Vec<f64>, style: LineStyle },
    Scatter { ax: usize, x: f64, y: f64, color: Option<Rgba> },
    Ellipse { ax: usize, patch: EllipsePatch },
    Rc { params: RcParams },
}

/// Axes are indices into `positions`.
#[derive(Debug, Default)]
pub(crate) struct RecordingBackend {
    pub positions: Vec<Bbox>,
    pub commands: Vec<Command>,
}

impl RecordingBackend {
    pub fn with_axes(positions: &[Bbox]) -> Self {
        Self {
            positions: positions.to_vec(),
            commands: Vec::new(),
        }
    }

    fn push_axes(&mut self, bbox: Bbox) -> usize {
        self.positions.push(bbox);
        self.positions.len() - 1
    }
}

impl PlotBackend for RecordingBackend {
    type Axes = usize;
    type Mappable = String;
    type Colorbar = usize;

    fn axes_position(&self, ax: &usize) -> Bbox {
        self.positions[*ax]
    }

    fn add_axes(&mut self, ax: &usize, rect: Rect) -> usize {
        self.commands.push(Command::AddAxes { parent: *ax, rect });
        self.push_axes(Bbox {
            x0: rect.left,
            y0: rect.bottom,
            x1: rect.left + rect.width,
            y1: rect.bottom + rect.height,
        })
    }

    fn new_axes(&mut self, figsize: (f64, f64)) -> usize {
        self.commands.push(Command::NewAxes { figsize });
        self.push_axes(Bbox {
            x0: 0.125,
            y0: 0.11,
            x1: 0.9,
            y1: 0.88,
        })
    }

    fn colorbar(&mut self, mappable: &String, cax: &usize, options: &ColorbarOptions) -> usize {
        self.commands.push(Command::Colorbar {
            mappable: mappable.clone(),
            cax: *cax,
            options: options.clone(),
        });
        self.commands.len() - 1
    }

    fn text(&mut self, ax: &usize, annotation: &Annotation) {
        self.commands.push(Command::Text {
            ax: *ax,
            annotation: annotation.clone(),
        });
    }

    fn set_xlim(&mut self, ax: &usize, lim: (f64, f64)) {
        self.commands.push(Command::XLim { ax: *ax, lim });
    }

    fn set_ylim(&mut self, ax: &usize, lim: (f64, f64)) {
        self.commands.push(Command::YLim { ax: *ax, lim });
    }

    fn set_equal_aspect(&mut self, ax: &usize) {
        self.commands.push(Command::EqualAspect { ax: *ax });
    }

    fn line(&mut self, ax: &usize, xs: &[f64], ys: &[f64], style: &LineStyle) {
        self.commands.push(Command::Line {
            ax: *ax,
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            style: *style,
        });
    }

    fn scatter(&mut self, ax: &usize, x: f64, y: f64, color: Option<Rgba>) {
        self.commands.push(Command::Scatter { ax: *ax, x, y, color });
    }

    fn add_ellipse(&mut self, ax: &usize, patch: &EllipsePatch) {
        self.commands.push(Command::Ellipse {
            ax: *ax,
            patch: *patch,
        });
    }

    fn update_rc(&mut self, params: &RcParams) {
        self.commands.push(Command::Rc {
            params: params.clone(),
        });
    }
}
