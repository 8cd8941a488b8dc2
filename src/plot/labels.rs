use serde::{Deserialize, Serialize};

use super::backend::{Annotation, HorizontalAlignment, PlotBackend, Rgba, VerticalAlignment};

/// Wraps `text` in a LaTeX bold command.
pub fn bold_text(text: &str) -> String {
    format!(r"\textbf{{{}}}", text)
}

pub fn bold_texts<S: AsRef<str>>(texts: &[S]) -> Vec<String> {
    texts.iter().map(|t| bold_text(t.as_ref())).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelCase {
    #[default]
    Lower,
    Upper,
}

/// The first `n` letters of the alphabet, at most 26.
pub fn alphabet_labels(n: usize, case: LabelCase) -> Vec<String> {
    let letters = match case {
        LabelCase::Lower => 'a'..='z',
        LabelCase::Upper => 'A'..='Z',
    };
    letters.take(n).map(String::from).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubplotLabelStyle {
    /// Offsets in axes-fraction coordinates
    pub x: f64,
    pub y: f64,
    pub ha: HorizontalAlignment,
    pub va: VerticalAlignment,
    pub size: f64,
    pub bold: bool,
    /// Case of the generated labels, unused when labels are given
    pub case: LabelCase,
    pub color: Option<Rgba>,
}

impl Default for SubplotLabelStyle {
    fn default() -> Self {
        Self {
            x: -0.15,
            y: 1.05,
            ha: HorizontalAlignment::Center,
            va: VerticalAlignment::Center,
            size: 15.0,
            bold: false,
            case: LabelCase::Lower,
            color: None,
        }
    }
}

/// Puts a label in the corner of each subplot, `a`, `b`, `c`, ... unless `labels` are given.
/// Surplus labels or axes are left alone.
pub fn apply_subplot_labels<B: PlotBackend>(
    backend: &mut B,
    axes: &[B::Axes],
    labels: Option<&[String]>,
    style: &SubplotLabelStyle,
) {
    let labels = match labels {
        Some(labels) => labels.to_vec(),
        None => alphabet_labels(axes.len(), style.case),
    };
    let labels = if style.bold {
        bold_texts(&labels)
    } else {
        labels
    };

    if labels.len() < axes.len() {
        log::debug!(
            "Only {} labels for {} subplots, leaving the rest unlabeled",
            labels.len(),
            axes.len()
        );
    }

    for (text, ax) in labels.into_iter().zip(axes) {
        let annotation = Annotation {
            x: style.x,
            y: style.y,
            text,
            ha: style.ha,
            va: style.va,
            size: style.size,
            color: style.color,
        };
        backend.text(ax, &annotation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::backend::Bbox;
    use crate::plot::testing::{Command, RecordingBackend};

    fn texts(backend: &RecordingBackend) -> Vec<(usize, String)> {
        backend
            .commands
            .iter()
            .filter_map(|c| match c {
                Command::Text { ax, annotation } => Some((*ax, annotation.text.clone())),
                _ => None,
            })
            .collect()
    }

    fn backend(n: usize) -> RecordingBackend {
        let bbox = Bbox {
            x0: 0.0,
            y0: 0.0,
            x1: 1.0,
            y1: 1.0,
        };
        RecordingBackend::with_axes(&vec![bbox; n])
    }

    #[test]
    fn test_bold() {
        assert_eq!(bold_text("a"), r"\textbf{a}");
        assert_eq!(bold_texts(&["x", "y"]), vec![r"\textbf{x}", r"\textbf{y}"]);
    }

    #[test]
    fn test_alphabet() {
        assert_eq!(alphabet_labels(3, LabelCase::Lower), vec!["a", "b", "c"]);
        assert_eq!(alphabet_labels(2, LabelCase::Upper), vec!["A", "B"]);
        assert_eq!(alphabet_labels(40, LabelCase::Lower).len(), 26);
    }

    #[test]
    fn test_default_labels() {
        let mut backend = backend(3);
        apply_subplot_labels(&mut backend, &[0, 1, 2], None, &SubplotLabelStyle::default());

        assert_eq!(
            texts(&backend),
            vec![(0, "a".into()), (1, "b".into()), (2, "c".into())]
        );
        match &backend.commands[0] {
            Command::Text { annotation, .. } => {
                assert_eq!((annotation.x, annotation.y), (-0.15, 1.05));
                assert_eq!(annotation.size, 15.0);
                assert_eq!(annotation.ha, HorizontalAlignment::Center);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_custom_bold_labels() {
        let mut backend = backend(2);
        let labels = vec!["(i)".to_string(), "(ii)".to_string(), "(iii)".to_string()];
        let style = SubplotLabelStyle {
            bold: true,
            ..Default::default()
        };

        apply_subplot_labels(&mut backend, &[0, 1], Some(&labels), &style);

        assert_eq!(
            texts(&backend),
            vec![(0, r"\textbf{(i)}".into()), (1, r"\textbf{(ii)}".into())]
        );
    }

    #[test]
    fn test_upper_case() {
        let mut backend = backend(2);
        let style = SubplotLabelStyle {
            case: LabelCase::Upper,
            ..Default::default()
        };
        apply_subplot_labels(&mut backend, &[1, 0], None, &style);

        assert_eq!(texts(&backend), vec![(1, "A".into()), (0, "B".into())]);
    }
}
