use itertools::Itertools;

use super::backend::Rgba;

/// A colormap with 256 entries.
pub trait Colormap {
    fn color(&self, index: u8) -> Rgba;
}

impl<F: Fn(u8) -> Rgba> Colormap for F {
    fn color(&self, index: u8) -> Rgba {
        self(index)
    }
}

/// Linear gradient between two colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearColormap {
    pub low: Rgba,
    pub high: Rgba,
}

impl Colormap for LinearColormap {
    fn color(&self, index: u8) -> Rgba {
        self.low.lerp(&self.high, f64::from(index) / 255.0)
    }
}

/// Colormap indices of `values` after min-max scaling, so that the smallest value maps to 0 and
/// the largest to 255. Constant input maps to 0.
///
/// Non-finite values don't take part in the scaling: NaN maps to 0 and infinities saturate to
/// either end of the colormap.
pub fn cmap_indices(values: &[f64]) -> Vec<u8> {
    let Some((min, max)) = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .minmax_by(|a, b| a.total_cmp(b))
        .into_option()
    else {
        return vec![0; values.len()];
    };

    let range = max - min;
    values
        .iter()
        .map(|v| {
            if range > 0.0 {
                (255.0 * (v - min) / range) as u8
            } else {
                0
            }
        })
        .collect()
}

/// Colors of `values` on `cmap`, spanning the entire colormap.
pub fn scale_values_to_cmap<C: Colormap + ?Sized>(values: &[f64], cmap: &C) -> Vec<Rgba> {
    cmap_indices(values)
        .into_iter()
        .map(|i| cmap.color(i))
        .collect()
}
