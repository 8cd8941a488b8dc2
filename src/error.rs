use crate::geom::ellipse::EllipseParametersError;
use crate::plot::{ColorbarError, StyleError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    EllipseParameters(#[from] EllipseParametersError),

    #[error(transparent)]
    Colorbar(#[from] ColorbarError),

    #[error(transparent)]
    Style(#[from] StyleError),

    #[error("Unknown error: {0}")]
    Unknown(#[from] anyhow::Error),
}
