use crate::models::ModelErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimulationErrors {
    #[error("Model error: {0}")]
    Model(#[from] ModelErrors),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Chart rendering error: {0}")]
    Plot(String),

    #[error("Nothing to render: {0} is empty")]
    EmptySeries(&'static str),
}
