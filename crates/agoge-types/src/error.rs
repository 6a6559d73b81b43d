use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgogeError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Parameter not registered: {key}")]
    MissingParameter { key: String },

    #[error("Parameter {key}={value:?} is not a valid {expected}")]
    InvalidParameter {
        key: String,
        value: String,
        expected: &'static str,
    },

    #[error("Grid index out of bounds: i={i}, j={j}, k={k}")]
    GridOutOfBounds { i: usize, j: usize, k: usize },

    #[error("Field array '{name}' has {len} entries, grid has {cells} cells")]
    FieldShape {
        name: &'static str,
        len: usize,
        cells: usize,
    },

    #[error("Potential solver failed: {0}")]
    SolverError(String),

    #[error("Unknown problem '{0}'")]
    UnknownProblem(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AgogeResult<T> = Result<T, AgogeError>;
