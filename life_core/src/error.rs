use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifeError {
    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },

    #[error("row task failed: {0}")]
    RowTask(#[from] tokio::task::JoinError),
}
