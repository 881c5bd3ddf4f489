use generational_arena::Index;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("node not found in arena: {0:?}")]
    NodeNotFound(Index),

    #[error("tree depth {depth} exceeds configured limit {limit}")]
    DepthExceeded { depth: usize, limit: usize },

    #[error("config error: {message}")]
    Config { message: String },
}

pub type TreeResult<T> = Result<T, TreeError>;
