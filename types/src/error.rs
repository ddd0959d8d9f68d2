use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PigError {
    #[error("Unknown player type '{0}': must be 'human' or 'computer'")]
    InvalidPlayerType(String),
}
