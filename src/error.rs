use thiserror::Error as ThisError;

pub type Result<T, E = BuildError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum BuildError {
    #[error("duplicate term {term:?}")]
    DuplicateTerm { term: String },
}
