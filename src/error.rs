use thiserror::Error;

#[derive(Error, Debug)]
pub enum NameGenError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid variable name \"{0}\". For more information, try \"help set\".")]
    UnknownField(String),

    #[error("Invalid selection \"{0}\".")]
    Selection(String),

    #[error("Not enough survivors to breed: need at least 2, have {available}")]
    InsufficientSurvivors { available: usize },

    #[error("Invalid parent \"{0}\": crossover needs at least 2 characters")]
    InvalidParent(String),

    #[error("Gave up on {operation} after {attempts} attempts without a vowel")]
    GenerationExhausted {
        operation: &'static str,
        attempts: usize,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NameGenError>;
