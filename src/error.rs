use thiserror::Error;

#[derive(Error, Debug)]
pub enum FamilyError {
    /// Invalid configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Growing a family's reference store could not be satisfied. Fatal at
    /// the process boundary; never retried.
    #[error("allocation failure growing family storage by {0} slots")]
    Allocation(usize),

    /// A random word was requested from a family holding no words.
    #[error("family has no words to sample")]
    EmptyFamily,

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
