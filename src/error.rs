use thiserror::Error;

/// Errors produced by this crate.
///
/// The estimator itself is total over its inputs; the only fallible
/// surface is writing a summary report to an output sink.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to write summary report: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
