use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid sign '{0}', expected '+' or '-'")]
    InvalidSign(String),

    #[error("Invalid amount '{0}', expected a whole number of minutes")]
    InvalidAmount(String),

    #[error("Invalid event '{0}', expected sign=, add=, value= or formatted=")]
    InvalidEvent(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
