use thiserror::Error;

pub type TpResult<T> = Result<T, TpError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TpError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Unknown provider: {id}")]
    UnknownProvider { id: String },
}
