use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("j5-bus: Connection error : {}", message)]
    Connection { message: String },
    #[error("j5-bus: Other: {:?}", .0)]
    Other(#[from] anyhow::Error),
}
