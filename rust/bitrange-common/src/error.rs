use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_capacity(capacity: u64) -> Error {
        Error(ErrorKind::InvalidCapacity { capacity }.into())
    }

    pub fn out_of_range(position: u64, capacity: u64) -> Error {
        Error(ErrorKind::PositionOutOfRange { position, capacity }.into())
    }

    pub fn malformed_data(message: impl Into<String>) -> Error {
        Error(
            ErrorKind::MalformedData {
                message: message.into(),
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid capacity {capacity}: a bitrange holds at least one bit")]
    InvalidCapacity { capacity: u64 },

    #[error("position {position} is out of range 1..={capacity}")]
    PositionOutOfRange { position: u64, capacity: u64 },

    #[error("malformed bitrange data: {message}")]
    MalformedData { message: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
