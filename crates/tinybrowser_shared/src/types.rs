use crate::errors::Error;

/// Result that can be returned which holds either T or an Error
pub type Result<T> = std::result::Result<T, Error>;
