use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown password type {0}, expected PasswordDigest or PasswordText")]
    UnknownPasswordType(String),

    #[error("Unable to read header config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML header config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON header config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Password is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Decoded password is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
