use thiserror::Error;

#[derive(Error, Debug)]
pub enum SajuError {
    #[error("Invalid birth info: {field} = {value} ({reason})")]
    InvalidBirthInfo {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, SajuError>;
