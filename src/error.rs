use std::io;
use thiserror::Error;

use crate::parser::ParserError;

#[derive(Error, Debug)]
pub enum HotelError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Booking file error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input error: {0}")]
    Parser(#[from] ParserError),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Amount for {0} is not a finite number")]
    NonFiniteAmount(String),

    #[error("Input closed while waiting for {0}")]
    InputClosed(&'static str),
}

pub type Result<T> = std::result::Result<T, HotelError>;
