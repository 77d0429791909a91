use std::fmt;

/// An entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBooking,
    ViewBookings,
    Checkout,
    CalculateRevenue,
    Exit,
}

#[derive(Debug, PartialEq)]
pub enum ParserError {
    InvalidChoice(String),
    InvalidInteger { field: &'static str, input: String },
    InvalidDecimal { field: &'static str, input: String },
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParserError::InvalidChoice(input) => write!(f, "Invalid menu choice {:?}", input),
            ParserError::InvalidInteger { field, input } => {
                write!(f, "Invalid integer for {}: {:?}", field, input)
            }
            ParserError::InvalidDecimal { field, input } => {
                write!(f, "Invalid decimal for {}: {:?}", field, input)
            }
        }
    }
}

impl std::error::Error for ParserError {}

pub struct Parser {}

impl Parser {
    /// Matches the line exactly, so `" 1"` is not option 1.
    pub fn parse_choice(line: &str) -> Result<MenuChoice, ParserError> {
        match line {
            "1" => Ok(MenuChoice::AddBooking),
            "2" => Ok(MenuChoice::ViewBookings),
            "3" => Ok(MenuChoice::Checkout),
            "4" => Ok(MenuChoice::CalculateRevenue),
            "5" => Ok(MenuChoice::Exit),
            _ => Err(ParserError::InvalidChoice(line.to_string())),
        }
    }

    pub fn parse_integer(field: &'static str, input: &str) -> Result<i64, ParserError> {
        input
            .trim()
            .parse()
            .map_err(|_| ParserError::InvalidInteger {
                field,
                input: input.to_string(),
            })
    }

    /// Finite decimals only; `inf` and `nan` cannot be written to the booking file.
    pub fn parse_decimal(field: &'static str, input: &str) -> Result<f64, ParserError> {
        input
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| ParserError::InvalidDecimal {
                field,
                input: input.to_string(),
            })
    }

    /// Strips the line terminator left by a line read, nothing else.
    pub fn strip_line_ending(line: &str) -> &str {
        line.strip_suffix('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .unwrap_or(line)
    }
}
