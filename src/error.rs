use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum MorseError {
    /// A timing configuration field is outside its valid range.
    InvalidConfig { field: &'static str, value: f64 },
}

impl fmt::Display for MorseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MorseError::InvalidConfig { field, value } => {
                write!(f, "Invalid timing config: {field} = {value}")
            }
        }
    }
}

impl std::error::Error for MorseError {}
