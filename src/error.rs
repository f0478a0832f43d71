use std::fmt;

pub type Result<T> = std::result::Result<T, ParseError>;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    Address { input: String },
    Cidr { input: String },
}

impl ParseError {
    pub fn new_address(input: &str) -> ParseError {
        ParseError::Address {
            input: input.to_string(),
        }
    }

    pub fn new_cidr(input: &str) -> ParseError {
        ParseError::Cidr {
            input: input.to_string(),
        }
    }

    pub fn err_address<T>(input: &str) -> Result<T> {
        Err(Self::new_address(input))
    }

    pub fn err_cidr<T>(input: &str) -> Result<T> {
        Err(Self::new_cidr(input))
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Address { input } => write!(f, "not an IP address: {:?}", input),
            ParseError::Cidr { input } => write!(f, "not a CIDR: {:?}", input),
        }
    }
}

impl std::error::Error for ParseError {}
