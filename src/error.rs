/// Errors that can occur during encoding or decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input contains a character outside the alphabet and padding
    InvalidCharacter(char),
    /// No catalog entry matches the multiformat prefix character
    UnsupportedEncoding(char),
    /// No catalog entry matches the requested name
    UnknownBaseName(String),
    /// The supplied output buffer is smaller than the computed size
    BufferTooSmall { required: usize, available: usize },
    /// Multiformat decode was called on an empty string
    EmptyInput,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidCharacter(c) => write!(f, "Invalid character in input: {:?}", c),
            Error::UnsupportedEncoding(c) => {
                write!(f, "Unsupported multiformat prefix: {:?}", c)
            }
            Error::UnknownBaseName(name) => write!(f, "Unknown base encoding: {}", name),
            Error::BufferTooSmall {
                required,
                available,
            } => write!(
                f,
                "Output buffer too small: need {} bytes, have {}",
                required, available
            ),
            Error::EmptyInput => write!(f, "Cannot decode empty input"),
        }
    }
}

impl std::error::Error for Error {}
