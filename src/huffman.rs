use std::fmt;

pub mod code;
pub mod encoder;
pub mod heap;
pub mod tree;

pub use code::CodeTable;
pub use encoder::HuffmanEncoder;
pub use tree::HuffmanTree;

#[derive(Debug)]
pub enum CodingError {
    UnknownSymbol(u8),
    StreamReadError(std::io::Error),
    BitWriterError(std::io::Error),
}

impl fmt::Display for CodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSymbol(symbol) => {
                write!(f, "Symbol '{}' has no code word assigned", symbol)
            }
            Self::StreamReadError(error) => {
                write!(f, "Reading the input stream failed: {}", error)
            }
            Self::BitWriterError(error) => {
                write!(f, "Writing to the bit stream failed: {}", error)
            }
        }
    }
}

impl std::error::Error for CodingError {}
