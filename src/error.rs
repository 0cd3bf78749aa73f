use std::fmt::Display;

use crate::huffman::CodingError;

#[derive(Debug)]
pub enum Error {
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToReadInputStream(std::io::Error),
    FailedToWriteEncodedStream(std::io::Error),
    FailedToWriteReport(std::io::Error),
    SymbolWithoutCode(u8),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToReadInputStream(error) => {
                write!(f, "Failed to read from input stream: {}", error)
            }
            Self::FailedToWriteEncodedStream(error) => {
                write!(f, "Failed to write encoded stream: {}", error)
            }
            Self::FailedToWriteReport(error) => {
                write!(f, "Failed to write debug report: {}", error)
            }
            Self::SymbolWithoutCode(symbol) => {
                write!(
                    f,
                    "Symbol '{}' read during the encoding pass has no code word. \
                     The input changed between the two passes.",
                    symbol
                )
            }
        }
    }
}

impl From<CodingError> for Error {
    fn from(error: CodingError) -> Self {
        match error {
            CodingError::UnknownSymbol(symbol) => Self::SymbolWithoutCode(symbol),
            CodingError::StreamReadError(error) => Self::FailedToReadInputStream(error),
            CodingError::BitWriterError(error) => Self::FailedToWriteEncodedStream(error),
        }
    }
}

impl std::error::Error for Error {}
