use std::io::{Read, Write};

use super::code::CodeTable;
use super::CodingError;
use crate::binary_stream::BitWriter;

const ENCODE_BUFFER_SIZE: usize = 8 * 1024;

/// Second-pass encoder: replaces every input byte with its code word and
/// feeds the bits to a `BitWriter`.
pub struct HuffmanEncoder<'a> {
    table: &'a CodeTable,
}

impl<'a> HuffmanEncoder<'a> {
    pub fn new(table: &'a CodeTable) -> HuffmanEncoder<'a> {
        HuffmanEncoder { table }
    }

    /// Reads the stream to its end and writes the bit-packed encoding.
    /// Flushes the bit writer at the end, which zero-pads the final byte.
    ///
    /// Every byte of this pass must already have a code word, because the
    /// frequency scan saw the same stream. A byte without one means the two
    /// passes observed different content, which is reported as
    /// `CodingError::UnknownSymbol` rather than skipped.
    pub fn encode_stream<R: Read, W: Write>(
        &self,
        reader: &mut R,
        writer: &mut BitWriter<W>,
    ) -> Result<(), CodingError> {
        let mut buffer = [0_u8; ENCODE_BUFFER_SIZE];
        loop {
            let bytes_read = reader.read(&mut buffer).map_err(CodingError::StreamReadError)?;
            if bytes_read == 0 {
                break;
            }
            for &symbol in &buffer[..bytes_read] {
                let code = self
                    .table
                    .code_of(symbol)
                    .ok_or(CodingError::UnknownSymbol(symbol))?;
                writer
                    .write_bits(code.bytes(), code.len())
                    .map_err(CodingError::BitWriterError)?;
            }
        }
        writer.flush().map_err(CodingError::BitWriterError)
    }
}
