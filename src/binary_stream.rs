use std::io;
use std::io::Write;

/// Packs individual bits into bytes and forwards every completed byte to the
/// underlying writer. Bits fill each output byte most-significant-first.
pub struct BitWriter<'a, T: Write> {
    writer: &'a mut T,
    /// accumulator for bits that do not yet fill a whole byte
    buffer: u8,
    /// number of bits currently held in the accumulator, 0..=7
    buffer_space_used: u8,
}

impl<'a, T: Write> BitWriter<'a, T> {
    pub fn new(writer: &'a mut T) -> BitWriter<'a, T> {
        BitWriter {
            writer,
            buffer: 0,
            buffer_space_used: 0,
        }
    }

    /// Appends the first `count` bits of `buf`, read most-significant-first
    /// from each byte. Completed bytes go to the underlying writer
    /// immediately; up to seven trailing bits stay in the accumulator until
    /// the next call or until `flush` pads them out.
    pub fn write_bits(&mut self, buf: &[u8], count: usize) -> Result<(), io::Error> {
        let mut first_unwritten_bit = 0;
        if self.buffer_space_used == 0 {
            // aligned, so whole bytes can bypass the accumulator
            let whole_byte_count = count / 8;
            self.writer.write_all(&buf[..whole_byte_count])?;
            first_unwritten_bit = whole_byte_count * 8;
        }
        for bit_index in first_unwritten_bit..count {
            let bit = buf[bit_index / 8] & (0b1000_0000 >> (bit_index % 8)) > 0;
            if bit {
                self.buffer |= 0b1000_0000 >> self.buffer_space_used;
            }
            self.buffer_space_used += 1;
            if self.buffer_space_used == 8 {
                self.writer.write_all(&[self.buffer])?;
                self.buffer = 0;
                self.buffer_space_used = 0;
            }
        }
        Ok(())
    }
}

impl<T: Write> Write for BitWriter<'_, T> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, io::Error> {
        self.write_bits(buf, buf.len() * 8)?;
        Ok(buf.len())
    }

    /// Flushes the accumulator and the underlying writer. Remaining bits are
    /// written as one final byte, zero-padded in the low-order positions.
    fn flush(&mut self) -> Result<(), io::Error> {
        if self.buffer_space_used != 0 {
            self.writer.write_all(&[self.buffer])?;
            self.buffer = 0;
            self.buffer_space_used = 0;
        }
        self.writer.flush()
    }
}
