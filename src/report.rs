use std::io::{self, Write};

use crate::frequency::FrequencyTable;
use crate::huffman::code::CodeTable;

/// Display names for the ASCII control characters plus the space character,
/// indexed by byte value.
const CONTROL_CHARACTER_NAMES: [&str; 33] = [
    "NUL", "SOH", "STX", "ETX", "EOT", "ENQ", "ACK", "BEL", "BS", "TAB", "LF", "VT", "FF", "CR",
    "SO", "SI", "DLE", "DC1", "DC2", "DC3", "DC4", "NAK", "SYN", "ETB", "CAN", "EM", "SUB", "ESC",
    "FS", "GS", "RS", "US", "SPACE",
];

/// Human readable form of a byte value: a mnemonic for control characters
/// and the space character, the literal character otherwise.
pub fn display_symbol(symbol: u8) -> String {
    match CONTROL_CHARACTER_NAMES.get(symbol as usize) {
        Some(name) => (*name).to_string(),
        None => (symbol as char).to_string(),
    }
}

/// Writes one line per observed symbol with its display form, frequency and
/// assigned code, preceded by the total input length.
pub fn write_code_report(
    out: &mut impl Write,
    input_name: &str,
    frequencies: &FrequencyTable,
    codes: &CodeTable,
) -> io::Result<()> {
    writeln!(out, "{} length {}", input_name, frequencies.total_byte_count())?;
    for (symbol, code) in codes.entries() {
        writeln!(
            out,
            "{}\t{}\t{}",
            display_symbol(symbol),
            frequencies.count_of(symbol),
            code
        )?;
    }
    Ok(())
}

/// Writes one line per observed symbol with its display form and frequency.
/// Used by the standalone frequency counting utility, which has no codes.
pub fn write_frequency_report(out: &mut impl Write, frequencies: &FrequencyTable) -> io::Result<()> {
    for (symbol, count) in frequencies.symbols_and_frequencies() {
        writeln!(out, "{}\t{}", display_symbol(symbol), count)?;
    }
    Ok(())
}
