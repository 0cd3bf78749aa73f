use std::io::Read;

/// Number of distinct byte values a stream can contain.
pub const SYMBOL_COUNT: usize = 256;

const SCAN_BUFFER_SIZE: usize = 8 * 1024;

/// Occurrence counts for every byte value of a fully scanned input stream.
pub struct FrequencyTable {
    counts: [usize; SYMBOL_COUNT],
    total_byte_count: usize,
    unique_symbol_count: usize,
}

impl FrequencyTable {
    /// Reads the stream to its end and counts the occurrences of every byte
    /// value. All 256 values are significant, control characters included.
    pub fn scan(reader: &mut impl Read) -> std::io::Result<FrequencyTable> {
        let mut table = FrequencyTable {
            counts: [0; SYMBOL_COUNT],
            total_byte_count: 0,
            unique_symbol_count: 0,
        };
        let mut buffer = [0_u8; SCAN_BUFFER_SIZE];
        loop {
            let bytes_read = reader.read(&mut buffer)?;
            if bytes_read == 0 {
                break;
            }
            for &symbol in &buffer[..bytes_read] {
                table.count_symbol(symbol);
            }
        }
        Ok(table)
    }

    fn count_symbol(&mut self, symbol: u8) {
        if self.counts[symbol as usize] == 0 {
            self.unique_symbol_count += 1;
        }
        self.counts[symbol as usize] += 1;
        self.total_byte_count += 1;
    }

    pub fn count_of(&self, symbol: u8) -> usize {
        self.counts[symbol as usize]
    }

    pub fn unique_symbol_count(&self) -> usize {
        self.unique_symbol_count
    }

    pub fn total_byte_count(&self) -> usize {
        self.total_byte_count
    }

    pub fn is_empty(&self) -> bool {
        self.unique_symbol_count == 0
    }

    /// All symbols with a non-zero count, in ascending symbol order.
    pub fn symbols_and_frequencies(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as u8, count))
    }
}

#[cfg(test)]
mod tests {
    use super::FrequencyTable;

    fn scan_bytes(input: &[u8]) -> FrequencyTable {
        let mut reader = input;
        FrequencyTable::scan(&mut reader).expect("scanning a slice must not fail")
    }

    #[test]
    fn counts_sum_up_to_input_length() {
        let input = b"abracadabra";
        let table = scan_bytes(input);
        let sum: usize = (0..=u8::MAX).map(|s| table.count_of(s)).sum();
        assert_eq!(sum, input.len());
        assert_eq!(table.total_byte_count(), input.len());
    }

    #[test]
    fn counts_individual_symbols() {
        let table = scan_bytes(b"abracadabra");
        assert_eq!(table.count_of(b'a'), 5);
        assert_eq!(table.count_of(b'b'), 2);
        assert_eq!(table.count_of(b'r'), 2);
        assert_eq!(table.count_of(b'c'), 1);
        assert_eq!(table.count_of(b'd'), 1);
        assert_eq!(table.count_of(b'z'), 0);
        assert_eq!(table.unique_symbol_count(), 5);
    }

    #[test]
    fn counts_full_byte_range() {
        let input: Vec<u8> = vec![0, 255, 0, 128, 255, 0];
        let table = scan_bytes(&input);
        assert_eq!(table.count_of(0), 3);
        assert_eq!(table.count_of(128), 1);
        assert_eq!(table.count_of(255), 2);
        assert_eq!(table.unique_symbol_count(), 3);
    }

    #[test]
    fn empty_stream_yields_empty_table() {
        let table = scan_bytes(b"");
        assert!(table.is_empty());
        assert_eq!(table.unique_symbol_count(), 0);
        assert_eq!(table.total_byte_count(), 0);
    }

    #[test]
    fn lists_symbols_in_ascending_order() {
        let table = scan_bytes(b"cba");
        let symbols: Vec<(u8, usize)> = table.symbols_and_frequencies().collect();
        assert_eq!(symbols, vec![(b'a', 1), (b'b', 1), (b'c', 1)]);
    }
}
