use huffman_encoder::frequency::FrequencyTable;
use huffman_encoder::huffman::{CodeTable, HuffmanTree};
use huffman_encoder::{compress_file, CLIParser};
use std::path::PathBuf;
use std::{env, fs};

struct TestFiles {
    input_path: PathBuf,
    output_path: PathBuf,
}

impl TestFiles {
    fn create(test_name: &str, input_content: &[u8]) -> TestFiles {
        let temp_dir = env::temp_dir();
        let input_path = temp_dir.join(format!("huffman_encoder_{}_input", test_name));
        let output_path = temp_dir.join(format!("huffman_encoder_{}_output", test_name));
        fs::write(&input_path, input_content).expect("writing the input fixture failed");
        TestFiles {
            input_path,
            output_path,
        }
    }

    fn compress(&self) {
        let mut cli_parser = CLIParser::new();
        let arguments = cli_parser.parse(vec![
            "test",
            "-i",
            self.input_path.to_str().unwrap(),
            "-o",
            self.output_path.to_str().unwrap(),
        ]);
        compress_file(&arguments).expect("compression failed");
    }

    fn read_output(&self) -> Vec<u8> {
        fs::read(&self.output_path).expect("reading the output file failed")
    }
}

impl Drop for TestFiles {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.input_path);
        let _ = fs::remove_file(&self.output_path);
    }
}

fn code_table_for(input: &[u8]) -> CodeTable {
    let mut reader = input;
    let frequencies = FrequencyTable::scan(&mut reader).expect("scanning a slice must not fail");
    let tree = HuffmanTree::from_frequencies(&frequencies).expect("input must not be empty");
    CodeTable::from_tree(&tree)
}

/// Test-only inverse of the code table: walks the output bit by bit and
/// matches the accumulated prefix against every assigned code.
fn decode(output: &[u8], table: &CodeTable, symbol_count: usize) -> Vec<u8> {
    let mut decoded = Vec::with_capacity(symbol_count);
    let mut prefix: Vec<bool> = Vec::new();
    'bits: for bit_index in 0..output.len() * 8 {
        if decoded.len() == symbol_count {
            break;
        }
        let bit = output[bit_index / 8] & (0b1000_0000 >> (bit_index % 8)) > 0;
        prefix.push(bit);
        for (symbol, code) in table.entries() {
            if code.len() == prefix.len() && (0..code.len()).all(|i| code.bit(i) == prefix[i]) {
                decoded.push(symbol);
                prefix.clear();
                continue 'bits;
            }
        }
    }
    decoded
}

#[test]
fn two_symbol_input_packs_into_a_single_byte() {
    let files = TestFiles::create("two_symbol", b"aaabb");
    files.compress();
    // a -> 0, b -> 1: bits 00011 followed by three zero pad bits
    assert_eq!(files.read_output(), vec![0b0001_1000]);
}

#[test]
fn empty_input_produces_an_empty_output_file() {
    let files = TestFiles::create("empty", b"");
    files.compress();
    assert!(files.output_path.exists(), "output file was not created");
    assert!(files.read_output().is_empty());
}

#[test]
fn single_symbol_input_round_trips() {
    let input = vec![b'q'; 1000];
    let files = TestFiles::create("single_symbol", &input);
    files.compress();
    let output = files.read_output();
    assert_eq!(output.len(), 125);
    let table = code_table_for(&input);
    assert_eq!(decode(&output, &table, 1000), input);
}

#[test]
fn mixed_input_round_trips() {
    let input = b"abracadabra alakazam\n";
    let files = TestFiles::create("mixed", input);
    files.compress();
    let output = files.read_output();
    let table = code_table_for(input);
    assert_eq!(decode(&output, &table, input.len()), input.to_vec());
}

#[test]
fn output_length_matches_the_code_bit_total() {
    let input = b"what can be asserted without evidence can also be dismissed without evidence";
    let files = TestFiles::create("output_length", input);
    files.compress();
    let table = code_table_for(input);
    let total_bits: usize = input
        .iter()
        .map(|&symbol| table.code_of(symbol).unwrap().len())
        .sum();
    assert_eq!(files.read_output().len(), total_bits.div_ceil(8));
}

#[test]
fn existing_output_file_is_truncated() {
    let files = TestFiles::create("truncate", b"aaabb");
    fs::write(&files.output_path, b"leftover from a previous run")
        .expect("writing the stale output failed");
    files.compress();
    assert_eq!(files.read_output(), vec![0b0001_1000]);
}
