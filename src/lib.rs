use std::{
    fs::{File, OpenOptions},
    io::{BufReader, BufWriter, Seek},
    path::{Path, PathBuf},
};

pub use cli::CLIParser;
use binary_stream::BitWriter;
use error::Error;
use frequency::FrequencyTable;
use huffman::{CodeTable, HuffmanEncoder, HuffmanTree};

pub mod binary_stream;
mod cli;
mod error;
pub mod frequency;
pub mod huffman;
mod logger;
pub mod report;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
    output_file: PathBuf,
    debug: bool,
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.display().to_string(), e)
    })
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| {
            Error::UnableToOpenOutputFileForWriting(file_path.display().to_string(), e)
        })
}

/// Runs the full encoding pipeline: scan the input for byte frequencies,
/// build the Huffman tree, derive the code table, then read the input a
/// second time and write its bit-packed encoding to the output file.
///
/// The output carries no header, symbol counts or serialized code table, so
/// it cannot be decoded without the table from this run. An empty input
/// produces an empty output file.
pub fn compress_file(arguments: &Arguments) -> Result<()> {
    let input_file = open_input_file(&arguments.input_file)?;
    let mut input_reader = BufReader::new(input_file);
    let frequencies =
        FrequencyTable::scan(&mut input_reader).map_err(Error::FailedToReadInputStream)?;
    log::info!(
        "scanned {} bytes, {} unique symbols",
        frequencies.total_byte_count(),
        frequencies.unique_symbol_count()
    );
    let output_file = open_output_file(&arguments.output_file)?;
    let tree = match HuffmanTree::from_frequencies(&frequencies) {
        Some(tree) => tree,
        None => {
            log::info!("input is empty, output file left empty");
            return Ok(());
        }
    };
    let codes = CodeTable::from_tree(&tree);
    if arguments.debug {
        let input_name = arguments.input_file.display().to_string();
        report::write_code_report(&mut std::io::stdout(), &input_name, &frequencies, &codes)
            .map_err(Error::FailedToWriteReport)?;
    }
    input_reader
        .rewind()
        .map_err(Error::FailedToReadInputStream)?;
    let mut output_writer = BufWriter::new(output_file);
    let mut bit_writer = BitWriter::new(&mut output_writer);
    let encoder = HuffmanEncoder::new(&codes);
    encoder.encode_stream(&mut input_reader, &mut bit_writer)?;
    log::info!("encoding finished");
    Ok(())
}
