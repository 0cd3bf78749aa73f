use std::env::args_os;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{arg, value_parser, Command};

use huffman_encoder::frequency::FrequencyTable;
use huffman_encoder::report;

/// Standalone utility that tabulates and prints the byte frequencies of a
/// file. It shares the scanner with the encoder but is not part of the
/// encoding pipeline.
fn main() -> ExitCode {
    let matches = Command::new("count_frequencies")
        .about("Tabulate and print byte frequencies of a file")
        .arg(
            arg!(input_file: -i --input <FILE> "Path to the input file")
                .value_parser(value_parser!(PathBuf))
                .required(true),
        )
        .get_matches_from(args_os());
    let input_file = matches
        .get_one::<PathBuf>("input_file")
        .expect("Required argument input_file not provided");

    let file = match File::open(input_file) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Unable to open '{}' for reading: {}", input_file.display(), e);
            return ExitCode::FAILURE;
        }
    };
    let mut reader = BufReader::new(file);
    let frequencies = match FrequencyTable::scan(&mut reader) {
        Ok(frequencies) => frequencies,
        Err(e) => {
            eprintln!("Failed to read '{}': {}", input_file.display(), e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = report::write_frequency_report(&mut std::io::stdout(), &frequencies) {
        eprintln!("Failed to print frequency report: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
