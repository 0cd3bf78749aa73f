use std::env::args_os;

use huffman_encoder::{compress_file, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match compress_file(&arguments) {
        Ok(_) => println!("Compression successful"),
        Err(e) => eprintln!("Compression failed because of: {}", e),
    }
}
