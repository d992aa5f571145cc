use crate::constants::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, MAX_QUALITY, MIN_QUALITY};
use crate::error::{Result, TranscodeError};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "img-press",
    about = "A concurrent batch image recompression tool",
    long_about = "img-press recompresses every image in a directory to a target JPEG quality \
                  and reports the per-file and total size savings. Files are processed in \
                  parallel on a fixed-size worker pool; one bad file never stops the batch.",
    version = "0.1.0",
    after_help = "EXAMPLES:\n  \
    img-press\n  \
    img-press ./screenshots ./compressed -q 85\n  \
    img-press ./photos ./out -q 70 -j 4"
)]
pub struct Args {
    #[arg(
        help = "Input directory containing images",
        long_help = "Directory whose direct children are scanned for .jpg, .jpeg and .png \
                     files (case-insensitive). Subdirectories are not descended into.",
        default_value = DEFAULT_INPUT_DIR
    )]
    pub input: PathBuf,

    #[arg(
        help = "Output directory for recompressed images",
        long_help = "Directory the recompressed files are written into under their original \
                     filenames. Created (with parents) when missing.",
        default_value = DEFAULT_OUTPUT_DIR
    )]
    pub output: PathBuf,

    #[arg(
        short = 'q',
        long,
        help = "Compression quality (0-100); prompted for when omitted",
        long_help = "JPEG quality from 0 (smallest) to 100 (highest fidelity). \
                     When not given on the command line, the program asks on stdin \
                     and re-prompts until it gets a valid value."
    )]
    pub quality: Option<u8>,

    #[arg(
        short = 'j',
        long,
        help = "Number of parallel workers (default: number of CPU cores)",
        long_help = "Size of the worker pool. One file is in flight per worker, which \
                     also bounds how many decoded images sit in memory at once."
    )]
    pub threads: Option<usize>,
}

/// Reads a quality value, re-prompting until the input parses as an integer
/// in 0..=100. Generic over the streams so the retry loop is testable.
pub fn read_quality(reader: &mut impl BufRead, writer: &mut impl Write) -> Result<u8> {
    let mut line = String::new();
    loop {
        write!(writer, "Enter output quality (0-100): ")?;
        writer.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(TranscodeError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed before a quality value was supplied",
            )));
        }

        match line.trim().parse::<i64>() {
            Ok(value) if (MIN_QUALITY as i64..=MAX_QUALITY as i64).contains(&value) => {
                return Ok(value as u8);
            }
            Ok(_) => writeln!(writer, "Quality must be between 0 and 100.")?,
            Err(_) => writeln!(writer, "Invalid input, please enter an integer.")?,
        }
    }
}

pub fn prompt_quality() -> Result<u8> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    read_quality(&mut stdin.lock(), &mut stdout)
}
