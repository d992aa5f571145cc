use anyhow::Context;
use clap::Parser;
use img_press::batch::batch_transcode;
use img_press::cli::{prompt_quality, Args};
use img_press::transcode::TranscodeOptions;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let quality = match args.quality {
        Some(quality) => quality,
        None => prompt_quality().context("failed to read quality from stdin")?,
    };
    let options = TranscodeOptions::new(quality)?;

    batch_transcode(&args.input, &args.output, &options, args.threads)
        .with_context(|| format!("batch compression failed for {:?}", args.input))?;

    Ok(())
}
