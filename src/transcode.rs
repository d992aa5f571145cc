use crate::constants::{DEFAULT_QUALITY, MAX_QUALITY, MIN_QUALITY};
use crate::error::{Result, TranscodeError};
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[derive(Debug, Clone)]
pub struct TranscodeOptions {
    pub quality: u8,
}

impl TranscodeOptions {
    pub fn new(quality: u8) -> Result<Self> {
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
            return Err(TranscodeError::InvalidQuality(quality));
        }
        Ok(Self { quality })
    }
}

impl Default for TranscodeOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
        }
    }
}

/// One unit of work: recompress `source_path` into `output_dir` at `quality`.
/// Built by the dispatcher, consumed exactly once by [`transcode`].
#[derive(Debug, Clone)]
pub struct ImageTask {
    pub source_path: PathBuf,
    pub output_dir: PathBuf,
    pub quality: u8,
}

impl ImageTask {
    pub fn new(source_path: PathBuf, output_dir: PathBuf, quality: u8) -> Self {
        Self {
            source_path,
            output_dir,
            quality,
        }
    }

    pub fn filename(&self) -> String {
        match self.source_path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => self.source_path.display().to_string(),
        }
    }
}

#[derive(Debug)]
pub enum TranscodeResult {
    Done {
        filename: String,
        original_bytes: u64,
        compressed_bytes: u64,
    },
    Failed {
        filename: String,
        error: TranscodeError,
    },
}

impl TranscodeResult {
    pub fn filename(&self) -> &str {
        match self {
            TranscodeResult::Done { filename, .. } => filename,
            TranscodeResult::Failed { filename, .. } => filename,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, TranscodeResult::Done { .. })
    }
}

/// Recompresses a single image: read, decode, flatten transparency, encode
/// as JPEG at the task's quality, and write into the output directory under
/// the input's filename. The extension is kept verbatim, so a `.png` input
/// produces a `.png`-named file holding JPEG bytes.
///
/// Never panics on bad input; every failure mode is folded into the
/// returned [`TranscodeResult`] so one file cannot take down a batch.
pub fn transcode(task: &ImageTask) -> TranscodeResult {
    let filename = task.filename();
    match transcode_file(task, &filename) {
        Ok((original_bytes, compressed_bytes)) => TranscodeResult::Done {
            filename,
            original_bytes,
            compressed_bytes,
        },
        Err(error) => TranscodeResult::Failed { filename, error },
    }
}

fn transcode_file(task: &ImageTask, filename: &str) -> Result<(u64, u64)> {
    let data = fs::read(&task.source_path).map_err(TranscodeError::Read)?;
    let original_bytes = data.len() as u64;

    let img = image::load_from_memory(&data).map_err(TranscodeError::Decode)?;
    let img = flatten_alpha(img);

    let mut encoded = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut encoded, task.quality);
    img.write_with_encoder(encoder)
        .map_err(TranscodeError::Encode)?;

    // Temp file in the destination directory, renamed into place once the
    // bytes are down. A failed task leaves nothing behind.
    let output_path = task.output_dir.join(filename);
    let mut tmp = NamedTempFile::new_in(&task.output_dir).map_err(TranscodeError::Write)?;
    tmp.write_all(&encoded).map_err(TranscodeError::Write)?;
    tmp.persist(&output_path)
        .map_err(|e| TranscodeError::Write(e.error))?;

    Ok((original_bytes, encoded.len() as u64))
}

/// JPEG carries no alpha plane. Transparency is dropped outright, not
/// composited onto a background; semi-transparent pixels keep their raw
/// color channels.
fn flatten_alpha(img: DynamicImage) -> DynamicImage {
    if img.color().has_alpha() {
        DynamicImage::ImageRgb8(img.to_rgb8())
    } else {
        img
    }
}
