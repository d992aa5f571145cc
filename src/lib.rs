pub mod batch;
pub mod cli;
pub mod constants;
pub mod error;
pub mod report;
pub mod transcode;
pub mod utils;

pub use batch::{batch_transcode, collect_eligible_files, is_eligible};
pub use error::{Result, TranscodeError};
pub use report::{Reporter, RunTotals};
pub use transcode::{transcode, ImageTask, TranscodeOptions, TranscodeResult};
pub use utils::{format_size, savings_percent};
