#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod buffer;
mod error;
mod sample;
mod state;

pub use buffer::{SampleBuffer, SettlingRun, DEFAULT_DEVIATIONS};
pub use error::{BufferError, Result};
pub use sample::Sample;
pub use state::{Arrangement, BufferState};
