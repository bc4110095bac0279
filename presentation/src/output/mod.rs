//! Console transcript output

mod transcript;

pub use transcript::ConsoleTranscript;
