//! Input/output operations, configuration and error handling

/// Template layout, file copies and output tree creation
pub mod bundle;
/// Command-line parsing and run orchestration
pub mod cli;
/// Pipeline constants and defaults
pub mod configuration;
/// Error types and path context
pub mod error;
/// Image decoding, encoding and directory listing
pub mod image;
/// Progress bars for the run stages
pub mod progress;
/// Operator prompts and destination naming
pub mod prompt;
