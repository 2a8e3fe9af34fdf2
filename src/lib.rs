pub mod error;
pub mod scanner;

// Re-export the error type for convenience
pub use error::CompileError;
