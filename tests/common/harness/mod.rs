//! Test harness for CLI integration tests.
//!
//! Provides isolated test environments, payload builders for classes,
//! courses and notes, and CLI assertion helpers using `assert_cmd`.

mod command;
mod env;
mod payload;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::NotraCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
#[allow(unused_imports)]
pub use payload::{TestClass, TestCourse, TestNote, forest_payload};
