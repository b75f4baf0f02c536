// Common test utilities and fixtures

pub mod fixtures;

// Re-export commonly used items
// Note: These may appear unused in some test binaries
#[allow(unused_imports)]
pub use fixtures::{sample_index_json, DocsSite};
#[allow(unused_imports)]
pub use helpers::{create_test_services, tool_text};
