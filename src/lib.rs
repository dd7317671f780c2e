// Library exports for integration tests and reusable components

// Internal modules needed for compilation (hidden from docs)
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod ui;

// Re-export AppContext at crate root for easier access
pub use ui::AppContext;

pub mod auth;
pub mod graphql;
pub mod saved_ids;
pub mod search;
pub mod tcg;

// Test support (unit tests, or integration tests with the test-utils feature)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;
