//! Matcher service adapters: HTTP and mock.

pub mod http_adapter;
pub mod mock_adapter;

pub use http_adapter::HttpMatcherAdapter;
pub use mock_adapter::MockMatcherAdapter;
