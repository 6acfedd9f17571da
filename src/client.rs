//! Chat adapter.
//!
//! Keep the public surface small: build a [`ChatAdapter`] with [`ChatAdapterBuilder`], then
//! call `chat`, `search_topics` or `generate_theme_content`. Implementation details are split
//! into submodules under `src/client/`.

pub mod builder;
pub mod core;
mod execution;
pub mod extraction;
mod policy;
pub mod types;

pub use builder::ChatAdapterBuilder;
pub use core::ChatAdapter;
pub use extraction::THEME_CONTENT_TEMPERATURE;
pub use policy::RetryPolicy;
pub use types::CallStats;
