//! Memory Layer - In-Memory Adapters
//!
//! 实现 BookApiPort 与 NavigatorPort 的内存版本

mod book_store;
mod navigator;

pub use book_store::{ApiCall, InMemoryBookApi};
pub use navigator::RecordingNavigator;
