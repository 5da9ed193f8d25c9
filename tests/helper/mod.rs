//! Shared test utilities

pub mod fetcher;

pub use fetcher::FakeFetcher;
