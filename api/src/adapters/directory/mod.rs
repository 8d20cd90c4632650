//! User directory adapter
//!
//! HTTP client for the hosted identity provider's backend API.

pub mod client;

pub use client::DirectoryClient;
