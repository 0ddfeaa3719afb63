//! # Computer Patterns
//!
//! A toy computer model used to demonstrate classic object-oriented patterns in Rust.
//!
//! ## Patterns Covered
//!
//! 1. **Singleton** - [`session::Session`], a single process-wide login slot
//! 2. **Strategy** - [`capability`], interchangeable input/processor/memory/output parts
//! 3. **Composition** - [`computer::Chassis`], hot-swappable capability slots
//! 4. **Inheritance via traits** - [`computer::Desktop`], [`computer::Laptop`], [`computer::Walltop`]
//! 5. **Decorator** - [`decorator`], stackable price/name features
//!
//! Components narrate what they do into a [`transcript::Transcript`]; nothing
//! performs real work. Everything runs on one thread.
//!
//! ## Running the Demo
//!
//! ```bash
//! cargo run --bin computer_demo
//! RUST_LOG=computer_patterns=debug cargo run --bin computer_demo -- --config demo.toml
//! ```

pub mod capability;
pub mod computer;
pub mod config;
pub mod decorator;
pub mod error;
pub mod session;
pub mod transcript;

pub use error::{ConfigError, DemoError, SessionError};
