//! Command implementations for the `flightgw` binary.
//!
//! Each function backs one clap subcommand and is a thin orchestrator: it
//! wires configuration into the library modules and reports progress through
//! the console macros from the crate root.

mod refunds;
mod serve;

pub use refunds::generate_refunds;
pub use serve::serve;
