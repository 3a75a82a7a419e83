//! Flight Gateway Library
//!
//! This library backs the `flightgw` binary: a thin HTTP gateway that proxies
//! flight-offer searches to the Amadeus self-service API, handling OAuth2
//! client-credentials token acquisition, plus an offline generator for
//! synthetic airline refund datasets used in demos and tests.
//!
//! # Modules
//!
//! - `amadeus` - Amadeus API client (token grant, flight-offers search)
//! - `api` - HTTP API endpoints served by the gateway
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy and HTTP status mapping
//! - `refunds` - Synthetic refund dataset generator
//! - `server` - HTTP server wiring and shared state
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use flightgw::config;
//!
//! #[tokio::main]
//! async fn main() -> flightgw::Res<()> {
//!     config::load_env().await?;
//!     let cfg = config::Config::from_env();
//!     // Start the server or run the generator...
//!     Ok(())
//! }
//! ```

pub mod amadeus;
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod refunds;
pub mod server;
pub mod types;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
///
/// # Example
///
/// ```
/// use flightgw::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Starting gateway on {}", addr);
/// info!("Generated {} rows", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations.
///
/// # Example
///
/// ```
/// success!("Wrote refund dataset to {}", path.display());
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Used for unrecoverable errors
/// on startup paths; request handling never goes through this macro.
///
/// # Example
///
/// ```
/// error!("Failed to parse server address: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// potential issues or important notices that don't require program
/// termination.
///
/// # Example
///
/// ```
/// warning!("No .env file found, relying on process environment");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
