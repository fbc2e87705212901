//! Logging setup.
//!
//! The library only speaks the `log` facade; hosts that want output call
//! [`init_logging`] once, early.

mod init;

pub use init::{init_logging, LoggingConfig};
