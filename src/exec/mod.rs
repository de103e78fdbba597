// src/exec/mod.rs

//! Process supervision layer.
//!
//! - [`supervisor`] launches the session process, relays its stdout/stderr
//!   and propagates its exit status.
//! - [`signals`] owns the signal subscription that forwards whatever the
//!   parent receives to the child while it runs, and turns HUP/INT/TERM
//!   into a stop request once it has exited.

pub mod signals;
pub mod supervisor;

pub use signals::{FORWARDED_SIGNALS, STOP_SIGNALS, SignalRelay};
pub use supervisor::{DEFAULT_FAILURE_DRAIN_GRACE, Supervisor, supervise};
