//! Observers for the terminal and for logs.

mod console;
mod logging;

pub use console::ConsoleObserver;
pub use logging::TracingObserver;
