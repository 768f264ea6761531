// src/ports/mod.rs
pub mod console;

pub use console::{ConsolePresenter, ConsoleReporter};
