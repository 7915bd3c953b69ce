//! Report output.

pub mod console;

pub use console::{render, render_totals, ConsoleOutput};
