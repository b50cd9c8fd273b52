//! Unitconv CLI - interactive console unit converter
//!
//! The binary wires stdin/stdout into [`Shell`]; the library is split out so
//! that whole sessions can be scripted in tests.

pub mod menu;
pub mod options;
pub mod shell;

pub use menu::{InputError, MenuChoice};
pub use options::ShellOptions;
pub use shell::{run, Shell};
