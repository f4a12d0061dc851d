pub mod command;
pub mod console;
pub mod run;

pub use console::Console;
pub use run::run_app;
