/// Process adapters for running the package manager
mod system_process_runner;

pub use system_process_runner::SystemProcessRunner;
