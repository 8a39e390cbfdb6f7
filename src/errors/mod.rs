pub mod cli_error;

pub use cli_error::CliError;
