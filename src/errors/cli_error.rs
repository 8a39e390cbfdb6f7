use bin2header_core::HeaderError;
use thiserror::Error;

use crate::run::usage;

/// Fallos terminales de una ejecución del CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Uso incorrecto de {program}")]
    Usage { program: String },
    #[error(transparent)]
    Header(#[from] HeaderError),
}

impl CliError {
    /// Código de salida del proceso; todos los fallos terminan con 1.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Texto que se muestra al usuario por la salida estándar.
    pub fn console_message(&self) -> String {
        match self {
            Self::Usage { program } => usage(program),
            Self::Header(e) if e.is_read_failure() => "Couldn't read input file\n".to_string(),
            Self::Header(_) => "Couldn't write output file\n".to_string(),
        }
    }
}
