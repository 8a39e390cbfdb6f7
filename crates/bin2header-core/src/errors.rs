//! Errores del pipeline lectura → formato → escritura.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeaderError {
    #[error("Error de lectura en {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Fichero de entrada vacío: {}", path.display())]
    EmptyInput { path: PathBuf },
    #[error("Error de escritura en {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl HeaderError {
    /// `true` para fallos de lectura, incluido el fichero vacío.
    pub fn is_read_failure(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::EmptyInput { .. })
    }

    /// Ruta implicada en el error.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::EmptyInput { path } | Self::Write { path, .. } => path,
        }
    }
}
