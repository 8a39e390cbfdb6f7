//! Escritor de texto: vuelca la cabecera al fichero de salida.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::{debug, warn};

use crate::errors::HeaderError;

/// Escribe `text` como contenido completo de `path`, truncando si ya existe.
///
/// No limpia la salida parcial si la escritura falla a mitad.
pub fn write_text(path: impl AsRef<Path>, text: &str) -> Result<(), HeaderError> {
    let path = path.as_ref();
    let write_err = |source| HeaderError::Write { path: path.to_path_buf(), source };

    let result = File::create(path).and_then(|mut file| {
        file.write_all(text.as_bytes())?;
        file.flush()
    });
    match result {
        Ok(()) => {
            debug!("wrote {} bytes to {}", text.len(), path.display());
            Ok(())
        }
        Err(e) => {
            warn!("write to {} failed: {e}", path.display());
            Err(write_err(e))
        }
    }
}
