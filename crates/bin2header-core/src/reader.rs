//! Lector binario: carga el fichero completo en memoria.
//!
//! `read_binary` distingue entre fichero ilegible y fichero vacío;
//! `read_binary_or_empty` colapsa ambos casos en un vector vacío.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, warn};

use crate::errors::HeaderError;

/// Lee todos los bytes de `path`.
///
/// Devuelve `HeaderError::Read` si no se puede abrir o leer y
/// `HeaderError::EmptyInput` si el fichero tiene longitud cero.
pub fn read_binary(path: impl AsRef<Path>) -> Result<Vec<u8>, HeaderError> {
    let path = path.as_ref();
    let read_err = |source| HeaderError::Read { path: path.to_path_buf(), source };

    let mut file = File::open(path).map_err(read_err)?;
    let mut data = Vec::new();
    file.read_to_end(&mut data).map_err(read_err)?;

    if data.is_empty() {
        warn!("input {} is empty", path.display());
        return Err(HeaderError::EmptyInput { path: path.to_path_buf() });
    }
    debug!("read {} bytes from {}", data.len(), path.display());
    Ok(data)
}

/// Igual que [`read_binary`] pero sin error: cualquier fallo produce un vector vacío.
pub fn read_binary_or_empty(path: impl AsRef<Path>) -> Vec<u8> {
    match read_binary(path) {
        Ok(data) => data,
        Err(e) => {
            debug!("read failed, returning empty payload: {e}");
            Vec::new()
        }
    }
}
