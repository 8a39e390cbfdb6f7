//! Opciones de maquetación del formatter.
//! Centraliza los parámetros de la salida en una estructura inmutable; el CLI
//! siempre usa `HeaderOptions::default()`.

use crate::constants::{ARRAY_NAME, BYTES_PER_LINE, ELEMENT_TYPE, INDENT, TIMESTAMP_FORMAT, TYPE_INCLUDE};

/// Parámetros de la cabecera generada.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderOptions {
    /// Literales por línea (debe ser > 0).
    pub bytes_per_line: usize,
    /// Prefijo de cada línea de literales.
    pub indent: &'static str,
    /// Nombre del array.
    pub array_name: &'static str,
    /// Tipo de los elementos.
    pub element_type: &'static str,
    /// Argumento del `#include`.
    pub type_include: &'static str,
    /// Formato de la marca temporal.
    pub timestamp_format: &'static str,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            bytes_per_line: BYTES_PER_LINE,
            indent: INDENT,
            array_name: ARRAY_NAME,
            element_type: ELEMENT_TYPE,
            type_include: TYPE_INCLUDE,
            timestamp_format: TIMESTAMP_FORMAT,
        }
    }
}
