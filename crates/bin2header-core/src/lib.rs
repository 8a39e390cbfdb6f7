//! bin2header-core
//!
//! Pipeline para convertir un fichero binario en una cabecera C/C++ con un
//! array constante de sus bytes.
//!
//! Módulos:
//! - `reader`: carga del fichero de entrada.
//! - `formatter`: texto de la cabecera (comentarios, `#pragma once`, array).
//! - `writer`: escritura de la cabecera en disco.
//! - `options` / `constants`: maquetación fija de la salida.
//! - `errors`: `HeaderError`.

pub mod constants;
pub mod errors;
pub mod formatter;
pub mod options;
pub mod reader;
pub mod writer;

pub use errors::HeaderError;
pub use formatter::{display_name, format_with, generate_header, generate_header_at, write_header};
pub use options::HeaderOptions;
pub use reader::{read_binary, read_binary_or_empty};
pub use writer::write_text;
