//! Formatter de cabeceras.
//!
//! Transforma un nombre visible y una secuencia de bytes en el texto de una
//! declaración de array constante:
//!
//! ```text
//! // firmware.bin (2024-01-31 12:00:00)
//! // StartOffset: 0x00000000, EndOffset: 0x00000011, Length: 17 bytes
//! #pragma once
//! #include <cstdint>
//!
//! const uint8_t raw_data[] = 
//! {
//!     0x00, 0x01, ..., 0x0F, 
//!     0x10
//! };
//! ```
//!
//! Las líneas completas terminan en `", "` porque el separador se emite tras
//! cada byte salvo el último. Cuando la longitud es múltiplo de
//! `bytes_per_line` (o cero) queda una línea vacía antes de `};`.

use std::fmt::{self, Write as _};
use std::path::Path;

use chrono::{Local, NaiveDateTime};

use crate::constants::START_OFFSET;
use crate::options::HeaderOptions;

/// Genera la cabecera con la hora local actual.
pub fn generate_header(name: &str, data: &[u8]) -> String {
    generate_header_at(name, data, Local::now().naive_local())
}

/// Genera la cabecera con una marca temporal explícita (determinista).
pub fn generate_header_at(name: &str, data: &[u8], timestamp: NaiveDateTime) -> String {
    format_with(&HeaderOptions::default(), name, data, timestamp)
}

/// Núcleo del formatter; el resto de funciones delegan aquí.
pub fn format_with(options: &HeaderOptions, name: &str, data: &[u8], timestamp: NaiveDateTime) -> String {
    let per_line = options.bytes_per_line.max(1);
    // Cada literal ocupa 6 caracteres ("0xHH, "); el resto es cabecera fija.
    let mut out = String::with_capacity(256 + data.len() * 6 + (data.len() / per_line + 1) * options.indent.len());
    // Escribir sobre un String no falla.
    let _ = write_header(&mut out, options, name, data, timestamp);
    out
}

/// Escribe la cabecera completa en `out`.
pub fn write_header<W: fmt::Write>(
    out: &mut W,
    options: &HeaderOptions,
    name: &str,
    data: &[u8],
    timestamp: NaiveDateTime,
) -> fmt::Result {
    let per_line = options.bytes_per_line.max(1);

    writeln!(out, "// {} ({})", name, timestamp.format(options.timestamp_format))?;
    writeln!(
        out,
        "// StartOffset: 0x{:08X}, EndOffset: 0x{:08X}, Length: {} bytes",
        START_OFFSET,
        data.len(),
        data.len()
    )?;
    out.write_str("#pragma once\n")?;
    write!(out, "#include {}\n\n", options.type_include)?;
    write!(out, "const {} {}[] = \n", options.element_type, options.array_name)?;
    out.write_str("{\n")?;

    let last = data.len().saturating_sub(1);
    for (i, byte) in data.iter().enumerate() {
        if i % per_line == 0 {
            out.write_str(options.indent)?;
        }
        write!(out, "0x{:02X}", byte)?;
        if i != last {
            out.write_str(", ")?;
        }
        if (i + 1) % per_line == 0 {
            out.write_char('\n')?;
        }
    }

    out.write_str("\n};\n")
}

/// Nombre base de `path` tal y como aparece en el comentario de cabecera.
pub fn display_name(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}
