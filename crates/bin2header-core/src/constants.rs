//! Constantes del formato de cabecera.
//!
//! Agrupa los literales fijos que componen el texto generado. Cambiar
//! cualquiera de ellos altera la salida byte a byte, por lo que los tests de
//! formato dependen de estos valores.

/// Bytes emitidos por línea dentro del cuerpo del array.
pub const BYTES_PER_LINE: usize = 16;

/// Sangría de cada línea de literales.
pub const INDENT: &str = "    ";

/// Identificador del array declarado.
pub const ARRAY_NAME: &str = "raw_data";

/// Tipo de elemento del array (entero sin signo de 8 bits).
pub const ELEMENT_TYPE: &str = "uint8_t";

/// Cabecera que declara `ELEMENT_TYPE`.
pub const TYPE_INCLUDE: &str = "<cstdint>";

/// Patrón `chrono` para la marca temporal: `YYYY-MM-DD HH:MM:SS`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Offset inicial; no hay soporte de sub-rangos.
pub const START_OFFSET: usize = 0;
