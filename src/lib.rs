//! bin2header
//!
//! CLI que convierte un fichero binario en una cabecera C/C++ con un array
//! `const uint8_t raw_data[]`:
//! - `run`: máquina de estados ParseArgs → Read → Format → Write.
//! - `errors`: `CliError`, traducción de fallos a mensajes y códigos de salida.
//!
//! La lógica de lectura, formato y escritura vive en `bin2header-core`.

pub mod errors;
pub mod run;

pub use errors::CliError;
pub use run::{run, usage, RunParams, RunState};
