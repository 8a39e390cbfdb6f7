//! Orquestación de una ejecución del CLI.
//!
//! Máquina de estados lineal:
//!
//! - `ParseArgs` -> `Read` | `Failure`
//! - `Read` -> `Format` | `Failure`
//! - `Format` -> `Write`
//! - `Write` -> `Success` | `Failure`
//!
//! `Success` y `Failure` son terminales. Los mensajes para el usuario se
//! escriben en `console` (stdout en el binario); los diagnósticos van por `log`.

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use bin2header_core::{display_name, generate_header, read_binary, write_text};
use log::{debug, info, warn};

use crate::errors::CliError;

/// Nombre usado en el texto de ayuda cuando `argv[0]` no está disponible.
pub const DEFAULT_PROGRAM_NAME: &str = "bin2header";

/// Rutas de entrada y salida de una ejecución.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunParams {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl RunParams {
    /// Exige exactamente dos argumentos posicionales tras el nombre del programa.
    /// Las rutas se toman tal cual, sin exigir UTF-8.
    pub fn from_args(args: &[OsString]) -> Result<Self, CliError> {
        match args {
            [_, input, output] => Ok(Self { input: PathBuf::from(input), output: PathBuf::from(output) }),
            _ => Err(CliError::Usage { program: program_name(args) }),
        }
    }
}

/// Estado de la ejecución.
#[derive(Debug)]
pub enum RunState {
    /// Argumentos crudos, incluido `argv[0]`.
    ParseArgs(Vec<OsString>),
    Read(RunParams),
    Format { params: RunParams, data: Vec<u8> },
    Write { params: RunParams, header: String },
    Success,
    Failure(CliError),
}

impl RunState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Failure(_))
    }

    /// Código de salida si el estado es terminal.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Success => Some(0),
            Self::Failure(e) => Some(e.exit_code()),
            _ => None,
        }
    }

    /// Ejecuta una transición. Los estados terminales se devuelven sin cambios.
    pub fn step(self, console: &mut dyn Write) -> RunState {
        match self {
            Self::ParseArgs(args) => match RunParams::from_args(&args) {
                Ok(params) => {
                    say(console, &format!("Input file: {}\n", params.input.display()));
                    say(console, &format!("Output file: {}\n", params.output.display()));
                    Self::Read(params)
                }
                Err(e) => fail(console, e),
            },
            Self::Read(params) => match read_binary(&params.input) {
                Ok(data) => {
                    say(console, &format!("Input file size: 0x{:X}\n", data.len()));
                    say(console, "Generating file, please wait...\n");
                    Self::Format { params, data }
                }
                Err(e) => fail(console, e.into()),
            },
            Self::Format { params, data } => {
                let header = generate_header(&display_name(&params.input), &data);
                debug!("formatted {} bytes into {} chars", data.len(), header.len());
                Self::Write { params, header }
            }
            Self::Write { params, header } => match write_text(&params.output, &header) {
                Ok(()) => {
                    info!("header written to {}", params.output.display());
                    say(console, "Success!\n");
                    Self::Success
                }
                Err(e) => fail(console, e.into()),
            },
            terminal => terminal,
        }
    }
}

/// Lleva la ejecución hasta un estado terminal y devuelve el código de salida.
pub fn run(args: Vec<OsString>, console: &mut dyn Write) -> i32 {
    let mut state = RunState::ParseArgs(args);
    while !state.is_terminal() {
        state = state.step(console);
    }
    state.exit_code().unwrap_or(1)
}

/// Texto de ayuda mostrado ante un número incorrecto de argumentos.
pub fn usage(program: &str) -> String {
    format!(
        "Incorrect usage!\n\
Syntax: {program} <input_binary.exe> <output_header.h>\n\
<input_binary.exe>    Path to any binary file\n\
<output_header.h>     Path to output file\n\
Example: {program} image.exe image.h\n"
    )
}

fn program_name(args: &[OsString]) -> String {
    args.first().map(display_name).unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string())
}

fn fail(console: &mut dyn Write, err: CliError) -> RunState {
    match &err {
        CliError::Header(e) => info!("run failed on {}: {err}", e.path().display()),
        CliError::Usage { .. } => info!("run failed: {err}"),
    }
    say(console, &err.console_message());
    RunState::Failure(err)
}

// Un stdout cerrado no debe abortar la ejecución.
fn say(console: &mut dyn Write, text: &str) {
    if let Err(e) = console.write_all(text.as_bytes()) {
        warn!("console write failed: {e}");
    }
}
