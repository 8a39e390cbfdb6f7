use std::ffi::OsString;
use std::io::{self, Write};

fn main() {
    let args: Vec<OsString> = std::env::args_os().collect();
    let mut stdout = io::stdout().lock();
    let code = bin2header::run(args, &mut stdout);
    if let Err(e) = stdout.flush() {
        log::warn!("stdout flush failed: {e}");
    }
    std::process::exit(code);
}
