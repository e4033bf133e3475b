//! Interactive city prompt.

use colored::Colorize;
use std::error::Error;
use std::io::{BufRead, Write};

/// Print `prompt` to `out` and read one line (the city name) from `input`.
///
/// The returned name is trimmed. An empty line is a valid answer, end of input
/// before any line is an error.
pub fn prompt_city<R, W>(mut input: R, mut out: W, prompt: &str) -> Result<String, Box<dyn Error>>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{} ", prompt.bold())?;
    out.flush()?;

    let mut line = String::new();
    let n = input
        .read_line(&mut line)
        .map_err(|e| format!("Error reading city from input: {e}"))?;
    if n == 0 {
        return Err("No city entered, input closed".into());
    }

    let city = line.trim().to_string();
    log::info!("City query: '{city}'");
    Ok(city)
}
