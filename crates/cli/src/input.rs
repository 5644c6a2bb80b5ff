//! Validated interactive input.
//!
//! Every helper re-prompts until a line parses and clears the floor. This
//! is the only layer that range-checks numeric input; the domain trusts
//! what it is handed.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

fn read_trimmed_line(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
    }
    Ok(line.trim().to_string())
}

/// Prompt for a free-form line (trimmed).
pub fn read_line(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> io::Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;
    read_trimmed_line(input)
}

/// Prompt until the line parses as `T` and is at least `min`.
pub fn read_number<T>(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
    min: T,
) -> io::Result<T>
where
    T: FromStr + PartialOrd + Copy,
{
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;
        match read_trimmed_line(input)?.parse::<T>() {
            Ok(value) if value >= min => return Ok(value),
            _ => writeln!(output, "Invalid input. Please try again.")?,
        }
    }
}

/// Prompt until the answer is `yes` or `no` (case-insensitive). Returns
/// true for `yes`.
pub fn read_yes_no(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> io::Result<bool> {
    loop {
        let answer = read_line(input, output, prompt)?.to_lowercase();
        match answer.as_str() {
            "yes" => return Ok(true),
            "no" => return Ok(false),
            _ => writeln!(output, "Please answer yes or no.")?,
        }
    }
}
