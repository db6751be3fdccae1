use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Read, Stdin};
use std::path::Path;

use anyhow::{Context, Result};

/// Returns `true` if stdin is a terminal (interactive).
pub fn stdin_is_tty() -> bool {
    io::stdin().is_terminal()
}

/// Returns `true` if stdout is a terminal (interactive).
pub fn stdout_is_tty() -> bool {
    io::stdout().is_terminal()
}

/// One equation's text together with where it came from, for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquationSource {
    pub origin: String,
    pub text: String,
}

pub fn sources_from_args(equations: &[String]) -> Vec<EquationSource> {
    equations
        .iter()
        .enumerate()
        .map(|(i, text)| EquationSource {
            origin: format!("argument {}", i + 1),
            text: text.clone(),
        })
        .collect()
}

/// Reads one equation per line, skipping blank lines and `#` comments.
pub fn read_sources(reader: impl BufRead, name: &str) -> Result<Vec<EquationSource>> {
    let mut sources = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {} of {}", i + 1, name))?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        sources.push(EquationSource {
            origin: format!("{} line {}", name, i + 1),
            text: text.to_string(),
        });
    }
    Ok(sources)
}

pub enum InputSource {
    File(BufReader<File>),
    Stdin(BufReader<Stdin>),
}

impl Read for InputSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            InputSource::File(r) => r.read(buf),
            InputSource::Stdin(r) => r.read(buf),
        }
    }
}

impl BufRead for InputSource {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            InputSource::File(r) => r.fill_buf(),
            InputSource::Stdin(r) => r.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            InputSource::File(r) => r.consume(amt),
            InputSource::Stdin(r) => r.consume(amt),
        }
    }
}

pub fn open_input(path: Option<&Path>) -> Result<InputSource> {
    match path {
        Some(p) => {
            let file = File::open(p)
                .with_context(|| format!("Failed to open equation file: {}", p.display()))?;
            Ok(InputSource::File(BufReader::new(file)))
        }
        None => Ok(InputSource::Stdin(BufReader::new(io::stdin()))),
    }
}
