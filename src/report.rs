use std::io::Write;

use serde::Serialize;
use tracing::debug;

use crate::alphabet::normalize;
use crate::ciphers::brute_force::{brute_force_decode, Candidate};
use crate::ciphers::encode;
use crate::config::{OutputFormat, RunConfig};
use crate::error::{CipherError, Result};

/// Everything one run produces: the ciphertext and every brute-force candidate for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub message: String,
    pub key: i64,
    pub ciphertext: String,
    pub candidates: Vec<Candidate>,
}

impl Report {
    pub fn run(config: &RunConfig) -> std::result::Result<Report, CipherError> {
        let message = if config.normalize {
            normalize(&config.message)
        } else {
            config.message.clone()
        };
        let ciphertext = encode(&message, config.key)?;
        let candidates = brute_force_decode(&ciphertext)?.candidates().collect();
        Ok(Report { message, key: config.key, ciphertext, candidates })
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.ciphertext)?;
        writeln!(out)?;
        for candidate in &self.candidates {
            writeln!(out, "{}", candidate.text)?;
        }
        Ok(())
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }

    pub fn write<W: Write>(&self, format: OutputFormat, out: &mut W) -> Result<()> {
        debug!(?format, candidates = self.candidates.len(), "writing report");
        match format {
            OutputFormat::Text => self.write_text(out)?,
            OutputFormat::Json => self.write_json(out)?,
        }
        Ok(())
    }
}

/// Runs `config` and writes the result; nothing is written if the message can't be encoded.
pub fn render<W: Write>(config: &RunConfig, out: &mut W) -> Result<()> {
    let report = Report::run(config)?;
    report.write(config.format, out)
}
