//! One-shot batch runner.
//!
//! Reads a request document, builds the catalogue, answers every stat
//! request and writes the response array as JSON.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;

use crate::handler::{RequestHandler, StatResponse};
use crate::input::{self, InputError};
use crate::render::{MapRenderer, RenderSettings};

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The input document could not be loaded
    #[error(transparent)]
    Input(#[from] InputError),

    /// Opening or writing a file failed
    #[error("I/O error on {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the response document failed
    #[error("failed to write responses: {0}")]
    Output(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Where to read requests from and write responses to.
///
/// `None` means the standard stream.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(
    name = "transit-map",
    version,
    about = "Answer transit catalogue queries and render the route map as SVG"
)]
pub struct RunConfig {
    /// Request document (JSON); stdin if omitted
    pub input: Option<PathBuf>,

    /// File for the response array; stdout if omitted
    pub output: Option<PathBuf>,
}

/// Answer every stat request in a document read from `reader`.
pub fn answer<R: Read>(reader: R) -> Result<Vec<StatResponse>, RunError> {
    let document = input::read_document(reader)?;
    let catalogue = input::build_catalogue(&document.base_requests)?;
    let renderer = MapRenderer::new(RenderSettings::from(document.render_settings));

    info!(
        stops = catalogue.stop_count(),
        buses = catalogue.bus_count(),
        requests = document.stat_requests.len(),
        "answering stat requests"
    );

    let handler = RequestHandler::new(&catalogue, &renderer);
    Ok(handler.handle_all(&document.stat_requests))
}

/// Read requests from `reader` and write the response array to `writer`.
pub fn process<R: Read, W: Write>(reader: R, mut writer: W) -> Result<(), RunError> {
    let responses = answer(reader)?;
    serde_json::to_writer_pretty(&mut writer, &responses)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Process a document held in memory and return the response text.
pub fn run_str(json: &str) -> Result<String, RunError> {
    let mut out = Vec::new();
    process(json.as_bytes(), &mut out)?;
    // serde_json only emits UTF-8
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Run with the files or standard streams named by `config`.
pub fn run(config: &RunConfig) -> Result<(), RunError> {
    let reader: Box<dyn Read> = match &config.input {
        Some(path) => Box::new(BufReader::new(open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    let writer: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    process(reader, writer)
}

fn open(path: &Path) -> Result<File, RunError> {
    File::open(path).map_err(|source| RunError::File {
        path: path.to_path_buf(),
        source,
    })
}

fn create(path: &Path) -> Result<File, RunError> {
    File::create(path).map_err(|source| RunError::File {
        path: path.to_path_buf(),
        source,
    })
}
