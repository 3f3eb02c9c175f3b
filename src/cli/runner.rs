//! CLI runner - executes the inference pipeline

use crate::cli::commands::Cli;
use crate::error::Result;
use crate::loader::load_document;
use crate::protocol::{RequestReader, ResponseWriter};
use crate::schema::{build_columns, ColumnDescriptor};
use std::io::{self, Read, Write};
use std::time::Instant;

/// CLI runner
pub struct Runner {
    reader: RequestReader,
    writer: ResponseWriter,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self {
            reader: RequestReader::new().with_path_key(cli.path_key),
            writer: ResponseWriter::new().with_columns_key(cli.columns_key),
        }
    }

    /// Run against the process stdin and stdout
    pub fn run(&self) -> Result<()> {
        let stdin = io::stdin().lock();
        let stdout = io::stdout().lock();
        self.run_with(stdin, stdout)
    }

    /// Run against arbitrary input and output streams.
    ///
    /// `output` is only written once every earlier stage has succeeded.
    pub fn run_with<R: Read, W: Write>(&self, input: R, output: W) -> Result<()> {
        let start = Instant::now();

        let columns = self.infer(input)?;
        self.writer.write_to(output, &columns)?;

        tracing::info!(
            columns = columns.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Inferred columns"
        );
        Ok(())
    }

    /// Read the request, load the document and build its columns
    pub fn infer<R: Read>(&self, input: R) -> Result<Vec<ColumnDescriptor>> {
        let request = self.reader.read_from(input)?;
        let document = load_document(&request.path)?;
        Ok(build_columns(&document))
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new(Cli::default())
    }
}
