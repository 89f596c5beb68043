use std::io::Write;

use crate::Result;
use crate::cli::args::RequestArgs;
use crate::diagnostics::LogSink;
use crate::options_file;

/// Writes template.inputs into an existing app directory
#[derive(Debug, clap::Args)]
pub struct Inputs {
    /// Print the options instead of writing them
    #[clap(long)]
    stdout: bool,
    #[clap(flatten)]
    pub(super) request: RequestArgs,
}

impl Inputs {
    pub fn run(&self) -> Result<()> {
        let req = self.request.request()?;
        if self.stdout {
            let mut out = std::io::stdout().lock();
            options_file::write_to(&req, &LogSink, &mut out)?;
            out.flush()?;
            return Ok(());
        }
        let path = options_file::write(&req, &LogSink)?;
        println!("Created {}", path.display());
        Ok(())
    }
}
