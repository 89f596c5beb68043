use std::path::PathBuf;

use console::style;

use crate::Result;
use crate::cli::args::RequestArgs;
use crate::options_file;
use crate::request::GenerationRequest;

/// Lists the options files template.inputs is assembled from
#[derive(Debug, clap::Args)]
pub struct Candidates {
    /// Only list files that exist
    #[clap(long)]
    existing: bool,
    #[clap(flatten)]
    pub(super) request: RequestArgs,
}

impl Candidates {
    pub fn run(&self) -> Result<()> {
        let req = self.request.request()?;
        for (module, exists, path) in self.rows(&req)? {
            let mark = if exists {
                style(format!("{:<8}", "found")).green()
            } else {
                style(format!("{:<8}", "missing")).dim()
            };
            println!("{module:<16} {mark} {}", xx::file::display_path(&path));
        }
        Ok(())
    }

    /// Candidate module, whether its file exists, and its path
    fn rows(&self, req: &GenerationRequest) -> Result<Vec<(&'static str, bool, PathBuf)>> {
        let mut rows = vec![];
        for source in options_file::candidates(req) {
            let exists = source.path.try_exists()?;
            if self.existing && !exists {
                continue;
            }
            rows.push((source.module, exists, source.path));
        }
        Ok(rows)
    }
}
