use crate::Result;
use crate::cli::args::RequestArgs;
use crate::diagnostics::LogSink;
use crate::{build_file, options_file};

/// Creates the app directory and writes GNUmakefile and template.inputs
#[derive(Debug, clap::Args)]
#[clap(visible_alias = "new")]
pub struct Setup {
    #[clap(flatten)]
    pub(super) request: RequestArgs,
}

impl Setup {
    pub fn run(&self) -> Result<()> {
        let req = self.request.request()?;
        let app_dir = req.app_dir();
        if !app_dir.exists() {
            xx::file::mkdirp(&app_dir)?;
            debug!("created {}", xx::file::display_path(&app_dir));
        }

        let makefile = build_file::write(&req)?;
        println!("Created {}", makefile.display());
        let inputs = options_file::write(&req, &LogSink)?;
        println!("Created {}", inputs.display());

        Ok(())
    }
}
