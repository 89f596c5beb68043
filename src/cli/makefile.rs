use crate::Result;
use crate::build_file;
use crate::cli::args::RequestArgs;

/// Writes GNUmakefile into an existing app directory
#[derive(Debug, clap::Args)]
pub struct Makefile {
    /// Print the makefile instead of writing it
    #[clap(long)]
    stdout: bool,
    #[clap(flatten)]
    pub(super) request: RequestArgs,
}

impl Makefile {
    pub fn run(&self) -> Result<()> {
        let req = self.request.request()?;
        if self.stdout {
            print!("{}", build_file::render(&req));
            return Ok(());
        }
        let path = build_file::write(&req)?;
        println!("Created {}", path.display());
        Ok(())
    }
}
