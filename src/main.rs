#[macro_use]
extern crate log;

pub use eyre::Result;

mod build_file;
mod cli;
mod diagnostics;
mod env;
mod error;
mod layout;
mod logger;
mod options_file;
mod request;
mod trace;

fn main() -> Result<()> {
    color_eyre::install()?;
    cli::run()
}
