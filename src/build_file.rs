use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::layout::{
    CHOMBO_LIB, DEFAULT_TARGET, HOME_VAR, LIB_NAMES, LIB_NAMES_FIRST_LINE, MAKE_DEFS,
    MAKE_EXAMPLE, src_dirs,
};
use crate::request::GenerationRequest;

pub const FILENAME: &str = "GNUmakefile";

/// Generate the GNUmakefile content for a request
pub fn render(req: &GenerationRequest) -> String {
    let home = req.home_path.display();
    let mut output = String::new();

    output.push_str("# Chombo and chombo-streamer directories\n");
    output.push_str(&format!("{HOME_VAR} := {home}\n"));
    output.push_str(&format!("CHOMBO_HOME   := {home}/{CHOMBO_LIB}\n"));
    output.push('\n');
    output.push_str(&format!("include $(CHOMBO_HOME)/{MAKE_DEFS}\n"));
    output.push('\n');

    output.push_str("USE_EB=TRUE\n");
    output.push_str("USE_MF=TRUE\n");
    output.push_str(&format!("DIM={}\n", req.dimensionality));
    output.push_str("\n\n");

    output.push_str("# Base file containing int main()\n");
    output.push_str(&format!("ebase := {}\n", req.source_filename));
    output.push('\n');

    let (first, rest) = LIB_NAMES.split_at(LIB_NAMES_FIRST_LINE);
    output.push_str(&format!("LibNames:= {} \\\n", first.join(" ")));
    output.push_str(&format!("\t{}\n", rest.join(" ")));
    output.push_str("\n\n");

    output.push_str("# Target\n");
    output.push_str(DEFAULT_TARGET);
    output.push_str("\n\n");

    let dirs = src_dirs(req)
        .iter()
        .map(|dir| format!("$({HOME_VAR})/{dir}"))
        .collect::<Vec<_>>()
        .join(" \\\n\t");
    output.push_str("base_dir = .\n");
    output.push_str(&format!("src_dirs = {dirs}\n"));
    output.push_str("\n\n");

    output.push_str(&format!("include $(CHOMBO_HOME)/{MAKE_EXAMPLE}\n"));
    output.push('\n');

    output
}

/// Write `<app_dir>/GNUmakefile`, replacing any previous one.
///
/// The app directory has to exist already.
#[tracing::instrument(level = "info", name = "build_file.write", skip_all, fields(app = %req.app_name))]
pub fn write(req: &GenerationRequest) -> Result<PathBuf> {
    let path = req.app_dir().join(FILENAME);
    let file = File::create(&path).map_err(|source| Error::Create {
        path: path.clone(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    out.write_all(render(req).as_bytes())?;
    out.flush()?;
    debug!("wrote {}", xx::file::display_path(&path));
    Ok(path)
}
