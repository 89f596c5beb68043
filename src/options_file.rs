use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::diagnostics::DiagnosticSink;
use crate::error::{Error, Result};
use crate::layout::{
    CELL_TAGGERS, GEOMETRIES, PLASMA_MODELS, TIME_STEPPERS, module_options_path, options_path,
};
use crate::request::GenerationRequest;

pub const FILENAME: &str = "template.inputs";

const SEPARATOR_WIDTH: usize = 100;
const HEADER_TITLE: &str = "POTENTIAL CURVE";

/// One options file that may contribute to template.inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsSource {
    pub module: &'static str,
    pub path: PathBuf,
}

impl OptionsSource {
    fn new(module: &'static str, path: PathBuf) -> Self {
        Self { module, path }
    }
}

impl fmt::Display for OptionsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.module, self.path.display())
    }
}

/// Candidate options files in the order they are concatenated
pub fn candidates(req: &GenerationRequest) -> Vec<OptionsSource> {
    let mut sources = vec![
        OptionsSource::new("amr_mesh", options_path(req, "src/amr_mesh", "amr_mesh")),
        OptionsSource::new("driver", options_path(req, "src/driver", "driver")),
        OptionsSource::new(
            "poisson_solver",
            options_path(req, "src/poisson_solver", &req.poisson_solver),
        ),
        OptionsSource::new(
            "cdr_solver",
            options_path(req, "src/cdr_solver", &req.cdr_solver),
        ),
        OptionsSource::new(
            "rte_solver",
            options_path(req, "src/rte_solver", &req.rte_solver),
        ),
        OptionsSource::new(
            "geo_coarsener",
            options_path(req, "src/geometry", "geo_coarsener"),
        ),
        OptionsSource::new(
            "geometry",
            module_options_path(req, GEOMETRIES, &req.geometry),
        ),
        OptionsSource::new(
            "time_stepper",
            module_options_path(req, TIME_STEPPERS, &req.time_stepper),
        ),
        OptionsSource::new(
            "physics",
            module_options_path(req, PLASMA_MODELS, &req.physics_model),
        ),
    ];
    sources.extend(req.cell_tagger.as_ref().map(|tagger| {
        OptionsSource::new(
            "cell_tagger",
            module_options_path(req, CELL_TAGGERS, tagger),
        )
    }));
    sources
}

/// The block every template.inputs starts with
pub fn header(app_name: &str) -> String {
    let separator = format!("# {}\n", "=".repeat(SEPARATOR_WIDTH));
    let mut output = String::new();
    output.push_str(&separator);
    output.push_str(&format!("# {HEADER_TITLE}\n"));
    output.push_str(&separator);
    output.push_str(&format!("{app_name}.potential = 1\n"));
    output.push_str(&format!("{app_name}.basename = pout\n"));
    output.push('\n');
    output
}

/// Stream the header and every existing candidate into `out`.
///
/// Missing candidates go to `sink` and are skipped.
pub fn write_to<W: Write>(
    req: &GenerationRequest,
    sink: &dyn DiagnosticSink,
    out: &mut W,
) -> Result<()> {
    out.write_all(header(&req.app_name).as_bytes())?;
    for source in candidates(req) {
        let read_error = |err| Error::Read {
            path: source.path.clone(),
            source: err,
        };
        if !source.path.try_exists().map_err(read_error)? {
            sink.missing_resource(&source.path);
            continue;
        }
        let contents = fs::read(&source.path).map_err(read_error)?;
        trace!("appending {source}");
        out.write_all(&contents)?;
        out.write_all(b"\n\n")?;
    }
    Ok(())
}

/// Write `<app_dir>/template.inputs`, replacing any previous one.
///
/// The app directory has to exist already.
#[tracing::instrument(level = "info", name = "options_file.write", skip_all, fields(app = %req.app_name))]
pub fn write(req: &GenerationRequest, sink: &dyn DiagnosticSink) -> Result<PathBuf> {
    let path = req.app_dir().join(FILENAME);
    let file = File::create(&path).map_err(|source| Error::Create {
        path: path.clone(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    write_to(req, sink, &mut out)?;
    out.flush()?;
    debug!("wrote {}", xx::file::display_path(&path));
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingSink;
    use crate::request::fixture;
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use tempfile::TempDir;

    fn touch(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn setup() -> (TempDir, GenerationRequest) {
        let home = TempDir::new().unwrap();
        let req = fixture(home.path());
        fs::create_dir_all(req.app_dir()).unwrap();
        (home, req)
    }

    #[test]
    fn test_candidate_order() {
        let req = fixture(Path::new("/opt/plasmac"));
        let paths: Vec<_> = candidates(&req)
            .into_iter()
            .map(|c| c.path.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            paths,
            vec![
                "/opt/plasmac/src/amr_mesh/amr_mesh.options",
                "/opt/plasmac/src/driver/driver.options",
                "/opt/plasmac/src/poisson_solver/poisson_multifluid_gmg.options",
                "/opt/plasmac/src/cdr_solver/cdr_gdnv.options",
                "/opt/plasmac/src/rte_solver/eddington_sp1.options",
                "/opt/plasmac/src/geometry/geo_coarsener.options",
                "/opt/plasmac/geometries/slab/slab.options",
                "/opt/plasmac/physics/cdr_plasma/time_steppers/imex/imex.options",
                "/opt/plasmac/physics/cdr_plasma/plasma_models/airChemistry/airChemistry.options",
            ]
        );
    }

    #[test]
    fn test_cell_tagger_candidate_is_last() {
        let mut req = fixture(Path::new("/opt/plasmac"));
        req.cell_tagger = Some("streamer_tagger".to_string());
        let sources = candidates(&req);
        assert_eq!(sources.len(), 10);
        let last = sources.last().unwrap();
        assert_eq!(last.module, "cell_tagger");
        assert_eq!(
            last.path,
            PathBuf::from(
                "/opt/plasmac/physics/cdr_plasma/cell_taggers/streamer_tagger/streamer_tagger.options"
            )
        );
    }

    #[test]
    fn test_header() {
        let header = header("foo");
        let lines: Vec<_> = header.lines().collect();
        let separator = format!("# {}", "=".repeat(100));
        assert_eq!(
            lines,
            vec![
                separator.as_str(),
                "# POTENTIAL CURVE",
                separator.as_str(),
                "foo.potential = 1",
                "foo.basename = pout",
                "",
            ]
        );
        assert!(header.ends_with("pout\n\n"));
    }

    #[test]
    fn test_only_geometry_exists() {
        let (_home, req) = setup();
        let slab = "slab.length = 1.0\nslab.eps = 4.0\n";
        touch(&req.home_path.join("geometries/slab/slab.options"), slab);
        let sink = RecordingSink::default();

        let path = write(&req, &sink).unwrap();
        let inputs = fs::read_to_string(path).unwrap();
        assert_eq!(inputs, format!("{}{slab}\n\n", header("foo")));
        assert_eq!(sink.missing.borrow().len(), 8);
    }

    #[test]
    fn test_concatenates_in_candidate_order() {
        let (_home, req) = setup();
        let home = &req.home_path;
        // written in reverse order to make sure the output does not follow creation order
        touch(
            &home.join("physics/cdr_plasma/plasma_models/airChemistry/airChemistry.options"),
            "physics",
        );
        touch(&home.join("geometries/slab/slab.options"), "geometry\n");
        touch(&home.join("src/amr_mesh/amr_mesh.options"), "amr\n");
        let sink = RecordingSink::default();

        let mut out = Vec::new();
        write_to(&req, &sink, &mut out).unwrap();
        let inputs = String::from_utf8(out).unwrap();
        let body = inputs.strip_prefix(&header("foo")).unwrap();
        assert_eq!(body, "amr\n\n\ngeometry\n\n\nphysics\n\n");

        let missing = sink.missing.borrow();
        assert_eq!(missing.len(), 6);
        assert!(missing.contains(&home.join("src/driver/driver.options")));
        assert!(!missing.contains(&home.join("geometries/slab/slab.options")));
    }

    #[test]
    fn test_nothing_exists() {
        let (_home, mut req) = setup();
        req.cell_tagger = Some("streamer_tagger".to_string());
        let sink = RecordingSink::default();

        let path = write(&req, &sink).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), header("foo"));
        let missing = sink.missing.borrow();
        let expected: Vec<_> = candidates(&req).into_iter().map(|c| c.path).collect();
        assert_eq!(*missing, expected);
    }

    #[test]
    fn test_contents_are_copied_verbatim() {
        let (_home, req) = setup();
        let raw: &[u8] = b"driver.verbosity = 2 \r\n# \xff not utf-8\n\n";
        let driver = req.home_path.join("src/driver/driver.options");
        fs::create_dir_all(driver.parent().unwrap()).unwrap();
        fs::write(&driver, raw).unwrap();

        let mut out = Vec::new();
        write_to(&req, &RecordingSink::default(), &mut out).unwrap();
        let body = &out[header("foo").len()..];
        assert_eq!(body, [raw, &b"\n\n"[..]].concat().as_slice());
    }

    #[test]
    fn test_write_is_idempotent() {
        let (_home, req) = setup();
        touch(
            &req.home_path.join("src/driver/driver.options"),
            "driver.plot_interval = 10\n",
        );
        let sink = RecordingSink::default();

        let path = write(&req, &sink).unwrap();
        let first = fs::read(&path).unwrap();
        write(&req, &sink).unwrap();
        assert_eq!(first, fs::read(&path).unwrap());
    }

    #[test]
    fn test_unreadable_candidate_is_an_error() {
        let (_home, req) = setup();
        // a directory where the options file should be exists but cannot be read as a file
        let driver = req.home_path.join("src/driver/driver.options");
        fs::create_dir_all(&driver).unwrap();

        let err = write(&req, &RecordingSink::default()).unwrap_err();
        assert!(matches!(err, Error::Read { path, .. } if path == driver));
    }

    #[test]
    fn test_unreachable_candidate_is_an_error() {
        let (_home, req) = setup();
        // src/driver is a plain file, so looking up driver.options fails instead of
        // reporting it missing
        touch(&req.home_path.join("src/driver"), "not a directory\n");
        let sink = RecordingSink::default();

        let mut out = Vec::new();
        let err = write_to(&req, &sink, &mut out).unwrap_err();
        let driver = req.home_path.join("src/driver/driver.options");
        assert!(matches!(err, Error::Read { path, .. } if path == driver));
        // amr_mesh came first and was reported missing; driver was not
        assert_eq!(
            *sink.missing.borrow(),
            vec![req.home_path.join("src/amr_mesh/amr_mesh.options")]
        );
    }

    #[test]
    fn test_write_missing_app_dir() {
        let home = TempDir::new().unwrap();
        let req = fixture(home.path());
        let sink = RecordingSink::default();

        let err = write(&req, &sink).unwrap_err();
        assert!(matches!(err, Error::Create { .. }));
        assert!(sink.missing.borrow().is_empty());
    }
}
