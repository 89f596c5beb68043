//! Directory and file conventions of the framework tree.
//!
//! Everything the generators hardcode lives here so the contract with the
//! framework can be read in one place.

use std::path::PathBuf;

use crate::request::GenerationRequest;

/// Make variable holding the framework root inside the build file
pub const HOME_VAR: &str = "PLASMAC_HOME";
/// Chombo library root, relative to the framework root
pub const CHOMBO_LIB: &str = "Chombo/lib";
pub const MAKE_DEFS: &str = "mk/Make.defs";
pub const MAKE_EXAMPLE: &str = "mk/Make.example";
pub const DEFAULT_TARGET: &str = "all: all-test";

/// Chombo libraries linked into every mini-app
pub const LIB_NAMES: &[&str] = &[
    "MFElliptic",
    "MFTools",
    "EBAMRTimeDependent",
    "EBAMRElliptic",
    "EBAMRTools",
    "EBTools",
    "AMRElliptic",
    "AMRTools",
    "AMRTimeDependent",
    "BaseTools",
    "BoxTools",
    "Workshop",
    "ParticleTools",
];

/// Number of entries from LIB_NAMES on the first `LibNames` line
pub const LIB_NAMES_FIRST_LINE: usize = 8;

/// Framework source directories compiled into every mini-app
pub const CORE_SRC_DIRS: &[&str] = &[
    "src",
    "src/amr_mesh",
    "src/cdr_solver",
    "src/cell_tagger",
    "src/elliptic",
    "src/geometry",
    "src/global",
    "src/driver",
    "src/poisson_solver",
    "src/rte_solver",
    "src/sigma_solver",
    // kept ahead of geometry so an optional cell tagger lands right after it
    "physics/cdr_plasma",
];

pub const GEOMETRIES: &str = "geometries";
pub const CELL_TAGGERS: &str = "physics/cdr_plasma/cell_taggers";
pub const TIME_STEPPERS: &str = "physics/cdr_plasma/time_steppers";
pub const PLASMA_MODELS: &str = "physics/cdr_plasma/plasma_models";

pub const OPTIONS_EXT: &str = "options";

/// Source directories for a request, relative to the framework root.
///
/// The fixed prefix comes first, then geometry, the optional cell tagger,
/// time stepper and plasma model in that order.
pub fn src_dirs(req: &GenerationRequest) -> Vec<String> {
    let mut dirs: Vec<String> = CORE_SRC_DIRS.iter().map(|d| d.to_string()).collect();
    dirs.push(format!("{GEOMETRIES}/{}", req.geometry));
    dirs.extend(
        req.cell_tagger
            .as_ref()
            .map(|tagger| format!("{CELL_TAGGERS}/{tagger}")),
    );
    dirs.push(format!("{TIME_STEPPERS}/{}", req.time_stepper));
    dirs.push(format!("{PLASMA_MODELS}/{}", req.physics_model));
    dirs
}

/// `<home>/<dir>/<name>.options`
pub fn options_path(req: &GenerationRequest, dir: &str, name: &str) -> PathBuf {
    req.home_path.join(dir).join(format!("{name}.{OPTIONS_EXT}"))
}

/// `<home>/<dir>/<name>/<name>.options`, the convention for pluggable modules
pub fn module_options_path(req: &GenerationRequest, dir: &str, name: &str) -> PathBuf {
    req.home_path
        .join(dir)
        .join(name)
        .join(format!("{name}.{OPTIONS_EXT}"))
}
