use std::path::PathBuf;

/// Value of `--cell-tagger` that leaves the tagger module out
pub const NO_CELL_TAGGER: &str = "none";

/// Everything needed to lay out one mini-app directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub home_path: PathBuf,
    pub base_dir: PathBuf,
    pub app_name: String,
    pub dimensionality: u8,
    pub geometry: String,
    pub physics_model: String,
    pub time_stepper: String,
    pub cdr_solver: String,
    pub rte_solver: String,
    pub poisson_solver: String,
    pub cell_tagger: Option<String>,
    pub source_filename: String,
}

impl GenerationRequest {
    pub fn app_dir(&self) -> PathBuf {
        self.home_path.join(&self.base_dir).join(&self.app_name)
    }
}

/// Maps the `none` sentinel to an absent tagger
pub fn parse_cell_tagger(value: &str) -> Option<String> {
    match value {
        NO_CELL_TAGGER => None,
        tagger => Some(tagger.to_string()),
    }
}

#[cfg(test)]
pub(crate) fn fixture(home: &std::path::Path) -> GenerationRequest {
    GenerationRequest {
        home_path: home.to_path_buf(),
        base_dir: PathBuf::from("mini_apps"),
        app_name: "foo".to_string(),
        dimensionality: 2,
        geometry: "slab".to_string(),
        physics_model: "airChemistry".to_string(),
        time_stepper: "imex".to_string(),
        cdr_solver: "cdr_gdnv".to_string(),
        rte_solver: "eddington_sp1".to_string(),
        poisson_solver: "poisson_multifluid_gmg".to_string(),
        cell_tagger: None,
        source_filename: "main".to_string(),
    }
}
