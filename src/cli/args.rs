use std::path::PathBuf;

use crate::request::{GenerationRequest, parse_cell_tagger};
use crate::{Result, env};

/// Flags shared by every command that describes a mini-app
#[derive(Debug, Clone, clap::Args)]
pub struct RequestArgs {
    /// Root of the framework checkout
    ///
    /// Defaults to $PLASMAC_HOME.
    #[clap(long, value_name = "PATH", verbatim_doc_comment)]
    pub plasmac_home: Option<PathBuf>,
    /// Directory under the framework root that holds the app
    #[clap(long, value_name = "PATH", default_value = "mini_apps")]
    pub base_dir: PathBuf,
    /// Name of the app directory
    #[clap(long, default_value = "mini_app")]
    pub app_name: String,
    /// File containing int main()
    #[clap(long, default_value = "main")]
    pub filename: String,
    /// Spatial dimension
    #[clap(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=3))]
    pub dim: u8,
    /// Geometry module under geometries/
    #[clap(long, default_value = "regular_geometry")]
    pub geometry: String,
    /// Plasma model under physics/cdr_plasma/plasma_models/
    #[clap(long, default_value = "morrow_lowke")]
    pub physics: String,
    /// Time stepper under physics/cdr_plasma/time_steppers/
    #[clap(long, default_value = "rk2")]
    pub time_stepper: String,
    /// Convection-diffusion-reaction solver
    #[clap(long, default_value = "cdr_gdnv")]
    pub cdr_solver: String,
    /// Radiative transfer solver
    #[clap(long, default_value = "eddington_sp1")]
    pub rte_solver: String,
    /// Poisson solver
    #[clap(long, default_value = "poisson_multifluid_gmg")]
    pub poisson_solver: String,
    /// Cell tagger under physics/cdr_plasma/cell_taggers/, or "none"
    #[clap(long, default_value = "none")]
    pub cell_tagger: String,
}

impl RequestArgs {
    pub fn request(&self) -> Result<GenerationRequest> {
        let home_path = self
            .plasmac_home
            .clone()
            .or_else(|| env::PLASMAC_HOME.clone())
            .ok_or_else(|| eyre::eyre!("PLASMAC_HOME is not set, pass --plasmac-home"))?;
        Ok(GenerationRequest {
            home_path,
            base_dir: self.base_dir.clone(),
            app_name: self.app_name.clone(),
            dimensionality: self.dim,
            geometry: self.geometry.clone(),
            physics_model: self.physics.clone(),
            time_stepper: self.time_stepper.clone(),
            cdr_solver: self.cdr_solver.clone(),
            rte_solver: self.rte_solver.clone(),
            poisson_solver: self.poisson_solver.clone(),
            cell_tagger: parse_cell_tagger(&self.cell_tagger),
            source_filename: self.filename.clone(),
        })
    }
}
