//! Glue between configuration, mission input and output formats.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{Config, ConfigError, OutputFormat};
use crate::display::Display;
use crate::error::RoverError;
use crate::mission::Mission;
use crate::plateau::Deployment;
use crate::report::create_deployment_report;
use crate::rover::{NoopObserver, TraceObserver};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read mission file {path}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid mission: {0}")]
    Mission(#[from] RoverError),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to draw plateau: {0}")]
    Render(#[source] std::io::Error),
}

/// Reads the mission at `path`, deploys it and returns the formatted result.
pub fn run(config: &Config, path: &Path) -> Result<String, AppError> {
    let input = std::fs::read_to_string(path).map_err(|source| AppError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "mission file loaded");

    let (deployment, output) = execute(config, &input)?;

    if config.render {
        Display::render(&deployment).map_err(AppError::Render)?;
    }

    Ok(output)
}

/// Parses and deploys a mission held in memory.
pub fn execute(config: &Config, input: &str) -> Result<(Deployment, String), AppError> {
    let mission = Mission::parse(input)?;

    info!(plateau = %mission.plateau, rovers = mission.rovers.len(), "mission parsed");
    for rover in &mission.rovers {
        debug!("{rover}");
    }

    let deployment = if config.trace {
        mission.plateau.deploy_with(&mission.rovers, &mut TraceObserver)
    } else {
        mission.plateau.deploy_with(&mission.rovers, &mut NoopObserver)
    };

    let stranded = deployment.stranded().count();
    if stranded > 0 {
        warn!(stranded, "some rovers finished outside the plateau");
    }
    info!("all rovers finished moving");

    let output = match config.format {
        OutputFormat::Text => deployment.to_string(),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&create_deployment_report(&deployment))?
        }
    };

    Ok((deployment, output))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM\n";

    fn quiet(format: OutputFormat) -> Config {
        Config {
            trace: false,
            format,
            ..Config::default()
        }
    }

    #[test]
    fn text_output_matches_reference() {
        let (_, output) = execute(&quiet(OutputFormat::Text), SAMPLE).unwrap();
        assert_eq!(output, "1 3 N\n5 1 E");
    }

    #[test]
    fn json_output_lists_rovers() {
        let (_, output) = execute(&quiet(OutputFormat::Json), SAMPLE).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["rovers"][1]["id"], "R2");
        assert_eq!(json["rovers"][1]["x"], 5);
        assert_eq!(json["rovers"][1]["heading"], "E");
        assert_eq!(json["stranded"], 0);
    }

    #[test]
    fn one_bad_rover_aborts_the_batch() {
        let input = "5 5\n1 2 N\nM\n3 3 E\nMMX\n";
        let err = execute(&quiet(OutputFormat::Text), input).unwrap_err();
        match err {
            AppError::Mission(e) => assert_eq!(e.root(), &RoverError::InvalidCommandCode('X')),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_reported_with_its_path() {
        let err = run(&quiet(OutputFormat::Text), Path::new("no/such/mission.txt")).unwrap_err();
        assert!(err.to_string().contains("no/such/mission.txt"));
    }
}
