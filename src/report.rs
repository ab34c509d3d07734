//! # Deployment Report Module
//!
//! Serializable snapshot of a finished deployment, used for the JSON output
//! of the command-line driver.
//!
//! ## Data Structures
//!
//! - [`PlateauData`]: the declared bounds of the plateau
//! - [`RoverData`]: one rover's final state
//! - [`DeploymentReport`]: everything above, rovers in input order
//!
//! Bounds are never enforced during a run, so each rover carries an
//! `inside_plateau` flag telling whether it finished on the grid.

use serde::{Deserialize, Serialize};

use crate::plateau::{Deployment, Plateau};
use crate::rover::Rover;
use crate::types::Direction;

/// Declared bounds of the plateau.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlateauData {
    pub max_x: i32,
    pub max_y: i32,
}

/// Final state of a single rover.
///
/// # Examples
///
/// ```rust
/// use mars_rover::report::RoverData;
/// use mars_rover::types::Direction;
///
/// let rover = RoverData {
///     id: "R1".to_string(),
///     x: 1, y: 3,
///     heading: Direction::North,
///     commands: "LMLMLMLMM".to_string(),
///     inside_plateau: true,
/// };
///
/// let json = serde_json::to_string(&rover).unwrap();
/// assert!(json.contains("\"heading\":\"N\""));
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RoverData {
    /// Sequential identifier assigned at parse time (`R1`, `R2`, ...)
    pub id: String,

    pub x: i32,
    pub y: i32,

    /// Heading as its single-character code
    #[serde(with = "heading_code")]
    pub heading: Direction,

    /// The controls the rover executed, as they appeared in the input
    pub commands: String,

    /// False when the rover ended up outside the declared plateau
    pub inside_plateau: bool,
}

/// Complete result of a deployment.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DeploymentReport {
    pub plateau: PlateauData,
    pub rovers: Vec<RoverData>,
    /// Number of rovers that finished outside the plateau
    pub stranded: usize,
}

/// Fonction utilitaire : convertir Plateau vers PlateauData
pub fn create_plateau_data(plateau: &Plateau) -> PlateauData {
    PlateauData {
        max_x: plateau.max_x(),
        max_y: plateau.max_y(),
    }
}

/// Fonction utilitaire : convertir Rover vers RoverData
pub fn create_rover_data(rover: &Rover, plateau: &Plateau) -> RoverData {
    RoverData {
        id: rover.id().to_string(),
        x: rover.position().x,
        y: rover.position().y,
        heading: rover.heading(),
        commands: rover.commands().iter().map(|c| c.code()).collect(),
        inside_plateau: plateau.contains(rover.position()),
    }
}

/// Fonction principale : créer le rapport complet d'un déploiement
pub fn create_deployment_report(deployment: &Deployment) -> DeploymentReport {
    let plateau = deployment.plateau();

    let rovers: Vec<RoverData> = deployment
        .rovers()
        .iter()
        .map(|rover| create_rover_data(rover, plateau))
        .collect();

    DeploymentReport {
        plateau: create_plateau_data(plateau),
        stranded: rovers.iter().filter(|r| !r.inside_plateau).count(),
        rovers,
    }
}

mod heading_code {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::types::Direction;

    pub fn serialize<S: Serializer>(heading: &Direction, serializer: S) -> Result<S::Ok, S::Error> {
        let mut buf = [0u8; 4];
        serializer.serialize_str(heading.code().encode_utf8(&mut buf))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Direction, D::Error> {
        let code = String::deserialize(deserializer)?;
        Direction::from_code(&code).map_err(D::Error::custom)
    }
}
