use std::fmt;

use crate::error::RoverError;
use crate::rover::{ControlObserver, NoopObserver, Rover, TraceObserver};
use crate::types::Position;

/// The rectangular grid rovers are deployed on.
///
/// The lower-left corner is always `(0, 0)`. Bounds are descriptive only:
/// nothing in the simulator stops a rover from leaving them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plateau {
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
}

impl Plateau {
    pub fn new(max_x: i32, max_y: i32) -> Self {
        Self {
            min_x: 0,
            min_y: 0,
            max_x,
            max_y,
        }
    }

    /// Parses `"<maxX> <maxY>"`, the plateau's upper-right corner.
    ///
    /// Both values must be non-negative integers; extra tokens are ignored.
    pub fn from_line(line: &str) -> Result<Self, RoverError> {
        let malformed =
            |reason: String| RoverError::MalformedPlateauLine(line.to_string(), reason);

        let mut tokens = line.split_whitespace();
        let (Some(x), Some(y)) = (tokens.next(), tokens.next()) else {
            return Err(malformed("expected \"<maxX> <maxY>\"".to_string()));
        };

        let max_x = x
            .parse::<i32>()
            .map_err(|e| malformed(format!("bad max x {x:?}: {e}")))?;
        let max_y = y
            .parse::<i32>()
            .map_err(|e| malformed(format!("bad max y {y:?}: {e}")))?;
        if max_x < 0 || max_y < 0 {
            return Err(malformed(format!(
                "upper-right corner ({max_x},{max_y}) is below the origin"
            )));
        }

        Ok(Self::new(max_x, max_y))
    }

    pub fn max_x(&self) -> i32 {
        self.max_x
    }

    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    /// Whether `position` lies inside the declared rectangle (edges included).
    pub fn contains(&self, position: Position) -> bool {
        (self.min_x..=self.max_x).contains(&position.x)
            && (self.min_y..=self.max_y).contains(&position.y)
    }

    /// Runs every rover and returns their final states, one line each.
    ///
    /// Lines are `"<x> <y> <heading>"`, in the same order as `rovers`, joined
    /// by `\n` with no trailing newline. With `trace` set every step is
    /// logged through [`TraceObserver`].
    pub fn deploy(&self, rovers: &[Rover], trace: bool) -> String {
        let deployment = if trace {
            self.deploy_with(rovers, &mut TraceObserver)
        } else {
            self.deploy_with(rovers, &mut NoopObserver)
        };
        deployment.to_string()
    }

    /// Runs every rover with a caller-supplied observer.
    pub fn deploy_with<O>(&self, rovers: &[Rover], observer: &mut O) -> Deployment
    where
        O: ControlObserver + ?Sized,
    {
        let rovers = rovers
            .iter()
            .map(|rover| rover.apply_controls(self, &mut *observer))
            .collect();

        Deployment {
            plateau: *self,
            rovers,
        }
    }
}

impl fmt::Display for Plateau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Plateau ({},{}) to ({},{})",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

/// Outcome of a deployment: the rovers in their final states, input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deployment {
    plateau: Plateau,
    rovers: Vec<Rover>,
}

impl Deployment {
    pub fn plateau(&self) -> &Plateau {
        &self.plateau
    }

    pub fn rovers(&self) -> &[Rover] {
        &self.rovers
    }

    /// Rovers whose final position is outside the plateau.
    pub fn stranded(&self) -> impl Iterator<Item = &Rover> {
        self.rovers
            .iter()
            .filter(|rover| !self.plateau.contains(rover.position()))
    }
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rover) in self.rovers.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", rover.report_line())?;
        }
        Ok(())
    }
}
