use std::fmt;

use tracing::{info, warn};

use crate::error::RoverError;
use crate::geometry::{rotate_left, rotate_right, translate};
use crate::plateau::Plateau;
use crate::types::{Command, Direction, Position};

/// A rover deployed on the plateau.
///
/// Rovers are immutable: they are built once by [`Rover::new`] or the
/// validating [`Rover::from_lines`], and [`Rover::apply_controls`] hands back
/// a new rover holding the final state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rover {
    id: String,
    position: Position,
    heading: Direction,
    commands: Vec<Command>,
}

impl Rover {
    pub fn new(
        id: impl Into<String>,
        position: Position,
        heading: Direction,
        commands: Vec<Command>,
    ) -> Self {
        Self {
            id: id.into(),
            position,
            heading,
            commands,
        }
    }

    /// Parses a rover from its two input lines.
    ///
    /// `position_line` has the form `"<x> <y> <heading>"`; tokens past the
    /// third are ignored. `commands_line` is a run of `L`/`R`/`M` symbols and
    /// may be empty. Surrounding whitespace on either line is trimmed.
    pub fn from_lines(
        id: impl Into<String>,
        position_line: &str,
        commands_line: &str,
    ) -> Result<Self, RoverError> {
        let (position, heading) = parse_position(position_line)?;
        let commands = Command::parse_sequence(commands_line.trim())?;
        Ok(Self::new(id, position, heading, commands))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Runs every command in order and returns the rover in its final state.
    ///
    /// Rotations only touch the heading, moves only touch the position.
    /// Nothing stops a rover from driving off the plateau: the move is
    /// applied and the remaining commands still run. `observer` sees the
    /// initial state, every intermediate state and the final state.
    pub fn apply_controls<O>(&self, plateau: &Plateau, observer: &mut O) -> Rover
    where
        O: ControlObserver + ?Sized,
    {
        observer.on_start(self, plateau);

        let (position, heading) = self.commands.iter().fold(
            (self.position, self.heading),
            |(position, heading), &command| {
                let next = step(position, heading, command);
                observer.on_command(&self.id, command, next.0, next.1, plateau);
                next
            },
        );

        let finished = Rover {
            id: self.id.clone(),
            position,
            heading,
            commands: self.commands.clone(),
        };
        observer.on_finish(&finished, plateau);
        finished
    }

    /// Final state as `"<x> <y> <heading-code>"`.
    pub fn report_line(&self) -> String {
        format!("{} {} {}", self.position.x, self.position.y, self.heading)
    }
}

impl fmt::Display for Rover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let commands: String = self.commands.iter().map(|c| c.code()).collect();
        write!(
            f,
            "Rover {} at {} heading {} with controls [{}]",
            self.id, self.position, self.heading, commands
        )
    }
}

fn step(position: Position, heading: Direction, command: Command) -> (Position, Direction) {
    match command {
        Command::RotateLeft => (position, rotate_left(heading)),
        Command::RotateRight => (position, rotate_right(heading)),
        Command::MoveForward => (translate(position, heading, 1), heading),
    }
}

fn parse_position(line: &str) -> Result<(Position, Direction), RoverError> {
    let malformed =
        |reason: &str| RoverError::MalformedPositionLine(line.to_string(), reason.to_string());

    let mut tokens = line.split_whitespace();
    let (Some(x), Some(y), Some(code)) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(malformed("expected \"<x> <y> <heading>\""));
    };

    let x = x
        .parse::<i32>()
        .map_err(|e| malformed(&format!("bad x coordinate {x:?}: {e}")))?;
    let y = y
        .parse::<i32>()
        .map_err(|e| malformed(&format!("bad y coordinate {y:?}: {e}")))?;
    let heading = Direction::from_code(code)?;

    Ok((Position::new(x, y), heading))
}

/// Receives progress events while a rover runs its controls.
///
/// All methods default to doing nothing, so an observer only implements the
/// events it cares about.
pub trait ControlObserver {
    fn on_start(&mut self, _rover: &Rover, _plateau: &Plateau) {}

    /// Called after each command with the state it produced.
    fn on_command(
        &mut self,
        _rover_id: &str,
        _command: Command,
        _position: Position,
        _heading: Direction,
        _plateau: &Plateau,
    ) {
    }

    fn on_finish(&mut self, _rover: &Rover, _plateau: &Plateau) {}
}

/// Silent observer for non-verbose runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl ControlObserver for NoopObserver {}

/// Logs every step through `tracing`.
///
/// Moves that leave the plateau are reported at `warn`; they are not undone.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceObserver;

impl ControlObserver for TraceObserver {
    fn on_start(&mut self, rover: &Rover, _plateau: &Plateau) {
        info!(
            rover = rover.id(),
            x = rover.position().x,
            y = rover.position().y,
            heading = %rover.heading(),
            "rover will start moving"
        );
    }

    fn on_command(
        &mut self,
        rover_id: &str,
        command: Command,
        position: Position,
        heading: Direction,
        plateau: &Plateau,
    ) {
        info!(
            rover = rover_id,
            command = %command,
            x = position.x,
            y = position.y,
            heading = %heading,
            "rover executed command"
        );
        if command == Command::MoveForward && !plateau.contains(position) {
            warn!(
                rover = rover_id,
                x = position.x,
                y = position.y,
                "rover left the plateau bounds"
            );
        }
    }

    fn on_finish(&mut self, rover: &Rover, _plateau: &Plateau) {
        info!(
            rover = rover.id(),
            x = rover.position().x,
            y = rover.position().y,
            heading = %rover.heading(),
            "rover finished moving"
        );
    }
}
