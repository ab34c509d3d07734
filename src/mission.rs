//! # Mission Input Module
//!
//! Reads the textual mission description: one plateau line followed by a
//! pair of lines per rover (position then controls).
//!
//! ```text
//! 5 5
//! 1 2 N
//! LMLMLMLMM
//! 3 3 E
//! MMRMMRMRRM
//! ```
//!
//! Parsing is fail-fast: the first bad line aborts the whole mission and the
//! error carries its 1-based line number.

use crate::error::RoverError;
use crate::plateau::Plateau;
use crate::rover::Rover;

/// A parsed mission, ready to deploy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mission {
    pub plateau: Plateau,
    pub rovers: Vec<Rover>,
}

impl Mission {
    /// Parses a complete mission description.
    ///
    /// Rovers get sequential ids `R1`, `R2`, ... in input order. A position
    /// line without its command line is an error; a blank command line is an
    /// empty command list. Blank lines trailing the last rover are skipped.
    pub fn parse(input: &str) -> Result<Self, RoverError> {
        let lines: Vec<(usize, &str)> = input
            .lines()
            .enumerate()
            .map(|(i, text)| (i + 1, text))
            .collect();

        let (line, text) = *lines.first().ok_or(RoverError::MissingPlateauLine)?;
        let plateau = Plateau::from_line(text).map_err(|e| e.at_line(line, text))?;

        let mut rovers = Vec::new();
        let mut rest = &lines[1..];
        while let Some((&(position_no, position_line), tail)) = rest.split_first() {
            // NOTE - blank lines after the last rover are padding, not a rover
            if rest.iter().all(|(_, blank)| blank.trim().is_empty()) {
                break;
            }

            let id = format!("R{}", rovers.len() + 1);
            let Some((&(commands_no, commands_line), tail)) = tail.split_first() else {
                return Err(RoverError::MissingCommandLine(id).at_line(position_no, position_line));
            };

            // NOTE - a bad command code is attributed to the command line
            let rover = match Rover::from_lines(id, position_line, commands_line) {
                Ok(rover) => rover,
                Err(e @ RoverError::InvalidCommandCode(_)) => {
                    return Err(e.at_line(commands_no, commands_line));
                }
                Err(e) => return Err(e.at_line(position_no, position_line)),
            };
            rovers.push(rover);
            rest = tail;
        }

        Ok(Self { plateau, rovers })
    }

    /// Deploys every rover; see [`Plateau::deploy`].
    pub fn deploy(&self, trace: bool) -> String {
        self.plateau.deploy(&self.rovers, trace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, Position};

    const SAMPLE: &str = "5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM\n";

    #[test]
    fn parses_sample_mission() {
        let mission = Mission::parse(SAMPLE).unwrap();
        assert_eq!(mission.plateau, Plateau::new(5, 5));
        assert_eq!(mission.rovers.len(), 2);
        assert_eq!(mission.rovers[0].id(), "R1");
        assert_eq!(mission.rovers[1].id(), "R2");
        assert_eq!(mission.rovers[1].position(), Position::new(3, 3));
        assert_eq!(mission.rovers[1].heading(), Direction::East);
        assert_eq!(mission.deploy(false), "1 3 N\n5 1 E");
    }

    #[test]
    fn plateau_only_mission_has_no_rovers() {
        let mission = Mission::parse("3 4").unwrap();
        assert!(mission.rovers.is_empty());
        assert_eq!(mission.deploy(false), "");
    }

    #[test]
    fn blank_command_line_means_no_commands() {
        let mission = Mission::parse("5 5\n2 2 W\n\n").unwrap();
        assert!(mission.rovers[0].commands().is_empty());
        assert_eq!(mission.deploy(false), "2 2 W");
    }

    #[test]
    fn trailing_blank_lines_are_ignored() {
        let mission = Mission::parse("5 5\n1 2 N\nM\n\n   \n").unwrap();
        assert_eq!(mission.rovers.len(), 1);
        assert_eq!(mission.deploy(false), "1 3 N");
    }

    #[test]
    fn rover_at_the_integer_limit_still_deploys() {
        let mission = Mission::parse("5 5\n2147483647 0 E\nM\n").unwrap();
        assert_eq!(mission.deploy(false), "-2147483648 0 E");
    }

    #[test]
    fn empty_input_is_missing_plateau() {
        assert_eq!(Mission::parse("").unwrap_err(), RoverError::MissingPlateauLine);
    }

    #[test]
    fn dangling_position_line_is_an_error() {
        let err = Mission::parse("5 5\n1 2 N\nM\n3 3 E").unwrap_err();
        match &err {
            RoverError::Line { line, text, .. } => {
                assert_eq!(*line, 4);
                assert_eq!(text, "3 3 E");
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(err.root(), &RoverError::MissingCommandLine("R2".into()));
    }

    #[test]
    fn errors_point_at_the_offending_line() {
        let cases = [
            ("5 x\n1 2 N\nM", 1),
            ("5 5\n1 2 Q\nM", 2),
            ("5 5\n1 2 N\nMMXM", 3),
            ("5 5\n1 2 N\nM\n1 two N\nM", 4),
        ];
        for (input, expected) in cases {
            match Mission::parse(input).unwrap_err() {
                RoverError::Line { line, .. } => assert_eq!(line, expected, "{input:?}"),
                other => panic!("{input:?} gave {other:?}"),
            }
        }
    }

    #[test]
    fn root_error_keeps_its_kind() {
        let err = Mission::parse("5 5\n1 2 Q\nM").unwrap_err();
        assert_eq!(err.root(), &RoverError::InvalidDirectionCode("Q".into()));
        assert!(err.to_string().starts_with("line 2"));
    }
}
