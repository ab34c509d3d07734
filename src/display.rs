use std::io::{stdout, Result, Write};

use crossterm::{
    cursor::MoveTo,
    style::{Color, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
    ExecutableCommand,
};

use crate::plateau::Deployment;
use crate::rover::Rover;
use crate::types::Direction;

/// NOTE - Plateaus wider or taller than this are summarised, not drawn
pub const MAX_RENDER_SIZE: i32 = 60;

const ROVER_COLORS: [u8; 6] = [9, 10, 12, 13, 11, 14];

pub struct Display;

impl Display {
    /// Clears the terminal and draws the deployment on stdout.
    pub fn render(deployment: &Deployment) -> Result<()> {
        let mut stdout = stdout();
        stdout.execute(Clear(ClearType::All))?;
        stdout.execute(MoveTo(0, 0))?;
        Self::draw(&mut stdout, deployment)
    }

    /// Draws the plateau grid (north up) followed by one legend line per rover.
    pub fn draw<W: Write>(out: &mut W, deployment: &Deployment) -> Result<()> {
        let plateau = deployment.plateau();
        let rovers = deployment.rovers();

        if plateau.max_x() >= MAX_RENDER_SIZE || plateau.max_y() >= MAX_RENDER_SIZE {
            writeln!(out, "{plateau} is too large to draw")?;
        } else {
            for y in (0..=plateau.max_y()).rev() {
                for x in 0..=plateau.max_x() {
                    // NOTE - later rovers are drawn over earlier ones on the same cell
                    let rover_here = rovers
                        .iter()
                        .enumerate()
                        .rev()
                        .find(|(_, r)| r.position().x == x && r.position().y == y);

                    if let Some((i, rover)) = rover_here {
                        out.execute(SetForegroundColor(Self::color(i)))?;
                        write!(out, "{} ", Self::marker(rover.heading()))?;
                    } else {
                        out.execute(SetForegroundColor(Color::DarkGrey))?;
                        write!(out, "· ")?;
                    }
                }
                out.execute(ResetColor)?;
                writeln!(out)?;
            }
        }

        for (i, rover) in rovers.iter().enumerate() {
            out.execute(SetForegroundColor(Self::color(i)))?;
            writeln!(out, "{}", Self::legend(rover, plateau.contains(rover.position())))?;
        }
        out.execute(ResetColor)?;

        out.flush()
    }

    fn legend(rover: &Rover, inside: bool) -> String {
        let status = if inside { "sur le plateau" } else { "hors du plateau" };
        format!(
            "Rover {}: {} {} | {}",
            rover.id(),
            rover.position(),
            rover.heading(),
            status
        )
    }

    fn marker(heading: Direction) -> char {
        match heading {
            Direction::North => '^',
            Direction::East => '>',
            Direction::South => 'v',
            Direction::West => '<',
        }
    }

    fn color(index: usize) -> Color {
        Color::AnsiValue(ROVER_COLORS[index % ROVER_COLORS.len()])
    }
}
