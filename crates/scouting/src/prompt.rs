use std::io::{BufRead, Write};

use epa::TeamNumber;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("input closed before the {0} was entered")]
    EndOfInput(&'static str),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Four teams to predict a match for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matchup {
    pub red: [TeamNumber; 2],
    pub blue: [TeamNumber; 2],
}

/// Asks the operator for the blue alliance first, then the red alliance.
pub fn read_matchup<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Matchup, Error> {
    let blue1 = read_team(input, output, "Blue Alliance Team 1")?;
    let blue2 = read_team(input, output, "Blue Alliance Team 2")?;
    let red1 = read_team(input, output, "Red Alliance Team 1")?;
    let red2 = read_team(input, output, "Red Alliance Team 2")?;

    Ok(Matchup {
        red: [red1, red2],
        blue: [blue1, blue2],
    })
}

/// Prompts for `label` until a team number is entered.
fn read_team<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &'static str,
) -> Result<TeamNumber, Error> {
    let mut line = String::new();
    loop {
        write!(output, "Enter the {label}: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::EndOfInput(label));
        }

        match line.trim().parse() {
            Ok(team) => return Ok(team),
            Err(_) => writeln!(output, "`{}` is not a team number", line.trim())?,
        }
    }
}
