//! Textual command parsing
//!
//! Grammar (case-insensitive):
//! - `PLACE WORD ROW COL DIR [BLANKS]` with row 1-15, column A-O, DIR H or V
//! - `PLACE WORD DIR [BLANKS]` on the first move only, anchored at center
//! - `SWAP LETTERS`, where `*` swaps a wildcard
//! - `PASS`, `UNDO`, `REDO`, `EXIT`

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Place {
        word: String,
        row: usize,
        col: usize,
        horizontal: bool,
        blanks: Option<String>,
    },
    Swap(String),
    Pass,
    Undo,
    Redo,
    Exit,
}

/// Why an input line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    Unknown(String),
    Usage(&'static str),
    BadRow,
    BadCol,
    BadDirection,
}

impl ParseError {
    /// A user-facing description of the problem.
    pub fn message(&self) -> String {
        match self {
            ParseError::Empty => "Type a command: PLACE, SWAP, PASS, UNDO, REDO, EXIT".to_string(),
            ParseError::Unknown(cmd) => format!("Unknown command: {}", cmd),
            ParseError::Usage(usage) => format!("Usage: {}", usage),
            ParseError::BadRow => "Row must be 1-15.".to_string(),
            ParseError::BadCol => "Column must be A-O.".to_string(),
            ParseError::BadDirection => "Direction must be H or V.".to_string(),
        }
    }
}

const CENTER_ROW: usize = 7;
const CENTER_COL: usize = 7;

/// Parse one input line. `first_move` enables the short PLACE form that
/// anchors the word at the center cell.
pub fn parse(input: &str, first_move: bool) -> Result<Command, ParseError> {
    let input = input.trim().to_uppercase();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }
    let parts: Vec<&str> = input.split_whitespace().collect();

    match parts[0] {
        "PASS" => Ok(Command::Pass),
        "UNDO" => Ok(Command::Undo),
        "REDO" => Ok(Command::Redo),
        "EXIT" | "QUIT" => Ok(Command::Exit),
        "SWAP" => {
            if parts.len() != 2 {
                return Err(ParseError::Usage("SWAP LETTERS"));
            }
            Ok(Command::Swap(parts[1].to_string()))
        }
        "PLACE" => parse_place(&parts, first_move),
        other => Err(ParseError::Unknown(other.to_string())),
    }
}

fn parse_place(parts: &[&str], first_move: bool) -> Result<Command, ParseError> {
    if first_move && (parts.len() == 3 || parts.len() == 4) {
        // PLACE WORD DIR [BLANKS]
        let horizontal = parse_direction(parts[2])?;
        return Ok(Command::Place {
            word: parts[1].to_string(),
            row: CENTER_ROW,
            col: CENTER_COL,
            horizontal,
            blanks: parts.get(3).map(|s| s.to_string()),
        });
    }

    if parts.len() != 5 && parts.len() != 6 {
        return Err(ParseError::Usage("PLACE WORD ROW COL DIR [BLANKS]"));
    }
    let row = parts[2]
        .parse::<usize>()
        .ok()
        .filter(|r| (1..=15).contains(r))
        .ok_or(ParseError::BadRow)?
        - 1;
    let col = parse_column(parts[3])?;
    let horizontal = parse_direction(parts[4])?;
    Ok(Command::Place {
        word: parts[1].to_string(),
        row,
        col,
        horizontal,
        blanks: parts.get(5).map(|s| s.to_string()),
    })
}

fn parse_column(text: &str) -> Result<usize, ParseError> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if ('A'..='O').contains(&c) => Ok(c as usize - 'A' as usize),
        _ => Err(ParseError::BadCol),
    }
}

fn parse_direction(text: &str) -> Result<bool, ParseError> {
    match text {
        "H" => Ok(true),
        "V" => Ok(false),
        _ => Err(ParseError::BadDirection),
    }
}
