use std::fmt;
use std::str::FromStr;

use crate::cfg::MAX_RANDOM_POINTS;
use crate::shapes::Point;

/// Help text, one command group per line.
pub const HELP: [&str; 6] = [
    "Add a point or line: add_point x y | add_line x1 y1 x2 y2",
    "Remove a point or line: remove_point x y | remove_line x1 y1 x2 y2",
    "Clear all points or lines: clear_points | clear_lines",
    "Algorithms: closest_pair_of_points | convex_hull | largest_empty_circle | line_segment",
    "Random points: random_points n",
    "Change grid size: set_grid d",
];

/// One parsed console command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    AddPoint(Point),
    RemovePoint(Point),
    ClearPoints,
    /// Endpoints as typed; the line itself is validated on execution.
    AddLine(Point, Point),
    RemoveLine(Point, Point),
    ClearLines,
    ClosestPair,
    ConvexHull,
    LargestEmptyCircle,
    LineSegment,
    SetGrid(u32),
    RandomPoints(usize),
    Help,
}

/// Malformed command text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    UnknownCommand(String),
    /// Wrong number of arguments.
    Usage { usage: &'static str },
    BadNumber { token: String },
    /// A count above the accepted maximum.
    TooLarge { token: String, max: usize },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "Empty command. Enter 'help' to view commands."),
            CommandError::UnknownCommand(name) => {
                write!(f, "Invalid command '{name}'. Enter 'help' to view commands.")
            }
            CommandError::Usage { usage } => write!(f, "Invalid format. Usage: {usage}"),
            CommandError::BadNumber { token } => write!(f, "'{token}' is not a valid number"),
            CommandError::TooLarge { token, max } => {
                write!(f, "'{token}' is too large (at most {max})")
            }
        }
    }
}

impl std::error::Error for CommandError {}

impl Command {
    /// Parse one line of console input.
    pub fn parse(input: &str) -> Result<Command, CommandError> {
        let mut tokens = input.split_whitespace();
        let name = tokens.next().ok_or(CommandError::Empty)?;
        let args: Vec<&str> = tokens.collect();
        match name {
            "add_point" => Ok(Command::AddPoint(point_args(&args, "add_point x y")?)),
            "remove_point" => Ok(Command::RemovePoint(point_args(&args, "remove_point x y")?)),
            "clear_points" => no_args(&args, "clear_points", Command::ClearPoints),
            "add_line" => {
                let (a, b) = line_args(&args, "add_line x1 y1 x2 y2")?;
                Ok(Command::AddLine(a, b))
            }
            "remove_line" => {
                let (a, b) = line_args(&args, "remove_line x1 y1 x2 y2")?;
                Ok(Command::RemoveLine(a, b))
            }
            "clear_lines" => no_args(&args, "clear_lines", Command::ClearLines),
            "closest_pair_of_points" => {
                no_args(&args, "closest_pair_of_points", Command::ClosestPair)
            }
            "convex_hull" => no_args(&args, "convex_hull", Command::ConvexHull),
            "largest_empty_circle" => {
                no_args(&args, "largest_empty_circle", Command::LargestEmptyCircle)
            }
            "line_segment" => no_args(&args, "line_segment", Command::LineSegment),
            "set_grid" => match args.as_slice() {
                [d] => Ok(Command::SetGrid(parse_int(d)?)),
                _ => Err(CommandError::Usage { usage: "set_grid d" }),
            },
            "random_points" => match args.as_slice() {
                [n] => {
                    let count: usize = parse_int(n)?;
                    if count > MAX_RANDOM_POINTS {
                        return Err(CommandError::TooLarge {
                            token: n.to_string(),
                            max: MAX_RANDOM_POINTS,
                        });
                    }
                    Ok(Command::RandomPoints(count))
                }
                _ => Err(CommandError::Usage {
                    usage: "random_points n",
                }),
            },
            "help" => Ok(Command::Help),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::parse(s)
    }
}

fn no_args(args: &[&str], usage: &'static str, cmd: Command) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(cmd)
    } else {
        Err(CommandError::Usage { usage })
    }
}

fn point_args(args: &[&str], usage: &'static str) -> Result<Point, CommandError> {
    match args {
        [x, y] => Ok(Point::new(parse_coord(x)?, parse_coord(y)?)),
        _ => Err(CommandError::Usage { usage }),
    }
}

fn line_args(args: &[&str], usage: &'static str) -> Result<(Point, Point), CommandError> {
    match args {
        [x1, y1, x2, y2] => Ok((
            Point::new(parse_coord(x1)?, parse_coord(y1)?),
            Point::new(parse_coord(x2)?, parse_coord(y2)?),
        )),
        _ => Err(CommandError::Usage { usage }),
    }
}

/// Finite `f64`; integers are accepted as-is.
fn parse_coord(token: &str) -> Result<f64, CommandError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CommandError::BadNumber {
            token: token.to_string(),
        })
}

fn parse_int<T: FromStr>(token: &str) -> Result<T, CommandError> {
    token.parse::<T>().map_err(|_| CommandError::BadNumber {
        token: token.to_string(),
    })
}
