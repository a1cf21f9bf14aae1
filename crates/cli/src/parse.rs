//! ArgMatches and samples-file parsing.
//!
//! Translates clap's parsed arguments into a [`CliAction`] plus the global
//! [`Options`], and reads gesture sample files for `import`.

use std::path::PathBuf;

use clap::ArgMatches;
use pathcollector::Point;

/// What the user asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum CliAction {
    /// Print every tag with its traces
    List,
    /// Print one trace
    Show { tag: String, id: i64 },
    /// Capture gestures from a samples file
    Import {
        samples: PathBuf,
        tag: Option<String>,
    },
    /// Score the random baseline
    Evaluate { seed: Option<u64> },
}

/// Flags accepted by every command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    pub root: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub verbose: bool,
}

/// Convert clap ArgMatches into the global options and a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<(Options, CliAction), String> {
    let (sub_name, m) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    // Globals given after the subcommand only land in its matches.
    let options = Options {
        root: m.get_one::<PathBuf>("root").cloned(),
        config: m.get_one::<PathBuf>("config").cloned(),
        json: m.get_flag("json"),
        verbose: m.get_flag("verbose"),
    };

    let action = match sub_name {
        "list" => CliAction::List,
        "show" => CliAction::Show {
            tag: required::<String>(m, "tag")?.clone(),
            id: *required::<i64>(m, "id")?,
        },
        "import" => CliAction::Import {
            samples: required::<PathBuf>(m, "samples")?.clone(),
            tag: m.get_one::<String>("tag").cloned(),
        },
        "evaluate" => CliAction::Evaluate {
            seed: m.get_one::<u64>("seed").copied(),
        },
        other => return Err(format!("Unknown command: {}", other)),
    };

    Ok((options, action))
}

fn required<'a, T: Clone + Send + Sync + 'static>(
    m: &'a ArgMatches,
    name: &str,
) -> Result<&'a T, String> {
    m.get_one::<T>(name)
        .ok_or_else(|| format!("Missing argument: {}", name))
}

/// Parse a samples file into gestures.
///
/// One `x y t` sample per line; a blank line ends a gesture; lines starting
/// with `#` are ignored.
pub fn parse_samples(text: &str) -> Result<Vec<Vec<Point>>, String> {
    let mut gestures = Vec::new();
    let mut current = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.starts_with('#') {
            continue;
        }
        if line.is_empty() {
            if !current.is_empty() {
                gestures.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.push(parse_sample(line).map_err(|e| format!("line {}: {}", index + 1, e))?);
    }
    if !current.is_empty() {
        gestures.push(current);
    }

    Ok(gestures)
}

fn parse_sample(line: &str) -> Result<Point, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(format!("expected `x y t`, got {} fields", fields.len()));
    }
    let x = parse_coordinate(fields[0])?;
    let y = parse_coordinate(fields[1])?;
    let t = fields[2]
        .parse::<i64>()
        .map_err(|_| format!("invalid timestamp: {}", fields[2]))?;
    Ok(Point::new(x, y, t))
}

fn parse_coordinate(field: &str) -> Result<f32, String> {
    match field.parse::<f32>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(format!("invalid coordinate: {}", field)),
    }
}
