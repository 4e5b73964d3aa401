//! Command-line arguments

use crate::catalog::{Concept, Interest, UnknownChoice};
use std::path::PathBuf;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Errors from argument parsing
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("unknown argument: {0}")]
    UnknownArgument(String),

    #[error(transparent)]
    UnknownChoice(#[from] UnknownChoice),

    #[error("--concept needs --interest to be set as well")]
    ConceptWithoutInterest,

    #[error("--print needs both --interest and --concept")]
    IncompleteSelection,
}

/// What the binary should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the interactive UI
    Interactive,
    /// Print one explanation and exit
    Print,
    Help,
    Version,
}

/// Configuration from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub command: Command,
    pub interest: Option<Interest>,
    pub concept: Option<Concept>,
    pub log_file: Option<PathBuf>,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("analogize - learn data structures through your own interests");
    eprintln!();
    eprintln!("Usage: analogize [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -i, --interest <NAME>  Preselect an interest");
    eprintln!(
        "                         ({})",
        Interest::ALL.map(Interest::label).join(", ")
    );
    eprintln!("  -c, --concept <NAME>   Preselect a concept (needs --interest)");
    eprintln!(
        "                         ({})",
        Concept::ALL.map(Concept::label).join(", ")
    );
    eprintln!("  -p, --print            Print the explanation and exit");
    eprintln!("  --log-file <PATH>      Write logs to PATH (filter with RUST_LOG)");
    eprintln!("  -h, --help             Show this help message");
    eprintln!("  -V, --version          Show version");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  analogize                               # Pick everything interactively");
    eprintln!("  analogize -i music -c stack             # Jump straight to a stack of bars");
    eprintln!("  analogize -i sports -c queue --print    # Print and exit");
}

/// Parse the process arguments
pub fn parse_args() -> Result<CliConfig, CliError> {
    parse_args_from(std::env::args().skip(1))
}

/// Parse arguments, excluding the program name
pub fn parse_args_from<I, S>(args: I) -> Result<CliConfig, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut interest = None;
    let mut concept = None;
    let mut log_file = None;
    let mut print = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(CliConfig::bare(Command::Help)),
            "-V" | "--version" => return Ok(CliConfig::bare(Command::Version)),
            "-p" | "--print" => print = true,
            "-i" | "--interest" => {
                let value = args.next().ok_or(CliError::MissingValue(arg))?;
                interest = Some(value.parse::<Interest>()?);
            }
            "-c" | "--concept" => {
                let value = args.next().ok_or(CliError::MissingValue(arg))?;
                concept = Some(value.parse::<Concept>()?);
            }
            "--log-file" => {
                let value = args.next().ok_or(CliError::MissingValue(arg))?;
                log_file = Some(PathBuf::from(value));
            }
            _ => return Err(CliError::UnknownArgument(arg)),
        }
    }

    if concept.is_some() && interest.is_none() {
        return Err(CliError::ConceptWithoutInterest);
    }
    if print && concept.is_none() {
        return Err(CliError::IncompleteSelection);
    }

    Ok(CliConfig {
        command: if print {
            Command::Print
        } else {
            Command::Interactive
        },
        interest,
        concept,
        log_file,
    })
}

impl CliConfig {
    fn bare(command: Command) -> Self {
        CliConfig {
            command,
            interest: None,
            concept: None,
            log_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_is_interactive() {
        let config = parse_args_from(Vec::<String>::new()).unwrap();
        assert_eq!(config.command, Command::Interactive);
        assert_eq!(config.interest, None);
    }

    #[test]
    fn test_preselect_pair() {
        let config = parse_args_from(["-i", "music", "--concept", "Linked List"]).unwrap();
        assert_eq!(config.interest, Some(Interest::Music));
        assert_eq!(config.concept, Some(Concept::LinkedList));
    }

    #[test]
    fn test_print_needs_full_selection() {
        let err = parse_args_from(["--print", "-i", "dance"]).unwrap_err();
        assert!(matches!(err, CliError::IncompleteSelection));

        let config = parse_args_from(["-p", "-i", "dance", "-c", "graph"]).unwrap();
        assert_eq!(config.command, Command::Print);
    }

    #[test]
    fn test_concept_without_interest() {
        let err = parse_args_from(["-c", "stack"]).unwrap_err();
        assert!(matches!(err, CliError::ConceptWithoutInterest));
    }

    #[test]
    fn test_bad_values() {
        assert!(matches!(
            parse_args_from(["-i"]).unwrap_err(),
            CliError::MissingValue(flag) if flag == "-i"
        ));
        assert!(matches!(
            parse_args_from(["--frobnicate"]).unwrap_err(),
            CliError::UnknownArgument(_)
        ));
        let err = parse_args_from(["-i", "chess"]).unwrap_err();
        assert!(err.to_string().contains("unknown interest 'chess'"));
    }

    #[test]
    fn test_log_file() {
        let config = parse_args_from(["--log-file", "/tmp/analogize.log"]).unwrap();
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/analogize.log")));
    }
}
