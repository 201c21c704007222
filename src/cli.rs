//! CLI argument definitions for docker-builder.
//!
//! The scalar options live on the clap-derived [`Cli`]. The fifteen directive
//! flags are appended to the derived command as builder args, because their
//! relative order across *different* flags matters and a derived `Vec` per
//! flag would lose it. [`parse_from`] recovers that order from the argument
//! indices and returns an explicit [`Invocation`].

use clap::{Arg, ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::directive::{Directive, Keyword};

/// Engine used when neither `--engine` nor the environment names one.
pub const DEFAULT_ENGINE: &str = "docker";

#[derive(Debug, Parser)]
#[command(name = "docker-builder")]
#[command(about = "Assemble a Dockerfile from command-line directives and build it")]
#[command(version)]
pub struct Cli {
    /// Image to build from (the FROM line)
    #[arg(short = 'f', long = "from", value_name = "IMAGE", value_parser = parse_image)]
    pub from: String,

    /// The build context directory [default: current directory]
    #[arg(short = 'b', long, value_name = "DIR")]
    pub build_dir: Option<PathBuf>,

    /// The tag to create
    #[arg(short = 't', long)]
    pub tag: Option<String>,

    /// Try to pull a new copy of the FROM image
    #[arg(long)]
    pub pull: bool,

    /// Push the resulting image (requires --tag)
    #[arg(long)]
    pub push: bool,

    /// Edit the Dockerfile before building
    #[arg(long)]
    pub edit: bool,

    /// Container engine to invoke (docker, podman, ...)
    #[arg(long, env = "DOCKER_BUILDER_ENGINE", default_value = DEFAULT_ENGINE)]
    pub engine: String,

    /// Editor for --edit [default: $VISUAL, $EDITOR, then nano]
    #[arg(long)]
    pub editor: Option<String>,

    /// Print the Dockerfile and the engine commands without running anything
    #[arg(long)]
    pub dry_run: bool,

    /// Keep going and exit 0 even if pull, build or push fails
    #[arg(long)]
    pub ignore_engine_errors: bool,
}

/// What to build. Derived once from the command line and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    pub base_image: String,
    /// Directives in command-line order, duplicates kept.
    pub directives: Vec<Directive>,
    pub tag: Option<String>,
    pub build_dir: PathBuf,
    pub pull: bool,
    pub push: bool,
    pub edit: bool,
}

/// How to run the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub engine: String,
    pub editor: Option<String>,
    pub dry_run: bool,
    pub ignore_engine_errors: bool,
}

/// A fully parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub request: BuildRequest,
    pub options: RunOptions,
}

fn parse_image(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        return Err("base image must not be empty".to_string());
    }
    Ok(value.to_string())
}

fn directive_arg(keyword: Keyword) -> Arg {
    Arg::new(keyword.long())
        .short(keyword.short())
        .long(keyword.long())
        .value_name("VALUE")
        .help(keyword.help())
        .help_heading("Directives")
        .value_parser(clap::value_parser!(String))
        .action(ArgAction::Append)
}

/// The full clap command: derived options plus the directive flags.
pub fn command() -> clap::Command {
    Cli::command().args(Keyword::ALL.into_iter().map(directive_arg))
}

/// Collect every directive occurrence, ordered by its position on the command line.
pub fn collect_directives(matches: &ArgMatches) -> Vec<Directive> {
    let mut indexed: Vec<(usize, Directive)> = Vec::new();

    for keyword in Keyword::ALL {
        let id = keyword.long();
        let (Some(indices), Some(values)) =
            (matches.indices_of(id), matches.get_many::<String>(id))
        else {
            continue;
        };
        indexed.extend(
            indices
                .zip(values)
                .map(|(index, value)| (index, Directive::new(keyword, value.as_str()))),
        );
    }

    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, directive)| directive).collect()
}

/// Parse a command line (including argv[0]) into an [`Invocation`].
pub fn parse_from<I, T>(args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command().try_get_matches_from(args)?;
    let cli = Cli::from_arg_matches(&matches)?;
    let directives = collect_directives(&matches);
    Ok(cli.into_invocation(directives))
}

impl Cli {
    fn into_invocation(self, directives: Vec<Directive>) -> Invocation {
        let build_dir = self
            .build_dir
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));

        Invocation {
            request: BuildRequest {
                base_image: self.from,
                directives,
                tag: self.tag,
                build_dir,
                pull: self.pull,
                push: self.push,
                edit: self.edit,
            },
            options: RunOptions {
                engine: self.engine,
                editor: self.editor,
                dry_run: self.dry_run,
                ignore_engine_errors: self.ignore_engine_errors,
            },
        }
    }
}
