//! Dockerfile directives that can be given on the command line.
//!
//! Every [`Keyword`] maps 1:1 to a repeatable flag. A [`Directive`] is one
//! occurrence of such a flag, paired with its raw value.

use std::fmt;

/// The instruction keywords that can follow the `FROM` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Add,
    Copy,
    Env,
    Healthcheck,
    Label,
    Cmd,
    Entrypoint,
    Onbuild,
    Stopsignal,
    Run,
    Shell,
    User,
    Volume,
    Workdir,
    Expose,
}

impl Keyword {
    /// All keywords, in the order their flags are listed in `--help`.
    pub const ALL: [Keyword; 15] = [
        Keyword::Add,
        Keyword::Copy,
        Keyword::Env,
        Keyword::Healthcheck,
        Keyword::Label,
        Keyword::Cmd,
        Keyword::Entrypoint,
        Keyword::Onbuild,
        Keyword::Stopsignal,
        Keyword::Run,
        Keyword::Shell,
        Keyword::User,
        Keyword::Volume,
        Keyword::Workdir,
        Keyword::Expose,
    ];

    /// Long flag name, which doubles as the clap argument id.
    pub fn long(&self) -> &'static str {
        match self {
            Keyword::Add => "add",
            Keyword::Copy => "copy",
            Keyword::Env => "env",
            Keyword::Healthcheck => "healthcheck",
            Keyword::Label => "label",
            Keyword::Cmd => "cmd",
            Keyword::Entrypoint => "entrypoint",
            Keyword::Onbuild => "onbuild",
            Keyword::Stopsignal => "stopsignal",
            Keyword::Run => "run",
            Keyword::Shell => "shell",
            Keyword::User => "user",
            Keyword::Volume => "volume",
            Keyword::Workdir => "workdir",
            Keyword::Expose => "expose",
        }
    }

    /// Short flag letter.
    pub fn short(&self) -> char {
        match self {
            Keyword::Add => 'a',
            Keyword::Copy => 'c',
            Keyword::Env => 'e',
            Keyword::Healthcheck => 'k',
            Keyword::Label => 'l',
            Keyword::Cmd => 'm',
            Keyword::Entrypoint => 'n',
            Keyword::Onbuild => 'o',
            Keyword::Stopsignal => 'p',
            Keyword::Run => 'r',
            Keyword::Shell => 's',
            Keyword::User => 'u',
            Keyword::Volume => 'v',
            Keyword::Workdir => 'w',
            Keyword::Expose => 'x',
        }
    }

    pub fn help(&self) -> &'static str {
        match self {
            Keyword::Add => "Add a file from a source, possibly a url, into the container",
            Keyword::Copy => "Copy a file into the container",
            Keyword::Env => "Environment variable",
            Keyword::Healthcheck => "Define a healthcheck command",
            Keyword::Label => "Add a label to the metadata",
            Keyword::Cmd => "Set the command",
            Keyword::Entrypoint => "Set the entrypoint for the container",
            Keyword::Onbuild => "Set a command to run when the image is used as a base",
            Keyword::Stopsignal => "Set the signal that will stop the container",
            Keyword::Run => "Run a command while building",
            Keyword::Shell => "Define the default shell used for shell-style commands",
            Keyword::User => "Change the active user",
            Keyword::Volume => "Mark a directory as a volume",
            Keyword::Workdir => "Change the working directory",
            Keyword::Expose => "Expose a port",
        }
    }

    /// The keyword as it appears in a Dockerfile.
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Add => "ADD",
            Keyword::Copy => "COPY",
            Keyword::Env => "ENV",
            Keyword::Healthcheck => "HEALTHCHECK",
            Keyword::Label => "LABEL",
            Keyword::Cmd => "CMD",
            Keyword::Entrypoint => "ENTRYPOINT",
            Keyword::Onbuild => "ONBUILD",
            Keyword::Stopsignal => "STOPSIGNAL",
            Keyword::Run => "RUN",
            Keyword::Shell => "SHELL",
            Keyword::User => "USER",
            Keyword::Volume => "VOLUME",
            Keyword::Workdir => "WORKDIR",
            Keyword::Expose => "EXPOSE",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One instruction line: a keyword and its value, passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub keyword: Keyword,
    pub value: String,
}

impl Directive {
    pub fn new(keyword: Keyword, value: impl Into<String>) -> Self {
        Self {
            keyword,
            value: value.into(),
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.keyword, self.value)
    }
}
