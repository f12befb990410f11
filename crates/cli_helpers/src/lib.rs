//! Helpers shared by the mempass command line executables.
//!
//! Status messages are written to standard error so that
//! generated passphrases on standard output can be piped.
//! When `MEMPASS_CLI_JSON` is set an executable prints its
//! [CommandTree] instead of running, which lets shell
//! completion and documentation tooling discover the flags.

pub mod messages;

/// Flags and subcommands of an executable.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct CommandTree {
    /// Name of the command.
    pub name: String,
    /// Argument identifiers, for example `count` or `word_list`.
    pub args: Vec<String>,
    /// Subcommands, empty for `mempass`.
    pub commands: Vec<CommandTree>,
}

impl From<&clap::Command> for CommandTree {
    fn from(value: &clap::Command) -> Self {
        CommandTree {
            name: value.get_name().to_string(),
            args: value
                .get_arguments()
                .map(|a| a.get_id().to_string())
                .collect(),
            commands: value.get_subcommands().map(|c| c.into()).collect(),
        }
    }
}
