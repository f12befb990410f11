use clap::{CommandFactory, Parser};
use mempass::{cli::Mempass, Result, TARGET};
use mempass_cli_helpers::{
    messages::{fail, warn},
    CommandTree,
};
use mempass_logs::Logger;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Support JSON output of command tree
    if std::env::var("MEMPASS_CLI_JSON").ok().is_some() {
        return match print_command_tree() {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                fail(e.to_string());
                ExitCode::FAILURE
            }
        };
    }

    let args = Mempass::parse();

    let logger = Logger::new(TARGET)
        .verbose(args.verbose)
        .log_dir(args.log_dir.clone());
    let _guard = match logger.init_subscriber() {
        Ok(guard) => guard,
        Err(e) => {
            fail(e.to_string());
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = mempass::cli::run(args) {
        tracing::debug!(target: TARGET, error = ?e);
        fail(e.to_string());
        if let Some(hint) = e.hint() {
            warn(hint);
        }
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn print_command_tree() -> Result<()> {
    let cmd = Mempass::command();
    let tree: CommandTree = (&cmd).into();
    serde_json::to_writer_pretty(std::io::stdout(), &tree)?;
    Ok(())
}
