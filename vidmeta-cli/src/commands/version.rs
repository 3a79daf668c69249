//! Implementation of the 'version' subcommand.

use crate::cli::VersionArgs;
use crate::error::CliResult;

/// Prints the inspection tool's version line.
///
/// Lookup failures are part of the printed text, so this never fails.
pub fn run_version(args: VersionArgs) -> CliResult<()> {
    let version = vidmeta_core::get_tool_version(&args.tool.to_probe_config());
    println!("{}", version);
    Ok(())
}
