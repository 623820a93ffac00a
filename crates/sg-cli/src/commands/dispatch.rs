use sg_config::GuideConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: Option<Commands>,
    config: &GuideConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        None => commands::consult::handle(None, &config.session),
        Some(Commands::Consult(args)) => {
            commands::consult::handle(args.section.as_deref(), &config.session)
        }
        Some(Commands::Catalog(args)) => commands::catalog::handle(&args, flags),
        Some(Commands::Paths(args)) => commands::paths::handle(&args, flags),
        Some(Commands::Check) => commands::check::handle(flags),
    }
}
