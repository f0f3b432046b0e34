use clap::Parser;
use miette::Result;
use brand_tokens::cli::{Cli, Commands};
use brand_tokens::cli::commands::build::BuildArgs;

fn main() -> Result<()> {
    // Reset SIGPIPE so `brand-tokens print js | head` exits quietly instead of panicking.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        None => brand_tokens::cli::commands::build::run(BuildArgs::default(), &global),
        Some(Commands::Build(args)) => brand_tokens::cli::commands::build::run(args, &global),
        Some(Commands::Check(args)) => brand_tokens::cli::commands::check::run(args, &global),
        Some(Commands::Print(args)) => brand_tokens::cli::commands::print::run(args),
        Some(Commands::Query(cmd)) => brand_tokens::cli::commands::query::run(cmd),
        Some(Commands::List) => brand_tokens::cli::commands::list::run(),
        Some(Commands::Completions(args)) => brand_tokens::cli::commands::completions::run(args),
    }
}
