use clap::Parser;
use lattice::cli::{Cli, Commands};
use miette::Result;

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
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
        Some(Commands::Init(args)) => lattice::cli::commands::init::run(args, &global),
        Some(Commands::Add(args)) => lattice::cli::commands::add::run(args, &global),
        Some(Commands::List(args)) => lattice::cli::commands::list::run(args),
        Some(Commands::Setup(args)) => lattice::cli::commands::setup::run(args, &global),
        Some(Commands::Completions(args)) => lattice::cli::commands::completions::run(args),
        None => lattice::cli::commands::overview(&global),
    }
}
