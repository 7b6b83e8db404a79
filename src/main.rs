use anyhow::Result;
use chemsite::{
    animate, check,
    cli::{Cli, Commands},
    context::AppContext,
    query, scroll, watch,
};
use clap::Parser;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let ctx: &'static AppContext = Box::leak(Box::new(AppContext::load(cli)?));

    match &cli.command {
        Commands::Get { path } => query::get(ctx, path),
        Commands::List { path } => query::list(ctx, path),
        Commands::Page { route } => query::page(ctx, route),
        Commands::Check => check::check_site(ctx),
        Commands::Reveal {
            route,
            viewport,
            step,
            ..
        } => scroll::simulate_route(ctx, route, *viewport, *step),
        Commands::Loader { .. } => animate::play_loader(ctx),
        Commands::Watch => watch::watch_dictionary(ctx),
    }
}
