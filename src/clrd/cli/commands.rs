use super::print::print_messages;
use super::setup::Cli;
use clrd::api::ClrdApi;
use clrd::clock::SystemClock;
use clrd::config::{ClrdPaths, ProcessEnv};
use clrd::error::Result;
use clrd::logging::init_logging;
use clrd::store::fs::FileStore;
use tracing::debug;

struct AppContext {
    api: ClrdApi<FileStore, SystemClock>,
}

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);
    let mut ctx = init_context()?;

    if cli.delete {
        handle_purge(&mut ctx)
    } else {
        handle_archive(&mut ctx)
    }
}

fn init_context() -> Result<AppContext> {
    let paths = ClrdPaths::resolve(&ProcessEnv)?;
    debug!(
        archive_root = %paths.archive_root.display(),
        download_source = %paths.download_source.display(),
        origin = ?paths.source_origin,
        "resolved paths"
    );

    Ok(AppContext {
        api: ClrdApi::new(FileStore::new(), SystemClock, paths),
    })
}

fn handle_archive(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.archive()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_purge(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.purge()?;
    print_messages(&result.messages);
    Ok(())
}
