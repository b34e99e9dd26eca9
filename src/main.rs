use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use slotdock::cli::CliArgs;
use slotdock::DockConfig;

mod runtime;
mod view;

use runtime::App;

fn main() -> Result<()> {
    slotdock::tracing::init();

    let args = CliArgs::parse();
    let base = if args.config.is_some() {
        DockConfig::default()
    } else {
        DockConfig::load()
    };
    let startup = args
        .into_config(base)
        .map_err(|e| anyhow::anyhow!("Invalid arguments: {}", e))?;
    tracing::info!(items = startup.labels.len(), "starting slotdock");

    let event_loop = EventLoop::new()?;
    let mut app = App::new(startup)?;
    event_loop.run_app(&mut app)?;

    Ok(())
}
