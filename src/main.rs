mod app;
mod cli;

use anyhow::Result;
use clap::Parser;
use pixel_surface::RATE_HINT;
use winit::event_loop::EventLoop;

use app::App;
use cli::Cli;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.surface_config()?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, cli.rows, cli.cols)?;

    log::info!("Controls: drag to draw cells, {}", RATE_HINT);
    event_loop.run_app(&mut app)?;

    Ok(())
}
