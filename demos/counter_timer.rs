//! Counter and timer widgets sharing one store.
//!
//! Run with `RUST_LOG=debug` to see which widget renders on each action.

use slicestore::{app_store, AppConfig, AppReducer, Clicker, EventLoop, Timer};
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load_from(Path::new("slicestore.toml"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    println!("=== Counter + Timer ===\n");

    let mut event_loop = EventLoop::new(app_store());
    let clicker = event_loop.mount(Clicker::mount)?;
    let period = config.timer.period();
    let _timer = event_loop.mount(|render| Timer::mount(render, period))?;

    print_views(&event_loop);

    for round in 1..=3 {
        println!("\n{round}. Clicking twice, then waiting one period");
        if let Some(on_click) = clicker.with(Clicker::on_click) {
            on_click.call()?;
            on_click.call()?;
        }
        event_loop.flush();
        event_loop.run_for(period + Duration::from_millis(50)).await?;
        print_views(&event_loop);
    }

    event_loop.unmount_all();
    println!("\n✓ Done");
    Ok(())
}

fn print_views(event_loop: &EventLoop<AppReducer>) {
    for view in event_loop.host().views() {
        println!("   {view}");
    }
}
