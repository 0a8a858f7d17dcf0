//! Application entry point.

use log::{error, info};

use shadow2d::game::Pulse;
use shadow2d::{AppConfig, Application};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Logger initialized");

    let config = AppConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    let pulse = Pulse::new(config.title.clone(), config.frame_limit);
    let mut app = Application::new(&config, pulse);
    if !app.is_running() {
        return Err("application failed to start".into());
    }

    while app.run() {
        if app.should_close() {
            info!("Window close requested");
            break;
        }
    }

    info!("Ran {} frames", app.handler().frames());
    Ok(())
}
