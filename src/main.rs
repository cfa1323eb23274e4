use anyhow::{ensure, Result};
use clap::Parser;
use macroquad::window::Conf;

use pixel_snake::game::GameConfig;
use pixel_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "pixel-snake")]
#[command(version, about = "Arcade snake on a pixel canvas")]
struct Cli {
    /// Board width in logical pixels
    #[arg(long, default_value = "256")]
    width: u32,

    /// Board height in logical pixels
    #[arg(long, default_value = "256")]
    height: u32,

    /// Window pixels per logical pixel
    #[arg(long, default_value = "4")]
    scale: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    ensure!(cli.scale >= 1, "scale must be at least 1");

    let config = GameConfig::new(cli.width as f32, cli.height as f32);
    config.validate()?;

    let conf = Conf {
        window_title: String::from("Snake"),
        window_width: (cli.width * cli.scale) as i32,
        window_height: (cli.height * cli.scale) as i32,
        window_resizable: false,
        ..Default::default()
    };

    let scale = cli.scale as f32;
    macroquad::Window::from_config(conf, async move {
        let mut mode = HumanMode::new(config, scale);
        mode.run().await;
    });

    Ok(())
}
