use anyhow::bail;
use clap::{ArgAction, Parser};

use inkboard::Config;
use inkboard::draw::Color;
use inkboard::input::Tool;
use inkboard::util;

mod frontend;

#[derive(Parser, Debug)]
#[command(name = "inkboard")]
#[command(version, about = "Interactive whiteboard with pen, eraser, and text tools")]
struct Cli {
    /// Startup stroke color: a name (red, green, ... black) or #rrggbb hex
    #[arg(long, short = 'c', value_name = "COLOR")]
    color: Option<String>,

    /// Startup stroke width in pixels (1-25)
    #[arg(long, short = 'w', value_name = "PX")]
    width: Option<u32>,

    /// Startup tool (pen, eraser, or text)
    #[arg(long, short = 't', value_name = "TOOL")]
    tool: Option<String>,

    /// Write the documented default config to ~/.config/inkboard/ and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created default config at {}", path.display());
        return Ok(());
    }

    let config = Config::load()?;

    let color = match &cli.color {
        Some(spec) => util::name_to_color(spec)
            .or_else(|| Color::from_hex(spec))
            .ok_or_else(|| {
                anyhow::anyhow!("Unknown color '{spec}' (use a color name or #rrggbb hex)")
            })?,
        None => config.drawing.default_color.to_color(),
    };

    let width = match cli.width {
        Some(px) => {
            if !(1..=25).contains(&px) {
                log::warn!("--width {px} out of range, clamping to 1-25");
            }
            (px as f64).clamp(1.0, 25.0)
        }
        None => config.drawing.default_width,
    };

    let tool = match cli.tool.as_deref() {
        None => Tool::Pen,
        Some(name) => match name.to_lowercase().as_str() {
            "pen" => Tool::Pen,
            "eraser" => Tool::Eraser,
            "text" => Tool::Text,
            other => bail!("Unknown tool '{other}' (expected pen, eraser, or text)"),
        },
    };

    log::info!(
        "Starting whiteboard ({}x{})",
        config.window.width,
        config.window.height
    );
    log::info!("Controls:");
    log::info!("  - Draw: select the pen (P) and drag");
    log::info!("  - Erase: select the eraser (E) and drag");
    log::info!("  - Text: press T, type, then click to stamp");
    log::info!(
        "  - Colors: R (red), G (green), B (blue), Y (yellow), O (orange), M (magenta), W (white), K (black)"
    );
    log::info!("  - Stroke width: + / -");
    log::info!("  - Undo: Ctrl+Z");
    log::info!("  - Help: F10");
    log::info!("  - Exit: Escape");

    frontend::run(&config, color, width, tool)?;

    log::info!("Whiteboard closed.");
    Ok(())
}
