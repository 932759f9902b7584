use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Draws the ⯁ (black medium diamond) icon source image.
///
/// Hand the output to the icon packager afterward, e.g.
/// `cargo tauri icon icon.png`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Canvas width and height in pixels
    #[arg(long, default_value_t = 512)]
    size: u32,

    /// Fraction of the canvas left blank on each side
    #[arg(long, default_value_t = 0.12)]
    margin: f32,

    /// Output PNG path
    #[arg(long, default_value = "icon.png")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let img = glyph::diamond(args.size, args.margin);
    if let Some(dir) = args.out.parent() {
        std::fs::create_dir_all(dir)?;
    }
    img.save(&args.out)?;
    println!("Wrote {}", args.out.display());
    Ok(())
}
