use std::error::Error;
use std::path::Path;

use argh::FromArgs;
use log::{info, warn};
use zensprite::{
    EncodeRequest, ExportConfig, HeaderMode, PagePadding, PixelLayout, RawPixels, RowOrigin,
    SpriteSheet, Threshold, Unstoppable, sanitize_identifier,
};

#[derive(FromArgs)]
/// Convert images into packed PROGMEM sprite arrays
struct Args {
    /// output text file
    #[argh(option, short = 'o')]
    output: String,

    /// write a self-contained sprites.h with include guard
    #[argh(switch, short = 'c')]
    combined: bool,

    /// declared sprite width
    #[argh(option, default = "16")]
    width: i32,

    /// declared sprite height
    #[argh(option, default = "32")]
    height: i32,

    /// declare each image's own size instead of --width/--height
    #[argh(switch)]
    image_size: bool,

    /// channel value a pixel must exceed to be lit
    #[argh(option, default = "zensprite::DEFAULT_THRESHOLD")]
    threshold: f32,

    /// treat image row 0 as the bottom row
    #[argh(switch)]
    bottom_up: bool,

    /// fail on image heights that are not a multiple of 8
    #[argh(switch)]
    reject_unaligned: bool,

    /// input images
    #[argh(positional)]
    inputs: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    if args.inputs.is_empty() {
        warn!("No input images given, writing an empty sheet");
    }

    let config = ExportConfig {
        sprite_width: args.width,
        sprite_height: args.height,
        use_image_size: args.image_size,
    };
    let mode = if args.combined {
        HeaderMode::Combined
    } else {
        HeaderMode::Individual
    };
    let origin = if args.bottom_up {
        RowOrigin::BottomUp
    } else {
        RowOrigin::TopDown
    };
    let padding = if args.reject_unaligned {
        PagePadding::Reject
    } else {
        PagePadding::Unlit
    };

    let mut sheet = SpriteSheet::new(mode);
    for input in &args.inputs {
        if let Err(e) = add_image(&mut sheet, input, &config, &args, origin, padding) {
            log::error!("{input}: {e}");
            return Err(e);
        }
    }

    let output = Path::new(&args.output);
    if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    let count = sheet.len();
    std::fs::write(output, sheet.finish())?;
    info!("Wrote {count} sprite(s) to {}", output.display());
    Ok(())
}

fn add_image(
    sheet: &mut SpriteSheet,
    input: &str,
    config: &ExportConfig,
    args: &Args,
    origin: RowOrigin,
    padding: PagePadding,
) -> Result<(), Box<dyn Error>> {
    let image = image::open(input)?.into_rgba8();
    let (width, height) = image.dimensions();
    let source = RawPixels::new(image.as_raw(), width, height, PixelLayout::Rgba8)?;

    let sprite = EncodeRequest::with_header(config.header_for(width, height))
        .with_threshold(Threshold(args.threshold))
        .with_origin(origin)
        .with_padding(padding)
        .encode(&source, Unstoppable)?;

    let stem = Path::new(input)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = sanitize_identifier(&stem);
    info!(
        "{input}: {width}x{height} -> {name} ({} bytes, declared {}x{})",
        sprite.bytes().len(),
        sprite.header().width,
        sprite.header().height
    );
    sheet.push(&name, &sprite)?;
    Ok(())
}
