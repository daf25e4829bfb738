use std::fs;
use std::path::PathBuf;

use chrono_tz::Tz;
use heat_ladder::api::{ChartEngine, ChartEngineConfig, ChartOptions};
use heat_ladder::core::{ColorRange, HeatLadderData, LabelTimeZone, parse_json_lines};
use heat_ladder::render::{NullRenderer, Renderer};

const SAMPLE_TIMESTAMPS: [f64; 12] = [
    1_546_300_800.0,
    1_546_387_200.0,
    1_546_473_600.0,
    1_546_560_000.0,
    1_546_819_200.0,
    1_546_905_600.0,
    1_546_992_000.0,
    1_547_078_400.0,
    1_547_164_800.0,
    1_547_424_000.0,
    1_547_510_400.0,
    1_547_596_800.0,
];

#[derive(Debug)]
struct CliArgs {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    time_zone: LabelTimeZone,
    pixel_ratio: f64,
    hover: Option<(f64, f64)>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let _ = heat_ladder::telemetry::init_default_tracing();

    let args = parse_args()?;
    let data = match &args.input {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            let records = parse_json_lines(&raw).map_err(|err| err.to_string())?;
            HeatLadderData::from_records(&records, None).map_err(|err| err.to_string())?
        }
        None => sample_data()?,
    };

    let options = ChartOptions::default()
        .with_time_zone(args.time_zone)
        .with_pixel_ratio(args.pixel_ratio);

    match &args.output {
        Some(output) => render_png(options, data, &args, output),
        None => {
            let engine = build_engine(NullRenderer::default(), options, data, &args)?;
            print_snapshot(&engine)
        }
    }
}

fn build_engine<R: Renderer>(
    renderer: R,
    options: ChartOptions,
    data: HeatLadderData,
    args: &CliArgs,
) -> Result<ChartEngine<R>, String> {
    let config = ChartEngineConfig::heat_ladder(options);
    let mut engine = ChartEngine::new(renderer, config, data).map_err(|err| err.to_string())?;
    if let Some((x, y)) = args.hover {
        engine.pointer_enter().map_err(|err| err.to_string())?;
        engine.pointer_move(x, y).map_err(|err| err.to_string())?;
        if let Some(selection) = engine.select_at(x, y) {
            println!(
                "selection: index={} time=[{}, {}) value={:.2}",
                selection.index, selection.time_start, selection.time_end, selection.value
            );
        }
    }
    Ok(engine)
}

fn print_snapshot<R: Renderer>(engine: &ChartEngine<R>) -> Result<(), String> {
    let json = engine
        .snapshot_json_pretty()
        .map_err(|err| err.to_string())?;
    println!("{json}");
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn render_png(
    options: ChartOptions,
    data: HeatLadderData,
    args: &CliArgs,
    output: &std::path::Path,
) -> Result<(), String> {
    use heat_ladder::render::CairoRenderer;

    let viewport = options.viewport();
    let width = i32::try_from(viewport.width)
        .map_err(|_| "canvas width overflows i32".to_owned())?;
    let height = i32::try_from(viewport.height)
        .map_err(|_| "canvas height overflows i32".to_owned())?;
    let renderer = CairoRenderer::new(width, height).map_err(|err| err.to_string())?;

    let engine = build_engine(renderer, options, data, args)?;
    print_snapshot(&engine)?;
    engine
        .renderer()
        .write_png(output)
        .map_err(|err| err.to_string())?;
    println!("wrote {}", output.display());
    Ok(())
}

#[cfg(not(feature = "cairo-backend"))]
fn render_png(
    _options: ChartOptions,
    _data: HeatLadderData,
    _args: &CliArgs,
    _output: &std::path::Path,
) -> Result<(), String> {
    Err("--output requires feature `cairo-backend`".to_owned())
}

fn sample_data() -> Result<HeatLadderData, String> {
    let ladders = vec![
        vec![80.0, 50.0, 43.0],
        vec![10.0, 12.0, 14.0, 18.0, 30.0, 50.0],
        vec![70.0, 90.0, 13.0, 10.0, 12.0, 13.0],
        vec![170.0, 190.0, 113.0, 110.0, 112.0, 113.0],
        vec![270.0, 290.0, 213.0, 110.0, 112.0, 113.0],
        vec![80.0, 50.0, 43.0],
        vec![10.0, 12.0, 14.0, 18.0, 30.0, 50.0],
        vec![70.0, 90.0, 13.0, 10.0, 12.0, 13.0],
        vec![170.0, 190.0, 113.0, 110.0, 112.0, 113.0],
        vec![270.0, 290.0, 213.0, 110.0, 112.0, 113.0],
        vec![220.0, 222.0, 224.0, 228.0, 230.0, 240.0],
        vec![270.0, 290.0, 213.0, 210.0, 212.0, 213.0],
    ];
    let counts = vec![
        vec![1.0, 3.0, 5.0],
        vec![7.0, 9.0, 5.0, 6.0, 7.0, 8.0],
        vec![17.0, 119.0, 115.0, 116.0, 117.0, 118.0],
        vec![27.0, 29.0, 25.0, 226.0, 227.0, 228.0],
        vec![17.0, 19.0, 15.0, 216.0, 227.0, 288.0],
        vec![12.0, 32.0, 52.0],
        vec![217.0, 219.0, 252.0, 216.0, 217.0, 218.0],
        vec![17.0, 19.0, 15.0, 16.0, 17.0, 18.0],
        vec![27.0, 29.0, 25.0, 26.0, 27.0, 28.0],
        vec![17.0, 19.0, 15.0, 16.0, 27.0, 88.0],
        vec![17.0, 19.0, 15.0, 16.0, 17.0, 18.0],
        vec![27.0, 29.0, 25.0, 26.0, 27.0, 28.0],
    ];
    let color_range = ColorRange::new(10.0, 256.0).map_err(|err| err.to_string())?;
    Ok(HeatLadderData::from_vecs(
        SAMPLE_TIMESTAMPS.to_vec(),
        ladders,
        counts,
        color_range,
    ))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut input = None;
    let mut output = None;
    let mut time_zone = LabelTimeZone::Utc;
    let mut pixel_ratio = 1.0;
    let mut hover = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--tz" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --tz".to_owned())?;
                let tz: Tz = value
                    .parse()
                    .map_err(|err| format!("unknown timezone `{value}`: {err}"))?;
                time_zone = LabelTimeZone::Named(tz);
            }
            "--pixel-ratio" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --pixel-ratio".to_owned())?;
                pixel_ratio = value
                    .parse()
                    .map_err(|err| format!("invalid --pixel-ratio `{value}`: {err}"))?;
            }
            "--hover" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --hover".to_owned())?;
                hover = Some(parse_point(&value)?);
            }
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs {
        input,
        output,
        time_zone,
        pixel_ratio,
        hover,
    })
}

fn parse_point(value: &str) -> Result<(f64, f64), String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{value}`"))?;
    let x = x
        .trim()
        .parse()
        .map_err(|err| format!("invalid hover x `{x}`: {err}"))?;
    let y = y
        .trim()
        .parse()
        .map_err(|err| format!("invalid hover y `{y}`: {err}"))?;
    Ok((x, y))
}

fn usage_message() -> &'static str {
    concat!(
        "Usage: heat_ladder_render [options]\n\n",
        "Options:\n",
        "  --input <path>         JSON-lines ladder records (default: built-in sample)\n",
        "  --output <path>        Write a PNG (requires feature `cairo-backend`)\n",
        "  --tz <zone>            IANA timezone for time labels (default: UTC)\n",
        "  --pixel-ratio <ratio>  Device pixels per CSS pixel (default: 1)\n",
        "  --hover <x,y>          Simulate a pointer at plot-relative CSS pixels\n",
        "  -h, --help             Show this message",
    )
}
