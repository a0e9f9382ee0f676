//! Sweepmap - inspect sweep maps and plot selections from the command line.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use sweepmap::coords::{CalibrationTable, PhysicalPoint};
use sweepmap::data::{load_calibration_values, load_samples};
use sweepmap::map::{aggregate, extract_window, MapData, NormalizationMode};
use sweepmap::selection::{pixel_range_to_time_range, repair_selection, BinSize, PixelRect, TimeWindow};
use sweepmap::util::{ColorPalette, LayoutConfig};
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "sweepmap")]
#[command(about = "Inspect parameter-sweep maps and time-series selections", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Built-in plot layout
    #[arg(long, value_enum, default_value_t = Preset::Laser, global = true)]
    preset: Preset,

    /// Load the plot layout from a JSON file instead of a preset
    #[arg(long, global = true)]
    layout: Option<PathBuf>,

    /// Enable logging to specified file
    #[arg(long, global = true)]
    log: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the grid size and value range of a map
    Summary {
        /// Map dataset (JSON array of samples)
        map: PathBuf,
        /// Normalize colors with the exclusive upper bound
        #[arg(long)]
        legacy_normalization: bool,
    },
    /// Print one cell of a map with its color
    Cell {
        /// Map dataset (JSON array of samples)
        map: PathBuf,
        /// Horizontal index
        x: usize,
        /// Vertical index
        y: usize,
        /// Palette used for the color
        #[arg(long, value_enum, default_value_t = PaletteArg::Hue)]
        palette: PaletteArg,
        /// Normalize colors with the exclusive upper bound
        #[arg(long)]
        legacy_normalization: bool,
    },
    /// Map a pointer position on the map image to grid indices
    Locate {
        /// Pointer x in image pixels
        #[arg(allow_negative_numbers = true)]
        px: f64,
        /// Pointer y in image pixels
        #[arg(allow_negative_numbers = true)]
        py: f64,
        /// Map dataset supplying the axis limits
        #[arg(long)]
        map: Option<PathBuf>,
        /// Count the vertical axis up from the bottom
        #[arg(long)]
        invert_y: bool,
        /// Injection table (JSON array of numbers)
        #[arg(long)]
        injection: Option<PathBuf>,
        /// Feedback table (JSON array of numbers)
        #[arg(long)]
        feedback: Option<PathBuf>,
    },
    /// Turn a dragged pixel range on the time-series plot into a time range
    Zoom {
        /// Left edge of the drag
        #[arg(allow_negative_numbers = true)]
        x1: i64,
        /// Right edge of the drag
        #[arg(allow_negative_numbers = true)]
        x2: i64,
        /// First time shown on the plot
        #[arg(long)]
        from: u64,
        /// Last time shown on the plot
        #[arg(long)]
        to: u64,
        /// Bin size; overrides the layout and --interval
        #[arg(long)]
        bin: Option<u64>,
        /// Sample interval of the series, the bin size when the layout has
        /// none (the laser preset); without it such layouts use 1
        #[arg(long)]
        interval: Option<u64>,
    },
    /// Print the zoom neighbourhood around a cell
    Window {
        /// Map dataset (JSON array of samples)
        map: PathBuf,
        /// Horizontal index of the center
        x: usize,
        /// Vertical index of the center
        y: usize,
        /// Cells per side; defaults to the layout's zoom size
        #[arg(long)]
        size: Option<usize>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Preset {
    Laser,
    Physics,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum PaletteArg {
    Hue,
    Viridis,
    Rainbow,
    BlueRed,
}

impl From<PaletteArg> for ColorPalette {
    fn from(arg: PaletteArg) -> Self {
        match arg {
            PaletteArg::Hue => Self::Hue,
            PaletteArg::Viridis => Self::Viridis,
            PaletteArg::Rainbow => Self::Rainbow,
            PaletteArg::BlueRed => Self::BlueRed,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log.as_deref())?;

    let layout = match &args.layout {
        Some(path) => LayoutConfig::from_file(path)?,
        None => match args.preset {
            Preset::Laser => LayoutConfig::laser(),
            Preset::Physics => LayoutConfig::physics(),
        },
    };

    run(args.command, layout)
}

fn init_logging(log: Option<&Path>) -> Result<()> {
    // Set up logging to a file if --log option is provided, stderr otherwise
    if let Some(log_path) = log {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting sweepmap");
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }
    Ok(())
}

fn load_map(path: &Path, legacy: bool) -> Result<MapData> {
    let mode = if legacy {
        NormalizationMode::Legacy
    } else {
        NormalizationMode::Inclusive
    };
    Ok(aggregate(&load_samples(path)?, mode)?)
}

fn run(command: Command, mut layout: LayoutConfig) -> Result<()> {
    match command {
        Command::Summary {
            map,
            legacy_normalization,
        } => {
            let map = load_map(&map, legacy_normalization)?;
            let b = map.bounds();
            println!(
                "grid: {} x {} (x {}..={}, y {}..={})",
                b.x_size(),
                b.y_size(),
                b.min_x,
                b.max_x,
                b.min_y,
                b.max_y
            );
            println!("values: {} ..= {}", b.min_value, b.max_value);
            println!("normalization: {:?}", map.mode());
        },
        Command::Cell {
            map,
            x,
            y,
            palette,
            legacy_normalization,
        } => {
            let map = load_map(&map, legacy_normalization)?;
            let sample = map
                .sample(x, y)
                .ok_or_else(|| anyhow!("No cell at ({}, {})", x, y))?;
            let palette = ColorPalette::from(palette);
            println!("value: {}", sample.value);
            println!("variables: {}, {}", sample.x_variable, sample.y_variable);
            match map.color_fraction(x, y) {
                Some(fraction) => {
                    println!("fraction: {:.4}", fraction);
                    println!("color: {} ({})", palette.color(fraction), palette.name());
                },
                // Legacy normalization leaves the last row and column uncolored
                None => println!("color: none"),
            }
        },
        Command::Locate {
            px,
            py,
            map,
            invert_y,
            injection,
            feedback,
        } => {
            layout.map.invert_y |= invert_y;
            let map = map.map(|path| load_map(&path, false)).transpose()?;
            let mapper = layout.map.mapper(map.as_ref().map(|m| m.bounds()))?;
            let point = mapper.to_domain(px, py);
            let (x, y) = point.indices();
            println!("domain: {:.3}, {:.3}", point.x, point.y);
            println!("cell: {}, {}", x, y);

            if injection.is_some() || feedback.is_some() {
                let injection = CalibrationTable::injection(table_values(injection.as_deref())?);
                let feedback = CalibrationTable::feedback(table_values(feedback.as_deref())?);
                println!("{}", PhysicalPoint::resolve(point, &injection, &feedback));
            }
        },
        Command::Zoom {
            x1,
            x2,
            from,
            to,
            bin,
            interval,
        } => {
            let calibration = layout.time_series.calibration()?;
            let bin = match bin {
                Some(size) => BinSize::new(size)?,
                None => layout.time_series.bin_size(interval.unwrap_or(1))?,
            };
            let window = TimeWindow::new(from, to)?;
            let repair = repair_selection(
                PixelRect::new(x1, 0, x2, layout.time_series.height),
                &calibration,
            );
            let range =
                pixel_range_to_time_range(repair.rect.x1, repair.rect.x2, window, &calibration, bin);
            println!(
                "pixels: {}..{}{}",
                repair.rect.x1,
                repair.rect.x2,
                if repair.corrected { " (corrected)" } else { "" }
            );
            println!("time: {}..={}", range.from_time, range.to_time);
        },
        Command::Window { map, x, y, size } => {
            let map = load_map(&map, false)?;
            let size = size.unwrap_or(layout.zoom.size);
            let window = extract_window(map.grid(), x, y, size)?;
            let (ox, oy) = window.origin();
            let (image_w, image_h) = layout.zoom.image_size(window.width(), window.height());
            println!(
                "origin: {}, {} size: {} x {}{}",
                ox,
                oy,
                window.width(),
                window.height(),
                if window.is_partial() { " (partial)" } else { "" }
            );
            println!("image: {} x {} px at {} px per cell", image_w, image_h, layout.zoom.scale);
            let cells = window.cells();
            for row in 0..window.height() {
                let line: Vec<String> = (0..window.width())
                    .map(|col| {
                        let sample = &cells[[col, row]];
                        if window.is_center(sample) {
                            format!("[{}]", sample.value)
                        } else {
                            format!(" {} ", sample.value)
                        }
                    })
                    .collect();
                println!("{}", line.join(""));
            }
        },
    }
    Ok(())
}

fn table_values(path: Option<&Path>) -> Result<Vec<f64>> {
    Ok(match path {
        Some(path) => load_calibration_values(path)?,
        None => Vec::new(),
    })
}
