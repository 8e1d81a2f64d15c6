use anyhow::{anyhow, Context};
use config::{Config, File};
use log::LevelFilter;
use ottomap::{timed, Plot, PlotConfig, Plotter};
use simple_logger::SimpleLogger;
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;
use strum::{Display, EnumString};

/// CLI for plotting turn reports onto the hex map.
///
/// Each line of the report is a starting grid coordinate followed by the
/// moves made from there, e.g. `AB 1205 N-NE-SE`.
#[derive(Debug, StructOpt)]
#[structopt(name = "ottomap")]
struct Opt {
    /// Path to the report file to plot. If omitted, the report is read from
    /// stdin
    input: Option<PathBuf>,

    /// Path to a config file that defines plotting behavior. Supported
    /// formats: JSON, TOML
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// The format to print the plot in. Supported formats:
    ///
    /// text - One line per track, followed by the number of hexes visited on
    ///   each tile
    ///
    /// json - The full plot, including every hex of every track
    #[structopt(short, long, default_value = "text")]
    format: OutputFormat,

    /// Print the effective config (in TOML format) and exit
    #[structopt(long)]
    dump_config: bool,

    /// The logging level to use while plotting. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

/// Different output formats.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    // If you change this, make sure to update the help text for `--format`!
    /// Human-readable summary
    Text,
    /// Serialized JSON version of the entire plot
    Json,
}

fn load_config(config_path: &Path) -> anyhow::Result<PlotConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

fn read_report(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("error reading report {:?}", path)),
        None => {
            let mut report = String::new();
            io::stdin()
                .read_to_string(&mut report)
                .context("error reading report from stdin")?;
            Ok(report)
        }
    }
}

/// Render a plot in the given format
fn format_plot(plot: &Plot, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => {
            let mut lines = Vec::with_capacity(plot.tracks.len() + 1);
            for track in &plot.tracks {
                lines.push(format!(
                    "{} -> {} ({} moves)",
                    track.start,
                    track.end,
                    track.moves()
                ));
            }
            let tiles = plot
                .tiles
                .iter()
                .map(|(tile, coords)| format!("{}: {}", tile, coords.len()))
                .collect::<Vec<_>>();
            lines.push(format!("Tiles visited: {}", tiles.join(", ")));
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => serde_json::to_string_pretty(plot)
            .context("error serializing plot"),
    }
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => PlotConfig::default(),
    };
    if opt.dump_config {
        println!(
            "{}",
            toml::to_string_pretty(&config).context("error serializing config")?
        );
        return Ok(());
    }

    let plotter = Plotter::new(config)?;
    let report = read_report(opt.input.as_deref())?;
    let plot = plotter.plot(&report)?;
    let output = timed!("Formatting output", format_plot(&plot, opt.format))?;
    println!("{}", output);

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
