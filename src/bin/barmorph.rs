use std::path::{Path, PathBuf};

use anyhow::Context as _;
use barmorph::{
    Arrangement, BlackboxHost, ChartConfig, ChartProps, Millis, SeriesGenerator, SharedScene,
    StackedToGrouped,
};
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "barmorph", version)]
struct Cli {
    /// Increase log verbosity on stderr (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print synthetic series as a JSON array.
    Generate(GenerateArgs),
    /// Stack a JSON array of series and print intervals and domain maxima.
    Stack(StackArgs),
    /// Drive the chart headlessly and print its state as JSON lines.
    Simulate(SimulateArgs),
    /// Drive the chart to a point in time and write that frame as a PNG.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Number of series.
    #[arg(long, default_value_t = 4)]
    series: usize,

    /// Values per series.
    #[arg(long, default_value_t = 58)]
    points: usize,

    /// Generator seed.
    #[arg(long, default_value_t = 1)]
    seed: u64,
}

#[derive(Parser, Debug)]
struct StackArgs {
    /// Input JSON (array of arrays of numbers).
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct DriveArgs {
    /// Chart config JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Manual toggle at a time, e.g. `1200:stacked`. Repeatable.
    #[arg(long = "toggle", value_parser = parse_toggle)]
    toggles: Vec<(Millis, Arrangement)>,

    /// Frame interval in milliseconds.
    #[arg(long, default_value_t = 16)]
    step: u64,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    drive: DriveArgs,

    /// Stop after this many milliseconds.
    #[arg(long, default_value_t = 4000)]
    until: u64,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    drive: DriveArgs,

    /// Time of the frame in milliseconds.
    #[arg(long)]
    at: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Also write the scene as SVG.
    #[arg(long)]
    svg: Option<PathBuf>,
}

fn parse_toggle(s: &str) -> Result<(Millis, Arrangement), String> {
    let (at, target) = s
        .split_once(':')
        .ok_or_else(|| format!("expected MS:ARRANGEMENT, got '{s}'"))?;
    let at = at
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("invalid toggle time '{at}': {e}"))?;
    let target = target.trim().parse::<Arrangement>().map_err(|e| e.to_string())?;
    Ok((Millis(at), target))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Stack(args) => cmd_stack(args),
        Command::Simulate(args) => cmd_simulate(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let series = SeriesGenerator::new(args.seed).generate_many(args.series, args.points)?;
    println!("{}", serde_json::to_string(&series)?);
    Ok(())
}

fn cmd_stack(args: StackArgs) -> anyhow::Result<()> {
    let file = std::fs::File::open(&args.in_path)
        .with_context(|| format!("open series '{}'", args.in_path.display()))?;
    let series: Vec<Vec<f64>> = serde_json::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("parse series '{}'", args.in_path.display()))?;
    let stacked = barmorph::stack(&series)?;
    println!("{}", serde_json::to_string(&stacked)?);
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ChartConfig> {
    let Some(path) = path else {
        return Ok(ChartConfig::default());
    };
    let file = std::fs::File::open(path)
        .with_context(|| format!("open config '{}'", path.display()))?;
    ChartConfig::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("load config '{}'", path.display()))
}

/// Headless host: mounts the chart at t=0, then steps the clock, delivering each manual toggle
/// on the first frame at or after its time.
struct Driver {
    host: BlackboxHost<StackedToGrouped>,
    toggles: Vec<(Millis, Arrangement)>,
    step: u64,
}

impl Driver {
    fn mount(args: &DriveArgs) -> anyhow::Result<Self> {
        if args.step == 0 {
            anyhow::bail!("--step must be > 0");
        }
        let config = load_config(args.config.as_deref())?;
        let mut host = BlackboxHost::new(
            SharedScene::new(config.size()?),
            StackedToGrouped::new(config)?,
        );
        host.render(&ChartProps::from_config(&config), Millis::ZERO)?;

        let mut toggles = args.toggles.clone();
        toggles.sort_by_key(|(at, _)| *at);
        Ok(Self {
            host,
            toggles,
            step: args.step,
        })
    }

    fn frame(&mut self, now: Millis) -> anyhow::Result<()> {
        let due = self.toggles.partition_point(|(at, _)| *at <= now);
        let sender = self.host.blackbox().toggle_sender();
        for (_, target) in self.toggles.drain(..due) {
            sender.send(target);
        }
        self.host.frame(now)?;
        Ok(())
    }

    fn run_until(
        &mut self,
        until: Millis,
        mut each: impl FnMut(&Self, Millis) -> anyhow::Result<()>,
    ) -> anyhow::Result<()> {
        let mut t = 0;
        loop {
            let now = Millis(t.min(until.0));
            self.frame(now)?;
            each(self, now)?;
            if now >= until {
                return Ok(());
            }
            t += self.step;
        }
    }
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let mut driver = Driver::mount(&args.drive)?;
    driver.run_until(Millis(args.until), |d, now| {
        let Some(s) = d.host.blackbox().scheduler() else {
            anyhow::bail!("chart is not mounted");
        };
        let line = serde_json::json!({
            "t": now.0,
            "state": s.state(),
            "animating": s.is_animating(),
            "transitions": s.transitions_started(),
        });
        println!("{line}");
        Ok(())
    })?;

    let (rects, rect_writes) = driver
        .host
        .anchor()
        .with(|scene| (scene.rects().count(), scene.rect_writes()));
    println!(
        "{}",
        serde_json::json!({ "rects": rects, "rect_writes": rect_writes })
    );

    driver.host.unmount();
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut driver = Driver::mount(&args.drive)?;
    driver.run_until(Millis(args.at), |_, _| Ok(()))?;

    let (frame, svg) = driver.host.anchor().with(|scene| {
        barmorph::rasterize(scene, Some([255, 255, 255])).map(|f| (f, scene.to_svg()))
    })?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    if let Some(path) = &args.svg {
        std::fs::write(path, svg).with_context(|| format!("write svg '{}'", path.display()))?;
    }

    driver.host.unmount();
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
