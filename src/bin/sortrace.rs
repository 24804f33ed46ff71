use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sortrace", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a trace and emit it as JSON.
    Steps(StepsArgs),
    /// Play a trace on the terminal with autoplay timing.
    Play(PlayArgs),
}

#[derive(Parser, Debug)]
struct StepsArgs {
    /// Algorithm key (merge-sort | quick-sort | bubble-sort). Unknown keys
    /// fall back to merge-sort.
    #[arg(long, default_value = "merge-sort")]
    algorithm: String,

    /// Input JSON file containing a number array. Defaults to the demo
    /// dataset.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Output JSON path. Defaults to stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Algorithm key (merge-sort | quick-sort | bubble-sort). Unknown keys
    /// fall back to merge-sort.
    #[arg(long, default_value = "merge-sort")]
    algorithm: String,

    /// Input JSON file containing a number array. Defaults to the demo
    /// dataset.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Playback speed; the inter-step delay is (1000 - speed) ms.
    #[arg(long, default_value_t = 800)]
    speed_ms: i64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Steps(args) => cmd_steps(args),
        Command::Play(args) => cmd_play(args),
    }
}

fn read_input(path: Option<&Path>) -> anyhow::Result<Vec<f64>> {
    let Some(path) = path else {
        return Ok(sortrace::DEMO_DATASET.to_vec());
    };
    let f = File::open(path).with_context(|| format!("open input '{}'", path.display()))?;
    let r = BufReader::new(f);
    let input: Vec<f64> = serde_json::from_reader(r).with_context(|| "parse input JSON")?;
    Ok(input)
}

fn cmd_steps(args: StepsArgs) -> anyhow::Result<()> {
    let input = read_input(args.in_path.as_deref())?;
    let algorithm = sortrace::Algorithm::from_key(&args.algorithm);
    let steps = algorithm.trace(&input);

    let json = sortrace::model::trace_to_json(&steps).context("serialize trace")?;
    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, json).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {} ({} steps)", out.display(), steps.len());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let input = read_input(args.in_path.as_deref())?;
    let algorithm = sortrace::Algorithm::from_key(&args.algorithm);
    let mut session = sortrace::Session::new(input, algorithm);
    session.player_mut().set_speed(args.speed_ms);

    let label = algorithm.info().label;
    let total = session.steps().len();
    eprintln!("{label}: {total} steps");

    session.player_mut().play();
    loop {
        print_step(&session);
        let delay = session.player().step_delay();
        std::thread::sleep(delay);
        if !session.player_mut().tick() {
            break;
        }
    }

    eprintln!("done");
    Ok(())
}

fn print_step(session: &sortrace::Session) {
    let player = session.player();
    let view = session.view();
    let leds = player.active_leds() as usize;
    let meter: String = (0..player.led_count() as usize)
        .map(|i| if i < leds { '#' } else { '.' })
        .collect();
    println!(
        "[{meter}] {:>4}/{} {}",
        player.current_step() + 1,
        player.steps_len(),
        view.description
    );
}
