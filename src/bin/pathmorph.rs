use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pathmorph", version)]
struct Cli {
    /// Log pipeline decisions to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one interpolated frame.
    Frame(FrameArgs),
    /// Print evenly spaced frames from offset 0 to 1, one per line.
    Frames(FramesArgs),
    /// Print the parsed model of a path-data string as JSON.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input keyframes JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Offset in [0, 1].
    #[arg(long)]
    offset: f64,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Input keyframes JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Number of frames (at least 2).
    #[arg(long, default_value_t = 10)]
    count: u32,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Path data to parse.
    #[arg(long)]
    d: String,
}

/// Keyframes document read by `frame` and `frames`.
#[derive(serde::Deserialize, Debug)]
struct KeyframesDoc {
    #[serde(default)]
    options: pathmorph::InterpolateOptions,
    keyframes: Vec<KeyframeEntry>,
}

#[derive(serde::Deserialize, Debug)]
#[serde(untagged)]
enum KeyframeEntry {
    Data { d: String },
    Alt { alt: pathmorph::AltLayer },
    Svg { svg: PathBuf, id: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn read_keyframes(path: &Path) -> anyhow::Result<KeyframesDoc> {
    let f = File::open(path).with_context(|| format!("open keyframes '{}'", path.display()))?;
    let r = BufReader::new(f);
    let doc: KeyframesDoc =
        serde_json::from_reader(r).with_context(|| "parse keyframes JSON")?;
    Ok(doc)
}

fn to_source(entry: KeyframeEntry, base: &Path) -> anyhow::Result<pathmorph::PathSource> {
    Ok(match entry {
        KeyframeEntry::Data { d } => pathmorph::PathSource::Data(d),
        KeyframeEntry::Alt { alt } => pathmorph::PathSource::Alt(alt),
        KeyframeEntry::Svg { svg, id } => {
            let svg_path = base.join(svg);
            let document = std::fs::read_to_string(&svg_path)
                .with_context(|| format!("read svg '{}'", svg_path.display()))?;
            pathmorph::PathSource::SvgElement { document, id }
        }
    })
}

fn build_morph(in_path: &Path) -> anyhow::Result<pathmorph::Morph> {
    let doc = read_keyframes(in_path)?;
    let base = in_path.parent().unwrap_or_else(|| Path::new("."));
    let sources = doc
        .keyframes
        .into_iter()
        .map(|entry| to_source(entry, base))
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(pathmorph::Morph::new(&sources, doc.options)?)
}

fn print_frame(frame: &pathmorph::Rendered) -> anyhow::Result<()> {
    match frame {
        pathmorph::Rendered::PathData(d) => println!("{d}"),
        pathmorph::Rendered::AltLayer(cmds) => println!("{}", serde_json::to_string(cmds)?),
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let morph = build_morph(&args.in_path)?;
    print_frame(&morph.frame(args.offset))
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.count >= 2, "--count must be at least 2");
    let morph = build_morph(&args.in_path)?;
    let steps = f64::from(args.count - 1);
    for i in 0..args.count {
        print_frame(&morph.frame(f64::from(i) / steps))?;
    }
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let parsed = pathmorph::parse(&args.d)?;
    println!("{}", serde_json::to_string_pretty(&parsed)?);
    Ok(())
}
