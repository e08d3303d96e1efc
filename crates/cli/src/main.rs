use anyhow::{Context, Result};
use camo::render::{write_png, write_svg};
use camo::report::AreaReport;
use camo::{generate, CamoCfg, Pattern};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "camo-cli")]
#[command(about = "Tileable camouflage pattern generator")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate a tile and write <out>.png, <out>.svg and a provenance sidecar
    Generate {
        #[command(flatten)]
        params: GenArgs,
        /// Output prefix (no extension)
        #[arg(long, default_value = "camo")]
        out: PathBuf,
        /// Skip the PNG preview
        #[arg(long)]
        no_png: bool,
        /// Skip the SVG output
        #[arg(long)]
        no_svg: bool,
    },
    /// Generate in memory and print the area summary only
    Report {
        #[command(flatten)]
        params: GenArgs,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Clone, Debug)]
struct GenArgs {
    /// Seed for reproducibility
    #[arg(long, default_value_t = 12345)]
    seed: u64,
    /// Tile side in mm
    #[arg(long, default_value_t = 640)]
    tile_mm: u32,
    /// Resolution in px per mm
    #[arg(long, default_value_t = 2.0)]
    px_per_mm: f64,
    /// Number of macro masses
    #[arg(long = "macro", default_value_t = 42)]
    macro_count: usize,
    /// Number of micro bites
    #[arg(long = "micro", default_value_t = 140)]
    micro_count: usize,
}

impl From<GenArgs> for CamoCfg {
    fn from(a: GenArgs) -> Self {
        CamoCfg {
            seed: a.seed,
            tile_mm: a.tile_mm,
            px_per_mm: a.px_per_mm,
            macro_count: a.macro_count,
            micro_count: a.micro_count,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Generate {
            params,
            out,
            no_png,
            no_svg,
        } => run(params.into(), &out, !no_png, !no_svg),
        Action::Report { params, json } => report(params.into(), json),
    }
}

/// Output paths written by a `generate` run.
#[derive(Debug, Default)]
struct Outputs {
    png: Option<PathBuf>,
    svg: Option<PathBuf>,
}

fn run(cfg: CamoCfg, out: &Path, png: bool, svg: bool) -> Result<()> {
    tracing::info!(
        seed = cfg.seed,
        tile_mm = cfg.tile_mm,
        px_per_mm = cfg.px_per_mm,
        out = %out.display(),
        "generate"
    );
    let (pattern, outputs) = generate_to(&cfg, out, png, svg)?;

    let written: Vec<String> = [&outputs.png, &outputs.svg]
        .into_iter()
        .flatten()
        .map(|p| p.display().to_string())
        .collect();
    println!("OK: {}", written.join(" / "));
    println!(
        "Tile: {0}x{0} px  | seed={1} | px_per_mm={2}",
        cfg.tile_px(),
        cfg.seed,
        cfg.px_per_mm
    );
    print!("{}", AreaReport::from_shapes(&pattern.shapes));
    Ok(())
}

/// Generates once and writes the requested encodings plus the provenance sidecar.
fn generate_to(cfg: &CamoCfg, out: &Path, png: bool, svg: bool) -> Result<(Pattern, Outputs)> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let pattern = generate(cfg);
    let mut outputs = Outputs::default();

    if png {
        let path = with_suffix(out, "png");
        write_png(&pattern, &path).with_context(|| format!("writing {}", path.display()))?;
        outputs.png = Some(path);
    }
    if svg {
        let path = with_suffix(out, "svg");
        write_svg(&pattern, &path).with_context(|| format!("writing {}", path.display()))?;
        outputs.svg = Some(path);
    }

    let artifacts: Vec<&Path> = [&outputs.png, &outputs.svg]
        .into_iter()
        .flatten()
        .map(PathBuf::as_path)
        .collect();
    if !artifacts.is_empty() {
        let params = serde_json::to_value(cfg)?;
        let prov = provenance::write_sidecar(out, &artifacts, provenance::Payload::new(params))?;
        tracing::info!(path = %prov.display(), "provenance");
    }
    Ok((pattern, outputs))
}

fn report(cfg: CamoCfg, json: bool) -> Result<()> {
    tracing::info!(seed = cfg.seed, "report");
    let pattern = generate(&cfg);
    let summary = AreaReport::from_shapes(&pattern.shapes);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{summary}");
    }
    Ok(())
}

/// `camo` → `camo.png`; keeps dots already in the prefix (`tile.v2` → `tile.v2.png`).
fn with_suffix(prefix: &Path, ext: &str) -> PathBuf {
    let mut s = prefix.as_os_str().to_os_string();
    s.push(".");
    s.push(ext);
    PathBuf::from(s)
}
