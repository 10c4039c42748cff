use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use legacy::{Catalog, FormField, PageConfig, PageSession, SceneTime, SubmitOutcome};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "legacy", version)]
struct Cli {
    /// Page configuration JSON (defaults reproduce the shipped site).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog JSON (defaults to the built-in five products).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the catalog as JSON.
    Catalog,
    /// Print the derived page state at one scroll offset.
    Frame(FrameArgs),
    /// Print the active section at evenly spaced scroll offsets.
    Sweep(SweepArgs),
    /// Run the contact form validation and report the outcome.
    Submit(SubmitArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Scroll offset in pixels.
    #[arg(long, allow_negative_numbers = true)]
    offset: f64,

    /// Let springs run for this many milliseconds after scrolling. Without it, springs snap.
    #[arg(long)]
    settle_ms: Option<u64>,

    /// Include particle layers.
    #[arg(long)]
    particles: bool,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Number of intervals between the top and bottom of the page.
    #[arg(long, default_value_t = 20)]
    steps: u32,
}

#[derive(Parser, Debug)]
struct SubmitArgs {
    /// Sender name.
    #[arg(long, default_value = "")]
    name: String,
    /// Sender email address.
    #[arg(long, default_value = "")]
    email: String,
    /// Message body.
    #[arg(long, default_value = "")]
    message: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(p) => read_config(p)?,
        None => PageConfig::default(),
    };
    let catalog = match &cli.catalog {
        Some(p) => read_catalog(p)?,
        None => Catalog::builtin(),
    };

    match cli.cmd {
        Command::Catalog => print_json(&catalog),
        Command::Frame(args) => cmd_frame(config, catalog, args),
        Command::Sweep(args) => cmd_sweep(config, catalog, args),
        Command::Submit(args) => cmd_submit(config, catalog, args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_config(path: &Path) -> anyhow::Result<PageConfig> {
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    PageConfig::from_json_reader(BufReader::new(f))
        .with_context(|| format!("load config '{}'", path.display()))
}

fn read_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let f = File::open(path).with_context(|| format!("open catalog '{}'", path.display()))?;
    Catalog::from_json_reader(BufReader::new(f))
        .with_context(|| format!("load catalog '{}'", path.display()))
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value).context("write JSON")?;
    writeln!(out)?;
    Ok(())
}

fn cmd_frame(config: PageConfig, catalog: Catalog, args: FrameArgs) -> anyhow::Result<()> {
    let mut session = PageSession::new(config, catalog)?;
    session.scroll_to(args.offset);
    match args.settle_ms {
        Some(ms) => {
            // Step at 60 Hz so the springs see realistic frame deltas.
            let mut t = 0;
            while t < ms {
                t = (t + 16).min(ms);
                session.tick(SceneTime::from_millis(t));
            }
        }
        None => session.settle(),
    }

    if args.particles {
        #[derive(serde::Serialize)]
        struct WithParticles {
            frame: legacy::PageFrame,
            particles: legacy::ParticleFrame,
        }
        print_json(&WithParticles {
            frame: session.frame(),
            particles: session.particles(),
        })
    } else {
        print_json(&session.frame())
    }
}

fn cmd_sweep(config: PageConfig, catalog: Catalog, args: SweepArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.steps > 0, "--steps must be > 0");
    let mut session = PageSession::new(config, catalog)?;
    let max = session.layout().max_scroll();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for i in 0..=args.steps {
        let offset = max * f64::from(i) / f64::from(args.steps);
        session.scroll_to(offset);
        let frame = session.frame();
        writeln!(
            out,
            "{offset:>10.1}  progress={:.3}  active={}  accent={}",
            frame.global_progress.get(),
            frame.nav.active_index,
            frame.nav.accent
        )?;
    }
    Ok(())
}

fn cmd_submit(config: PageConfig, catalog: Catalog, args: SubmitArgs) -> anyhow::Result<()> {
    let mut session = PageSession::new(config, catalog)?;
    session.change_field(FormField::Name, args.name);
    session.change_field(FormField::Email, args.email);
    session.change_field(FormField::Message, args.message);

    match session.submit() {
        SubmitOutcome::Accepted { .. } => {
            println!("Message Sent! We'll get back to you soon.");
            Ok(())
        }
        SubmitOutcome::Rejected(errors) => {
            for e in &errors {
                eprintln!("{}: {e}", e.field);
            }
            anyhow::bail!("{} field(s) failed validation", errors.len())
        }
        SubmitOutcome::Ignored => anyhow::bail!("form is not accepting submissions"),
    }
}
