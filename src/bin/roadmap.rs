use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use roadmap::{
    AnimatorState, Catalog, ClickOutcome, FileStorage, KeyValueStorage, LessonView, LogNotifier,
    MemoryStorage, Navigator, RecordingNavigator, RoadmapConfig, RoadmapPage, Route,
    SaveOutcome, Viewport, ViewportClass, ZigZag, render_svg,
};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(name = "roadmap", version, about = "Interactive learning roadmap")]
struct Cli {
    /// Config JSON (defaults are used for missing fields).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Checkpoint catalog JSON (defaults to the built-in Python course).
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    /// Directory holding persisted progress.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Measured container width in pixels.
    #[arg(long, global = true)]
    width: Option<f64>,

    /// Force the mobile layout.
    #[arg(long, global = true)]
    mobile: bool,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print node positions as JSON.
    Layout,
    /// Print the zig-zag path data between two checkpoints.
    Path(PathArgs),
    /// Show completion state of every checkpoint.
    Status,
    /// Mark a checkpoint complete (0-based) and follow its lesson link.
    Complete {
        index: usize,
    },
    /// Clear all progress.
    Reset,
    /// Show a lesson by slug or `/courses/{slug}` path.
    Lesson {
        slug: String,
    },
    /// Run the avatar animation and print one JSON line per frame.
    Simulate(SimulateArgs),
    /// Write the roadmap as a standalone SVG document.
    Svg {
        /// Output SVG path.
        #[arg(long)]
        out: PathBuf,
    },
}

#[derive(Parser, Debug)]
struct PathArgs {
    /// First checkpoint (0-based).
    #[arg(long, default_value_t = 0)]
    from: usize,

    /// Last checkpoint; defaults to the final one.
    #[arg(long)]
    to: Option<usize>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Checkpoints to click after mounting, in order.
    #[arg(long = "click")]
    clicks: Vec<usize>,

    /// Frame interval in milliseconds.
    #[arg(long, default_value_t = 16.0)]
    frame_ms: f64,

    /// Stop after this many frames.
    #[arg(long, default_value_t = 2000)]
    max_frames: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let env = Env::load(&cli)?;
    match cli.cmd {
        Command::Layout => cmd_layout(&env),
        Command::Path(args) => cmd_path(&env, args),
        Command::Status => cmd_status(&env),
        Command::Complete { index } => cmd_complete(&env, index),
        Command::Reset => cmd_reset(&env),
        Command::Lesson { slug } => cmd_lesson(&env, &slug),
        Command::Simulate(args) => cmd_simulate(&env, args),
        Command::Svg { out } => cmd_svg(&env, &out),
    }
}

/// Inputs shared by every subcommand.
struct Env {
    config: RoadmapConfig,
    catalog: Catalog,
    data_dir: PathBuf,
    viewport: Viewport,
}

impl Env {
    fn load(cli: &Cli) -> anyhow::Result<Self> {
        let config = match &cli.config {
            Some(path) => RoadmapConfig::from_json(&read_text(path)?)
                .with_context(|| format!("parse config '{}'", path.display()))?,
            None => RoadmapConfig::default(),
        };
        let catalog = match &cli.content {
            Some(path) => Catalog::from_json(&read_text(path)?)
                .with_context(|| format!("parse content '{}'", path.display()))?,
            None => Catalog::builtin(),
        };
        let data_dir = match &cli.data_dir {
            Some(dir) => dir.clone(),
            None => FileStorage::default_dir()?,
        };
        let viewport = match (cli.width, cli.mobile) {
            (width, true) => Viewport::new(width, ViewportClass::Mobile),
            (Some(width), false) => Viewport::measured(width, &config.layout),
            (None, false) => Viewport::new(None, ViewportClass::Desktop),
        };
        Ok(Self {
            config,
            catalog,
            data_dir,
            viewport,
        })
    }

    fn storage(&self) -> FileStorage {
        FileStorage::new(&self.data_dir)
    }

    /// In-memory copy of the persisted progress; nothing is written back.
    fn scratch_storage(&self) -> MemoryStorage {
        let key = &self.config.storage_key;
        match self.storage().read(key) {
            Ok(Some(value)) => MemoryStorage::new().with_entry(key.as_str(), value),
            Ok(None) => MemoryStorage::new(),
            Err(e) => {
                tracing::warn!(error = %e, "stored progress unreadable; starting fresh");
                MemoryStorage::new()
            }
        }
    }

    fn page<S, V>(&self, storage: S, navigator: V) -> anyhow::Result<RoadmapPage<S, LogNotifier, V>>
    where
        S: KeyValueStorage,
        V: Navigator,
    {
        let mut page = RoadmapPage::new(
            self.config.clone(),
            self.catalog.clone(),
            storage,
            LogNotifier::default(),
            navigator,
        )?;
        page.mount(self.viewport);
        Ok(page)
    }
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read '{}'", path.display()))
}

fn cmd_layout(env: &Env) -> anyhow::Result<()> {
    let page = env.page(MemoryStorage::new(), RecordingNavigator::new())?;
    let layout = page.layout();
    let nodes: Vec<_> = env
        .catalog
        .iter()
        .zip(layout.points())
        .enumerate()
        .map(|(index, (c, p))| {
            serde_json::json!({ "index": index, "slug": c.slug, "x": p.x, "y": p.y })
        })
        .collect();
    let doc = serde_json::json!({
        "width": layout.width(),
        "class": layout.viewport().class,
        "height": layout.drawable_height(),
        "nodes": nodes,
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn cmd_path(env: &Env, args: PathArgs) -> anyhow::Result<()> {
    let page = env.page(MemoryStorage::new(), RecordingNavigator::new())?;
    let points = page.layout().points();
    let to = args.to.unwrap_or(points.len().saturating_sub(1));
    if args.from >= to || to >= points.len() {
        anyhow::bail!(
            "invalid checkpoint range {}..{} for {} checkpoints",
            args.from,
            to,
            points.len()
        );
    }
    let path = ZigZag::from(env.config.path).between(points, args.from, to);
    println!("{}", path.to_svg_d());
    Ok(())
}

fn cmd_status(env: &Env) -> anyhow::Result<()> {
    let page = env.page(env.storage(), RecordingNavigator::new())?;
    for node in page.nodes() {
        let mark = if page.store().state().is_complete(node.index) {
            "x"
        } else {
            " "
        };
        println!(
            "{:>2}. [{mark}] {} ({})",
            node.index + 1,
            node.checkpoint.title,
            node.status.as_str()
        );
    }
    println!(
        "{}/{} complete",
        page.store().completed_count(),
        page.catalog().len()
    );
    Ok(())
}

fn cmd_complete(env: &Env, index: usize) -> anyhow::Result<()> {
    let navigate = |target: &str| println!("navigate {target}");
    let mut page = env.page(env.storage(), navigate)?;
    let title = env.catalog.get(index).map(|c| c.title.clone()).unwrap_or_default();
    match page.click(index) {
        ClickOutcome::Marked => println!("completed {title}"),
        ClickOutcome::Revisited => println!("already complete"),
        ClickOutcome::Locked => anyhow::bail!(
            "checkpoint {index} is locked; complete checkpoint {} first",
            page.store().next_index()
        ),
        ClickOutcome::OutOfRange => anyhow::bail!(
            "checkpoint {index} is out of range (0..{})",
            env.catalog.len()
        ),
        ClickOutcome::Inactive => anyhow::bail!("roadmap is not mounted"),
    }
    page.run_until_settled(16.0, 10_000);
    page.unmount();
    Ok(())
}

fn cmd_reset(env: &Env) -> anyhow::Result<()> {
    let mut page = env.page(env.storage(), RecordingNavigator::new())?;
    match page.reset() {
        SaveOutcome::Persisted => println!("progress reset"),
        SaveOutcome::NotPersisted => anyhow::bail!("progress was reset but could not be saved"),
    }
    Ok(())
}

fn cmd_lesson(env: &Env, slug: &str) -> anyhow::Result<()> {
    let slug = match Route::parse(slug) {
        Some(Route::Lesson { slug }) => slug,
        _ => slug.to_string(),
    };
    print!("{}", LessonView::lookup(&env.catalog, &slug).render_text());
    Ok(())
}

fn cmd_simulate(env: &Env, args: SimulateArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.frame_ms.is_finite() && args.frame_ms > 0.0,
        "--frame-ms must be > 0"
    );
    let mut page = env.page(env.scratch_storage(), RecordingNavigator::new())?;
    for &index in &args.clicks {
        let outcome = page.click(index);
        println!(
            "{}",
            serde_json::json!({ "event": "click", "index": index, "outcome": format!("{outcome:?}").to_lowercase() })
        );
    }

    let mut navigated = 0;
    let mut t_ms = 0.0;
    for frame in 0..args.max_frames {
        if page.is_settled() {
            break;
        }
        let reached = page.tick(args.frame_ms);
        t_ms += args.frame_ms;
        let state = match page.animator().state() {
            AnimatorState::Idle => "idle",
            AnimatorState::Animating => "animating",
        };
        let (x, y) = page.avatar_position().map_or((None, None), |p| (Some(p.x), Some(p.y)));
        println!(
            "{}",
            serde_json::json!({
                "frame": frame,
                "t_ms": t_ms,
                "state": state,
                "progress": page.animator().progress_value(),
                "x": x,
                "y": y,
                "reached": reached,
            })
        );
        for target in &page.navigator().visited()[navigated..] {
            println!("{}", serde_json::json!({ "event": "navigate", "target": target }));
        }
        navigated = page.navigator().visited().len();
    }
    Ok(())
}

fn cmd_svg(env: &Env, out: &Path) -> anyhow::Result<()> {
    let mut page = env.page(env.scratch_storage(), RecordingNavigator::new())?;
    page.run_until_settled(16.0, 10_000);
    let svg = render_svg(&page.scene());
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(out, svg).with_context(|| format!("write svg '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}
