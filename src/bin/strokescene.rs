use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "strokescene", version)]
struct Cli {
    /// Log pipeline progress to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert stroke JSON into a Mitsuba scene (the default with no subcommand).
    Convert(ConvertArgs),
    /// Print the composed toWorld matrix of one stroke.
    Matrix(MatrixArgs),
}

#[derive(Parser, Debug)]
struct TransformArgs {
    /// Options JSON; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Top-level key of the stroke collection.
    #[arg(long)]
    collection_key: Option<String>,

    /// Interpret stroke Euler angles as degrees instead of radians.
    #[arg(long)]
    degrees: bool,

    /// Euler chaining convention for the zyx angle triple.
    #[arg(long, value_enum)]
    euler: Option<EulerChoice>,
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input stroke JSON.
    #[arg(long = "in", default_value = "stroke.json")]
    in_path: PathBuf,

    /// Output scene XML.
    #[arg(long, default_value = "scene.xml")]
    out: PathBuf,

    #[command(flatten)]
    transform: TransformArgs,

    /// Sampler sample count per pixel.
    #[arg(long)]
    sample_count: Option<u32>,

    /// Film width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Film height in pixels.
    #[arg(long)]
    height: Option<u32>,
}

#[derive(Parser, Debug)]
struct MatrixArgs {
    /// Input stroke JSON.
    #[arg(long = "in", default_value = "stroke.json")]
    in_path: PathBuf,

    /// Stroke id to compose.
    #[arg(long)]
    id: String,

    #[command(flatten)]
    transform: TransformArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EulerChoice {
    Intrinsic,
    Extrinsic,
}

impl From<EulerChoice> for strokescene::EulerConvention {
    fn from(c: EulerChoice) -> Self {
        match c {
            EulerChoice::Intrinsic => strokescene::EulerConvention::Intrinsic,
            EulerChoice::Extrinsic => strokescene::EulerConvention::Extrinsic,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Some(Command::Convert(args)) => cmd_convert(args),
        Some(Command::Matrix(args)) => cmd_matrix(args),
        None => cmd_convert(ConvertArgs::parse_from(["convert"])),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn load_opts(args: &TransformArgs) -> anyhow::Result<strokescene::ConvertOpts> {
    let mut opts = match &args.config {
        Some(path) => strokescene::ConvertOpts::from_path(path)
            .with_context(|| format!("load options '{}'", path.display()))?,
        None => strokescene::ConvertOpts::default(),
    };
    if let Some(key) = &args.collection_key {
        opts.collection_key = key.clone();
    }
    if args.degrees {
        opts.transform.euler.unit = strokescene::AngleUnit::Degrees;
    }
    if let Some(euler) = args.euler {
        opts.transform.euler.convention = euler.into();
    }
    Ok(opts)
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let mut opts = load_opts(&args.transform)?;
    if let Some(n) = args.sample_count {
        opts.scene.sample_count = n;
    }
    if let Some(w) = args.width {
        opts.scene.width = w;
    }
    if let Some(h) = args.height {
        opts.scene.height = h;
    }

    let stats = strokescene::convert_file(&args.in_path, &args.out, &opts).with_context(|| {
        format!(
            "convert '{}' -> '{}'",
            args.in_path.display(),
            args.out.display()
        )
    })?;

    eprintln!("wrote {} ({} spheres)", args.out.display(), stats.shapes);
    Ok(())
}

fn cmd_matrix(args: MatrixArgs) -> anyhow::Result<()> {
    let opts = load_opts(&args.transform)?;
    let strokes = strokescene::StrokeSet::from_path_with_key(&args.in_path, &opts.collection_key)
        .with_context(|| format!("load strokes '{}'", args.in_path.display()))?;
    let record = strokes
        .get(&args.id)
        .with_context(|| format!("no stroke with id '{}'", args.id))?;

    let m = strokescene::compose_stroke_transform(&record.shape_params, &opts.transform);
    for row in m.0 {
        println!("{}", strokescene::format_reals(&row, " "));
    }
    Ok(())
}
