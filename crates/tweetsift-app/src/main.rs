use std::process;

use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing_subscriber::{filter::LevelFilter, fmt};
use tweetsift_app::cli::{Cli, Commands, FileArgs, JsonlArgs, NormalizeArgs, OutputArgs};
use tweetsift_app::config::{self, AppConfig};
use tweetsift_app::error::AppError;
use tweetsift_app::pipeline::SourceConverter;
use tweetsift_app::sink::TextSink;
use tweetsift_app::sources::{JsonLinesSource, LinesSource, RecordSource, record_limit};
use tweetsift_app::text::{Normalizer, NormalizerVariant};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let log_level = determine_log_level(&cli);
    init_tracing(log_level);

    if let Err(err) = run(cli).await {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn init_tracing(level: LevelFilter) {
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("Tracing subscriber already set; skipping re-initialization.");
    }
}

fn determine_log_level(cli: &Cli) -> LevelFilter {
    match cli.command.as_ref() {
        Some(Commands::File(_)) | Some(Commands::Jsonl(_)) => match cli.verbose {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        },
        Some(Commands::Normalize(_)) | None => match cli.verbose {
            0 => LevelFilter::OFF,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        },
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Some(Commands::File(args)) => {
            let config = config::load()?;
            run_file(args, &config).await?;
        }
        Some(Commands::Jsonl(args)) => {
            let config = config::load()?;
            run_jsonl(args, &config).await?;
        }
        Some(Commands::Normalize(args)) => {
            let config = config::load()?;
            run_normalize(args, &config).await?;
        }
        None => Cli::print_help(),
    }
    Ok(())
}

async fn run_file(args: FileArgs, config: &AppConfig) -> Result<(), AppError> {
    let source = LinesSource::open(&args.file_name, record_limit(args.output.limit)).await?;
    extract(source.into(), &args.target, &args.output, config).await
}

async fn run_jsonl(args: JsonlArgs, config: &AppConfig) -> Result<(), AppError> {
    let field = config.resolve_field(args.field);
    let source =
        JsonLinesSource::open(&args.file_name, field, record_limit(args.output.limit)).await?;
    extract(source.into(), &args.target, &args.output, config).await
}

async fn extract(
    mut source: RecordSource,
    target: &str,
    output: &OutputArgs,
    config: &AppConfig,
) -> Result<(), AppError> {
    let variant = config.resolve_variant(output.variant.map(Into::into))?;
    let target_dir = config.resolve_target_dir(output.target_dir.as_deref());
    let converter =
        build_converter(variant, config)?.with_progress_every(config.progress_every());
    tracing::info!(
        event = "convert_start",
        source = %source.label(),
        target_name = target,
        variant = %variant,
        "extracting records"
    );

    let mut sink = TextSink::open_target(&target_dir, target).await?;
    converter.write(&mut source, &mut sink).await?;
    sink.close().await?;
    Ok(())
}

async fn run_normalize(args: NormalizeArgs, config: &AppConfig) -> Result<(), AppError> {
    let variant = config.resolve_variant(args.variant.map(Into::into))?;
    let converter = build_converter(variant, config)?;
    let mut stdout = tokio::io::stdout();

    match args.text {
        Some(text) => emit_normalized(&mut stdout, &converter, &text).await?,
        None => {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await.map_err(AppError::Stdin)? {
                emit_normalized(&mut stdout, &converter, &line).await?;
            }
        }
    }
    stdout.flush().await.map_err(AppError::Stdout)
}

async fn emit_normalized<W: AsyncWrite + Unpin>(
    out: &mut W,
    converter: &SourceConverter,
    raw: &str,
) -> Result<(), AppError> {
    let normalized = converter.normalizer().convert(raw);
    let admissible = converter.filter().is_admissible(&normalized);
    let line = format!("{normalized}\t{admissible}\n");
    out.write_all(line.as_bytes())
        .await
        .map_err(AppError::Stdout)
}

fn build_converter(
    variant: NormalizerVariant,
    config: &AppConfig,
) -> Result<SourceConverter, AppError> {
    let filter = config.script_filter(variant)?;
    Ok(SourceConverter::new(Normalizer::new(variant), filter))
}
