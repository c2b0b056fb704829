/// markov — generate a sentence from one or more `.txt` documents.
///
/// Usage: markov [--order <n> | --prompt] [--seed <n>] [--count <n>]
///               [--max-steps <n>] [--config <file.ron>] <file.txt>...
use anyhow::{bail, Context, Result};
use clap::Parser;
use markov_text::config::GeneratorConfig;
use markov_text::source::{is_document_arg, DocumentSource, FileSource};
use markov_text::TextEngine;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "markov",
    version,
    about = "Generate a pseudo-random sentence from an n-gram Markov chain over text files."
)]
struct Cli {
    /// Input documents. Only arguments ending in `.txt` are read.
    inputs: Vec<String>,

    /// Number of tokens per window
    #[arg(long, short = 'n')]
    order: Option<usize>,

    /// Ask for the window size on stdin
    #[arg(long, conflicts_with = "order")]
    prompt: bool,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Number of sentences to generate
    #[arg(long)]
    count: Option<usize>,

    /// Give up after this many generated tokens without punctuation
    #[arg(long)]
    max_steps: Option<usize>,

    /// RON configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("markov_text=warn,markov=warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::load_from_ron(path)
            .with_context(|| format!("loading config '{}'", path.display()))?,
        None => GeneratorConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(count) = cli.count {
        config.count = count;
    }
    if cli.max_steps.is_some() {
        config.step_limit = cli.max_steps;
    }

    let mut documents = config.documents.clone();
    for arg in &cli.inputs {
        if is_document_arg(arg) {
            documents.push(PathBuf::from(arg));
        } else {
            tracing::warn!(argument = %arg, "ignoring argument without .txt suffix");
        }
    }
    if documents.is_empty() {
        bail!("no .txt documents given");
    }

    config.order = match cli.order {
        Some(order) => order,
        None if cli.prompt => {
            let stdin = io::stdin();
            prompt_order(&mut stdin.lock(), &mut io::stderr())?
        }
        None => config.order,
    };
    config.validate()?;

    tracing::info!(documents = documents.len(), order = config.order, "building model");

    let sources = documents
        .into_iter()
        .map(|path| Box::new(FileSource::new(path)) as Box<dyn DocumentSource>);
    let mut builder = TextEngine::builder()
        .order(config.order)
        .step_limit(config.step_limit)
        .sources(sources);
    if let Some(seed) = config.seed {
        builder = builder.seed(seed);
    }
    let mut engine = builder.build().context("building model")?;

    let sentences = engine
        .generate_many(config.count)
        .context("generating text")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for sentence in sentences {
        writeln!(out, "{}", sentence)?;
    }
    Ok(())
}

/// Ask for a positive window size until one is entered.
fn prompt_order<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<usize> {
    loop {
        write!(output, "How many words per window? ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("no window size entered");
        }
        match line.trim().parse::<usize>() {
            Ok(n) if n > 0 => return Ok(n),
            _ => writeln!(output, "Please enter a whole number greater than zero.")?,
        }
    }
}
