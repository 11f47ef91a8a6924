//! Cortex Render - command-line front end for the terminal renderer.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cortex_render::{
    Capabilities, Language, MemorySurface, ProcessEnv, QualityTier, RenderConfig, Renderer,
    preset, preset_names,
};

/// Cortex Render
#[derive(Parser)]
#[command(name = "cortex-render")]
#[command(about = "Render markdown and source code for the attached terminal")]
#[command(version)]
struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Theme preset (overrides config and environment)
    #[arg(long, global = true)]
    theme: Option<String>,

    /// Quality tier: minimal, standard, rich or ultra
    #[arg(long, global = true)]
    tier: Option<QualityTier>,

    /// Log level
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show detected terminal capabilities and the chosen tier
    Caps,
    /// List built-in themes with their contrast rating
    Themes,
    /// Render a markdown file ("-" reads stdin)
    Markdown {
        /// Input file
        file: PathBuf,
    },
    /// Highlight a source file ("-" reads stdin)
    Highlight {
        /// Input file
        file: PathBuf,

        /// Language name; detected from the file name when omitted
        #[arg(short, long)]
        language: Option<String>,

        /// Prefix lines with their numbers
        #[arg(short = 'n', long)]
        line_numbers: bool,
    },
}

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn load_config(args: &Args) -> anyhow::Result<RenderConfig> {
    let mut config = match &args.config {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => RenderConfig::default(),
    };
    config.apply_env(&ProcessEnv)?;
    if let Some(theme) = &args.theme {
        config.theme = theme.clone();
        config.theme_file = None;
    }
    if args.tier.is_some() {
        config.tier = args.tier;
    }
    Ok(config)
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).context("failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn renderer(config: &RenderConfig) -> anyhow::Result<Renderer<MemorySurface>> {
    Ok(config.build_renderer(MemorySurface::new(0, 0), Capabilities::detect())?)
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = load_config(&args)?;

    match args.command {
        Command::Caps => {
            let caps = Capabilities::detect();
            let detected = QualityTier::from_capabilities(&caps);
            println!("term:          {}", caps.term_name.as_deref().unwrap_or("-"));
            println!("program:       {}", caps.term_program.as_deref().unwrap_or("-"));
            println!("color depth:   {}", caps.color_depth);
            println!("graphics:      {:?}", caps.graphics);
            println!("unicode:       {}", caps.unicode);
            println!("mouse:         {}", caps.mouse);
            println!("kitty keys:    {}", caps.kitty_keyboard);
            println!("sync output:   {}", caps.synchronized_output);
            match config.tier {
                Some(tier) if tier != detected => {
                    println!("tier:          {tier} (detected {detected})");
                }
                _ => println!("tier:          {detected}"),
            }
        }
        Command::Themes => {
            for name in preset_names() {
                let Some(theme) = preset(name) else {
                    continue;
                };
                println!(
                    "{name:<16} {:>5.2}:1  {}",
                    theme.contrast_ratio(),
                    theme.wcag_level().as_str()
                );
            }
        }
        Command::Markdown { file } => {
            let text = read_input(&file)?;
            let mut renderer = renderer(&config)?;
            print!("{}", renderer.render_markdown(&text));
        }
        Command::Highlight {
            file,
            language,
            line_numbers,
        } => {
            let language = match language {
                Some(name) => name,
                None => match Language::from_path(&file) {
                    Some(language) => language.name().to_string(),
                    None if file == Path::new("-") => bail!("--language is required for stdin"),
                    None => bail!("cannot detect the language of {}", file.display()),
                },
            };
            let text = read_input(&file)?;
            let config = RenderConfig {
                code_line_numbers: line_numbers || config.code_line_numbers,
                ..config
            };
            let mut renderer = renderer(&config)?;
            print!("{}", renderer.highlight(&text, &language));
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(&args.log_level);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
