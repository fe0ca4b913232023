//! CLI entry point for `severo-log`.

use anyhow::{Context as _, Result};
use clap::{Parser, ValueEnum};
use dotenvy::dotenv;
use severo_log::{ColorMode, Context, Options, SeveroLog, facade, log_fatal, log_panic, log_print};

#[derive(Parser, Debug)]
#[command(
    name = "severo-log",
    author,
    version,
    about = "Print messages through the severo-log facade",
    after_help = "Examples:\
    \\n   severo-log 'msg: hello'                       # plain line in the default context\
    \\n   severo-log -c verbose 'info: stage done'      # labelled line with date and time\
    \\n   severo-log -c debugging 'debug: value=42'     # adds the source location\
    \\n   severo-log --fatal 'error: cannot continue'   # prints, then exits with status 1\
    \\n\\nThe context falls back to $SEVERO_LOG_CONTEXT, then 'default'."
)]
struct Cli {
    /// Log context: default, verbose or debugging
    #[arg(short, long, value_parser = parse_context)]
    context: Option<Context>,

    /// When to color output
    #[arg(long, value_enum, default_value_t = ColorArg::Auto)]
    color: ColorArg,

    /// Text written in front of every message
    #[arg(long, default_value = "")]
    prefix: String,

    /// Panic with the last message after printing it
    #[arg(long, conflicts_with = "fatal")]
    panic: bool,

    /// Exit with status 1 after printing the last message
    #[arg(long)]
    fatal: bool,

    /// Messages to print, one line each. A leading `debug:`, `info:`,
    /// `msg:`, `warning:`, `error:` or `alert:` header selects the level.
    #[arg(required = true)]
    messages: Vec<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum ColorArg {
    Always,
    Auto,
    Never,
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Always => ColorMode::Always,
            ColorArg::Auto => ColorMode::Auto,
            ColorArg::Never => ColorMode::Never,
        }
    }
}

fn parse_context(value: &str) -> std::result::Result<Context, severo_log::Error> {
    value.parse()
}

fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    let context = match cli.context {
        Some(context) => context,
        None => Context::from_env()
            .context("Failed to read log context from SEVERO_LOG_CONTEXT")?
            .unwrap_or_default(),
    };

    let logger = SeveroLog::builder()
        .options(Options {
            color: cli.color.into(),
            prefix: cli.prefix.clone(),
            ..Options::default()
        })
        .context(context)
        .build();
    facade::install(logger).context("Failed to install logger")?;

    let Some((last, rest)) = cli.messages.split_last() else {
        return Ok(());
    };
    for message in rest {
        log_print!("{message}");
    }

    if cli.fatal {
        log_fatal!("{last}");
    }
    if cli.panic {
        log_panic!("{last}");
    }
    log_print!("{last}");
    Ok(())
}
