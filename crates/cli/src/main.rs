//! PathCollector CLI.
//!
//! `pathcollector [--root DIR] [--config FILE] [--json] [-v] COMMAND`
//!
//! - `list`: every tag with its trace ids
//! - `show TAG ID`: one trace's markup
//! - `import SAMPLES [--tag TAG]`: capture gestures from a samples file and push
//! - `evaluate [--seed N]`: score the random baseline classifier

mod commands;
mod format;
mod parse;

use std::process;

use pathcollector::{
    Clock, ClassifierTestSuite, CollectorConfig, Error, FileTraceRepository, FixedClock,
    RandomClassifier, Result, SystemClock, TraceCollector, TraceRepository,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_error, format_evaluation, format_list, format_push, format_trace, OutputMode};
use parse::{matches_to_action, parse_samples, CliAction, Options};

fn main() {
    let matches = build_cli().get_matches();

    let (options, action) = match matches_to_action(&matches) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("(error) {}", e);
            process::exit(1);
        }
    };

    init_logging(options.verbose);

    let mode = if options.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match run(&options, action, mode) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Config file first, then `--root` on top.
fn resolve_config(options: &Options) -> Result<CollectorConfig> {
    let config = match (&options.config, &options.root) {
        (Some(path), root) => {
            let config = CollectorConfig::load(path)?;
            match root {
                Some(root) => config.with_root(root),
                None => config,
            }
        }
        (None, Some(root)) => CollectorConfig::new(root),
        (None, None) => {
            return Err(Error::Config(
                "no repository root: pass --root or --config".to_string(),
            ))
        }
    };
    debug!("Using repository root {}", config.root.display());
    Ok(config)
}

fn run(options: &Options, action: CliAction, mode: OutputMode) -> Result<String> {
    let config = resolve_config(options)?;
    let mut repository = FileTraceRepository::new(&config.root);

    match action {
        CliAction::List => {
            repository.pull()?;
            Ok(format_list(repository.store(), mode))
        }
        CliAction::Show { tag, id } => {
            repository.pull()?;
            let trace = repository
                .store()
                .get(&tag, id)
                .ok_or_else(|| Error::InvalidInput(format!("no trace {}/{}", tag, id)))?;
            Ok(format_trace(&tag, trace, mode))
        }
        CliAction::Import { samples, tag } => {
            let text = std::fs::read_to_string(&samples)?;
            let gestures = parse_samples(&text).map_err(|e| {
                Error::InvalidInput(format!("{}: {}", samples.display(), e))
            })?;

            // Trace ids come from the first sample of each gesture.
            let clock = FixedClock::new(0, SystemClock.today());
            let mut collector = TraceCollector::with_clock(repository, &config, &clock);
            if let Some(tag) = tag {
                collector.pin_tag(tag);
            }

            for gesture in &gestures {
                let (first, rest) = match gesture.split_first() {
                    Some(split) => split,
                    None => continue,
                };
                clock.set(first.t);
                collector.touch_start(first.x, first.y, first.t)?;
                for sample in rest {
                    collector.touch_move(sample.x, sample.y, sample.t)?;
                }
                let last = rest.last().unwrap_or(first);
                collector.touch_up(last.t)?;
            }
            info!("Captured {} gestures from {}", gestures.len(), samples.display());

            let report = collector.push()?;
            Ok(format_push(&report, mode))
        }
        CliAction::Evaluate { seed } => {
            repository.pull()?;
            let suite = ClassifierTestSuite::from_store(repository.store());
            let mut classifier = match seed {
                Some(seed) => RandomClassifier::seeded(config.tag_cycle, seed),
                None => RandomClassifier::new(config.tag_cycle),
            };
            let report = suite.run(&mut classifier);
            Ok(format_evaluation(&report, mode))
        }
    }
}
