use crate::{CliError, CliResult};

use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, info, warn};
use logopt_config::{Format, LogOptions};
use serde_json::{Map, Value};

const STDOUT_PATH: &str = "stdout";
const STDERR_PATH: &str = "stderr";

/// Initialize the global logger from validated options.
#[track_caller]
pub fn initialize(options: &LogOptions) -> CliResult<()> {
    let (level_filter, logger) = build_dispatch(options)?.into_log();

    log::set_boxed_logger(logger)
        .map(|()| log::set_max_level(level_filter))
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    info!(
        "Logger initialized: level={}, format={}, outputs={:?}",
        options.level, options.format, options.output_paths
    );

    if options.max_size_in_mb > 0 || options.max_age_in_days > 0 {
        warn!(
            "Rotation thresholds (max_size={}MB, max_age={}d) are left to the log engine; fern output is not rotated",
            options.max_size_in_mb, options.max_age_in_days
        );
    }

    Ok(())
}

/// Build the dispatcher without installing it.
///
/// Every record goes to `output_paths`; records at `Error` are also sent to
/// `error_output_paths`.
pub fn build_dispatch(options: &LogOptions) -> CliResult<Dispatch> {
    let level = options.level()?;
    let format = options.format()?;
    let name = options.name.clone();
    let caller = options.enable_caller;

    let formatted = match format {
        Format::Console if options.enable_color => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new().format(move |out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {name}{message}{caller}",
                    date = humantime::format_rfc3339(SystemTime::now()),
                    level = colors.color(record.level()),
                    name = name_block(&name),
                    message = message,
                    caller = caller_block(caller, record),
                ))
            })
        }
        Format::Console => Dispatch::new().format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {name}{message}{caller}",
                date = humantime::format_rfc3339(SystemTime::now()),
                level = record.level(),
                name = name_block(&name),
                message = message,
                caller = caller_block(caller, record),
            ))
        }),
        Format::Json => Dispatch::new().format(move |out, message, record| {
            let mut line = Map::new();
            line.insert(
                "ts".into(),
                Value::String(humantime::format_rfc3339(SystemTime::now()).to_string()),
            );
            line.insert("level".into(), Value::String(record.level().to_string()));
            if !name.is_empty() {
                line.insert("logger".into(), Value::String(name.clone()));
            }
            line.insert("msg".into(), Value::String(message.to_string()));
            if caller {
                line.insert(
                    "caller".into(),
                    Value::String(format!(
                        "{}:{}",
                        record.file().unwrap_or("unknown"),
                        record.line().unwrap_or(0)
                    )),
                );
            }
            out.finish(format_args!("{}", Value::Object(line)))
        }),
    };

    let mut outputs = Dispatch::new();
    for path in &options.output_paths {
        outputs = outputs.chain(open_output(path)?);
    }

    let mut error_outputs = Dispatch::new().level(LevelFilter::Error);
    for path in &options.error_output_paths {
        error_outputs = error_outputs.chain(open_output(path)?);
    }

    Ok(Dispatch::new()
        .level(level.level_filter())
        .chain(formatted.chain(outputs).chain(error_outputs)))
}

fn open_output(path: &str) -> CliResult<fern::Output> {
    match path {
        STDOUT_PATH => Ok(std::io::stdout().into()),
        STDERR_PATH => Ok(std::io::stderr().into()),
        _ => fern::log_file(path)
            .map(Into::into)
            .map_err(|e| CliError::logger(format!("Failed to open log file {path}: {e}"))),
    }
}

fn name_block(name: &str) -> String {
    if name.is_empty() {
        String::new()
    } else {
        format!("[{name}] ")
    }
}

fn caller_block(enabled: bool, record: &log::Record) -> String {
    if enabled {
        format!(
            " [{}:{}]",
            record.file().unwrap_or("unknown"),
            record.line().unwrap_or(0)
        )
    } else {
        String::new()
    }
}
