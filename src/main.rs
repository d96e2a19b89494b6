//! wsl-path CLI - translate file paths between Windows and WSL (Unix) formats.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{ArgAction, Parser, ValueEnum};
use tokio::sync::mpsc;
use wsl_path::constants::DEFAULT_CONCURRENCY;
use wsl_path::utils::AsyncTaskQueue;
use wsl_path::{
    load_mount_table, save_mount_table, Format, FsResolver, MountTable, RelativePaths,
    TranslateError, TranslateOptions, Translation, Translator,
};

const EXIT_LINE_FAILED: u8 = 1;
const EXIT_INVALID_FLAGS: u8 = 100;
const EXIT_READ_FAILED: u8 = 127;

const ENV_HELP: &str = "\
Environment:
  <DRIVE>_VOLUME_PATH  Unix mount point of a Windows drive, e.g. C_VOLUME_PATH=/mnt/c
  WSL_UNC_PATH         UNC shares, e.g. '\\\\h1\\v1=/lp1;\\\\h2\\v2=/lp2'
  WSL_ROOTFS_PATH      Windows path of the WSL rootfs, used for paths outside every mount

Unix paths are matched against the longest mount point that prefixes them.
Paths resolved through WSL_ROOTFS_PATH must only be read from Windows;
writing to them can corrupt the WSL file system.";

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliRelative {
    /// Resolve against the current directory
    Resolve,
    /// Keep relative paths relative
    Preserve,
}

impl From<CliRelative> for RelativePaths {
    fn from(value: CliRelative) -> Self {
        match value {
            CliRelative::Resolve => RelativePaths::Resolve,
            CliRelative::Preserve => RelativePaths::Preserve,
        }
    }
}

#[derive(Parser)]
#[command(author, version, about, after_help = ENV_HELP)]
struct Cli {
    /// Convert Unix to Windows file path(s)
    #[arg(short = 'w', long)]
    windows: bool,
    /// Convert Windows to Unix file path(s)
    #[arg(short = 'u', long, short_alias = 'x')]
    unix: bool,
    /// Do not translate paths found only in the WSL rootfs
    #[arg(short = 'e', long = "no-rootfs")]
    no_rootfs: bool,
    /// Print absolute paths where a relative path can be resolved
    #[arg(short, long)]
    absolute: bool,
    /// How relative Unix paths are translated to Windows
    #[arg(long, value_enum, default_value_t = CliRelative::Resolve)]
    relative: CliRelative,
    /// Read volume mappings from a JSON file instead of the environment
    #[arg(long, value_name = "FILE")]
    mounts: Option<PathBuf>,
    /// Print the active mount table as JSON and exit
    #[arg(long)]
    print_mounts: bool,
    /// Write the active mount table to a JSON file (for --mounts) and exit
    #[arg(long, value_name = "FILE")]
    save_mounts: Option<PathBuf>,
    /// Number of paths translated concurrently
    #[arg(short = 'j', long, default_value_t = DEFAULT_CONCURRENCY)]
    jobs: usize,
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    #[arg(short, long)]
    quiet: bool,
    /// Paths to translate. Read from standard input when omitted.
    paths: Vec<String>,
}

impl Cli {
    /// Forced `(source, target)` pair, or `None` to detect per path.
    fn direction(&self) -> Option<(Format, Format)> {
        if self.windows {
            Some((Format::Unix, Format::Windows))
        } else if self.unix {
            Some((Format::Windows, Format::Unix))
        } else {
            None
        }
    }

    fn log_filter(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "info",
            (false, 2) => "debug",
            _ => "trace",
        }
    }
}

/// One input line, or its lossy rendering when it is not valid UTF-8.
type InputLine = Result<String, String>;

type LineResult = (String, Result<Translation, TranslateError>);

/// Lines of one argument. An empty argument is one empty line.
fn arg_lines(arg: &str) -> Vec<&str> {
    if arg.is_empty() {
        vec![""]
    } else {
        arg.lines().collect()
    }
}

/// Feed input lines to `emit` until the input ends or `emit` returns false.
/// Returns the error that stopped reading, if any.
fn read_input(
    args: &[String],
    mut emit: impl FnMut(InputLine) -> bool,
) -> Option<TranslateError> {
    if !args.is_empty() {
        for line in args.iter().flat_map(|arg| arg_lines(arg)) {
            if !emit(Ok(line.to_string())) {
                break;
            }
        }
        return None;
    }

    let mut stdin = io::stdin().lock();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match stdin.read_until(b'\n', &mut buf) {
            Ok(0) => return None,
            Ok(_) => {
                if buf.ends_with(b"\n") {
                    buf.pop();
                    if buf.ends_with(b"\r") {
                        buf.pop();
                    }
                }
                let line = String::from_utf8(std::mem::take(&mut buf))
                    .map_err(|e| String::from_utf8_lossy(e.as_bytes()).into_owned());
                if !emit(line) {
                    return None;
                }
            }
            Err(e) => return Some(e.into()),
        }
    }
}

async fn translate_line(
    translator: Arc<Translator>,
    direction: Option<(Format, Format)>,
    line: InputLine,
) -> LineResult {
    let line = match line {
        Ok(line) => line,
        Err(lossy) => {
            let err = TranslateError::InvalidPath("not valid UTF-8".to_string());
            return (lossy, Err(err));
        }
    };
    let result = match direction {
        Some((source, target)) => translator.translate(source, target, &line),
        None => translator.translate_auto(&line),
    };
    (line, result)
}

/// Print one result; returns false if the line failed.
fn report((line, result): LineResult) -> bool {
    match result {
        Ok(Translation {
            path,
            rootfs_fallback,
        }) => {
            if rootfs_fallback {
                log::info!("{} exists only in the WSL rootfs (read-only from Windows)", line);
            }
            println!("{}", path);
            true
        }
        Err(e) => {
            eprintln!("error: {}: {}", line, e);
            false
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mounts = match &cli.mounts {
        Some(path) => load_mount_table(path).await?,
        None => MountTable::from_env(),
    };
    if cli.print_mounts || cli.save_mounts.is_some() {
        if cli.print_mounts {
            println!("{}", mounts.to_json()?);
        }
        if let Some(path) = &cli.save_mounts {
            save_mount_table(path, &mounts).await?;
        }
        return Ok(ExitCode::SUCCESS);
    }

    let options = TranslateOptions {
        allow_rootfs_fallback: !cli.no_rootfs,
        absolute: cli.absolute,
        relative: cli.relative.into(),
    };
    let translator = Arc::new(Translator::new(mounts, options).with_resolver(FsResolver));
    let direction = cli.direction();
    let jobs = cli.jobs.max(1);

    // Lines are read on a blocking thread and translated as they arrive;
    // results are printed in input order without waiting for EOF.
    let (task_tx, task_rx) = mpsc::channel(jobs);
    let paths = cli.paths;
    let reader = tokio::task::spawn_blocking(move || {
        read_input(&paths, |line| {
            let task = translate_line(Arc::clone(&translator), direction, line);
            task_tx.blocking_send(task).is_ok()
        })
    });
    let mut handles = AsyncTaskQueue::new(jobs).spawn_ordered(task_rx, jobs);

    let mut failed = false;
    while let Some(handle) = handles.recv().await {
        if !report(handle.await?) {
            failed = true;
        }
    }

    if let Some(e) = reader.await? {
        eprintln!("error: {}", e);
        return Ok(ExitCode::from(EXIT_READ_FAILED));
    }
    Ok(if failed {
        ExitCode::from(EXIT_LINE_FAILED)
    } else {
        ExitCode::SUCCESS
    })
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    if cli.windows && cli.unix {
        eprintln!("error: invalid arguments: -w and -u are mutually exclusive");
        return ExitCode::from(EXIT_INVALID_FLAGS);
    }

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(EXIT_LINE_FAILED)
        }
    }
}
