use apcase::*;
use clap::{App, Arg, ArgMatches};
use colored::*;
use exitcode::{self, ExitCode};
use flexi_logger::{Logger, LoggerHandle};
use log::{debug, info};
use std::io::{self, BufRead, Write};
use std::process;

macro_rules! log_error {
  ($fmt:expr $(, $arg:expr),*) => {
    eprintln!("{}: {}", "error".bright_red().bold(), format!($fmt $(, $arg)*))
  }
}

fn cli_args<'a, 'b>() -> App<'a, 'b> {
  App::new("apcase")
    .version(APCASE_VERSION)
    .about("Convert text to AP/APA-style title case.")
    .arg(Arg::with_name("keep-spaces")
      .short("k")
      .long("keep-spaces")
      .help("Keep whitespace runs verbatim instead of collapsing them"))
    .arg(Arg::with_name("stopwords")
      .short("s")
      .long("stopwords")
      .takes_value(true)
      .value_name("WORDS")
      .conflicts_with_all(&["stopwords-file", "no-stopwords"])
      .help("Comma- or space-separated list replacing the default stopwords"))
    .arg(Arg::with_name("stopwords-file")
      .short("f")
      .long("stopwords-file")
      .takes_value(true)
      .value_name("PATH")
      .conflicts_with("no-stopwords")
      .help("Load replacement stopwords from a file (one per line, # for comments)"))
    .arg(Arg::with_name("no-stopwords")
      .long("no-stopwords")
      .help("Capitalize every word, including stopwords"))
    .arg(Arg::with_name("list-stopwords")
      .long("list-stopwords")
      .help("Print the stopwords in effect and exit"))
    .arg(Arg::with_name("verbose")
      .short("v")
      .long("verbose")
      .multiple(true)
      .help("Increase log verbosity (-v info, -vv debug, -vvv trace)"))
    .arg(Arg::with_name("TEXT")
      .multiple(true)
      .help("Text to convert; reads lines from stdin when omitted"))
}

fn init_logging(verbosity: u64) -> Result<LoggerHandle, flexi_logger::FlexiLoggerError> {
  let level = match verbosity {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  };
  Logger::try_with_env_or_str(level)?.start()
}

fn load_stopwords(args: &ArgMatches) -> Result<Option<Stopwords>, ExitCode> {
  if args.is_present("no-stopwords") {
    return Ok(Some(Stopwords::empty()))
  }

  if let Some(words) = args.value_of("stopwords") {
    let words = words.split(|c: char| c == ',' || c.is_whitespace()).filter(|w| !w.is_empty());
    return Ok(Some(Stopwords::new(words)))
  }

  if let Some(path) = args.value_of("stopwords-file") {
    return match Stopwords::load(path) {
      Ok(stopwords) => Ok(Some(stopwords)),
      Err(err) => {
        log_error!("{}", err);
        Err(match err.kind {
          StopwordsErrorKind::Io(ref io_err) if io_err.kind() == io::ErrorKind::NotFound => exitcode::NOINPUT,
          StopwordsErrorKind::Io(_) => exitcode::IOERR,
          StopwordsErrorKind::InvalidEntry { .. } => exitcode::DATAERR,
        })
      }
    }
  }

  Ok(None)
}

fn main() {
  let args = cli_args().get_matches();

  let _logger = match init_logging(args.occurrences_of("verbose")) {
    Ok(handle) => Some(handle),
    Err(err) => {
      log_error!("failed to initialize logging: {}", err);
      None
    }
  };

  let mut options = TitleCaseOptions::new().keep_spaces(args.is_present("keep-spaces"));
  match load_stopwords(&args) {
    Ok(Some(stopwords)) => options = options.stopwords(stopwords),
    Ok(None) => {},
    Err(code) => process::exit(code),
  }
  let caser = TitleCaser::from(&options);
  info!("using {} stopwords", caser.effective_stopwords().len());

  if args.is_present("list-stopwords") {
    for word in caser.effective_stopwords().iter() {
      println!("{}", word);
    }
    return
  }

  // Convert text from cmdline args
  if let Some(words) = args.values_of("TEXT") {
    let text = words.collect::<Vec<&str>>().join(" ");
    println!("{}", caser.apply(&text));
    return
  }

  process::exit(run_stdin(&caser));
}

fn run_stdin(caser: &TitleCaser) -> ExitCode {
  let interactive = atty::is(atty::Stream::Stdin);
  if interactive {
    println!("apcase {} ({})", APCASE_VERSION, embedded_triple::get());
  }

  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = stdout.lock();
  let mut lines_read = 0usize;

  for line in stdin.lock().lines() {
    let line = match line {
      Ok(line) => line,
      Err(err) => {
        log_error!("failed to read input: {}", err);
        return exitcode::IOERR
      }
    };
    lines_read += 1;

    if let Err(err) = writeln!(out, "{}", caser.apply(&line)) {
      // Closed pipe downstream
      if err.kind() == io::ErrorKind::BrokenPipe {
        break
      }
      log_error!("failed to write output: {}", err);
      return exitcode::IOERR
    }
  }

  debug!("converted {} lines", lines_read);
  exitcode::OK
}
