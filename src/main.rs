use std::path::PathBuf;
use std::process;

use clap::{Arg, ArgMatches, Command};
use log::{debug, info};

mod app;
mod backends;
mod deps;
mod error;
mod exec;
mod orientation;
mod session;
mod udev;
mod ui;

use app::{App, Settings};
use error::Result;
use exec::{DryRunRunner, Runner, SystemRunner};
use orientation::Orientation;
use session::SessionKind;
use ui::{DialogPresenter, Presenter, TerminalPresenter};

const TOUCHROT_VERSION: &str = env!("CARGO_PKG_VERSION");

fn cli() -> Command<'static> {
    Command::new("touchrot")
        .version(TOUCHROT_VERSION)
        .about("Rotate the display and persist a matching touchscreen calibration rule")
        .arg(
            Arg::new("session")
                .long("session")
                .value_name("SESSION")
                .possible_values(["x11", "wayland"])
                .help("Session type to drive instead of $XDG_SESSION_TYPE")
                .takes_value(true),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .value_name("OUTPUT")
                .help("Display output to rotate instead of the detected one")
                .takes_value(true),
        )
        .arg(
            Arg::new("touchscreen")
                .long("touchscreen")
                .value_name("TOUCHSCREEN")
                .help("Touchscreen device name instead of the detected one")
                .takes_value(true),
        )
        .arg(
            Arg::new("orientation")
                .long("orientation")
                .short('o')
                .value_name("ORIENTATION")
                .help("1-4 or normal, left, right, inverted; skips the prompt")
                .validator(|s| s.parse::<Orientation>().map(|_| ()).map_err(|e| e.to_string()))
                .takes_value(true),
        )
        .arg(
            Arg::new("rules-file")
                .long("rules-file")
                .value_name("PATH")
                .default_value(udev::RULES_PATH)
                .help("udev rule file to overwrite")
                .takes_value(true),
        )
        .arg(
            Arg::new("elevate")
                .long("elevate")
                .value_name("COMMAND")
                .help("Privilege helper for the rule write and reboot [default: sudo, pkexec with --dialog]")
                .takes_value(true),
        )
        .arg(
            Arg::new("dialog")
                .long("dialog")
                .short('g')
                .help("Use graphical dialogs (zenity) instead of the terminal"),
        )
        .arg(
            Arg::new("no-reboot")
                .long("no-reboot")
                .help("Do not offer to reboot afterwards"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .short('n')
                .help("Detect devices but only print the commands that would change the system"),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .short('l')
                .help("Print the detected session, output and touchscreen, then exit"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .requires("list")
                .help("Print --list results as JSON"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .multiple_occurrences(true)
                .help("Log more; repeat for debug output"),
        )
}

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() {
    let matches = cli().get_matches();
    init_logging(matches.occurrences_of("verbose"));

    let runner: Box<dyn Runner> = if matches.is_present("dry-run") {
        Box::new(DryRunRunner::new(SystemRunner))
    } else {
        Box::new(SystemRunner)
    };
    let mut ui: Box<dyn Presenter + '_> = if matches.is_present("dialog") {
        Box::new(DialogPresenter::new(runner.as_ref()))
    } else {
        Box::new(TerminalPresenter::stdio())
    };

    if let Err(e) = run(&matches, runner.as_ref(), ui.as_mut()) {
        debug!("{:?}", e);
        ui.report_error(&e.to_string());
        process::exit(1);
    }
}

fn run(matches: &ArgMatches, runner: &dyn Runner, ui: &mut dyn Presenter) -> Result<()> {
    let session = match matches.value_of("session") {
        Some(session) => session.parse::<SessionKind>()?,
        None => SessionKind::from_env()?,
    };
    info!("session: {}", session);
    let backend = backends::for_session(session);

    let default_elevate = if matches.is_present("dialog") {
        "pkexec"
    } else {
        "sudo"
    };
    let settings = Settings {
        rules_path: PathBuf::from(matches.value_of("rules-file").unwrap_or(udev::RULES_PATH)),
        elevate: matches
            .value_of("elevate")
            .unwrap_or(default_elevate)
            .to_owned(),
        orientation: matches
            .value_of("orientation")
            .map(str::parse::<Orientation>)
            .transpose()?,
        output: matches.value_of("output").map(str::to_owned),
        touchscreen: matches.value_of("touchscreen").map(str::to_owned),
        offer_reboot: !matches.is_present("no-reboot"),
    };

    let app = App {
        session,
        backend: backend.as_ref(),
        runner,
        settings,
    };

    if matches.is_present("list") {
        let detection = app.detect(&*ui)?;
        if matches.is_present("json") {
            println!("{}", serde_json::to_string_pretty(&detection)?);
        } else {
            println!("session:     {}", detection.session);
            println!("output:      {}", detection.output);
            println!("touchscreen: {}", detection.touchscreen);
        }
        return Ok(());
    }

    app.run(ui)
}
