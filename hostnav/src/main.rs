mod args;

use std::io;
use std::panic;

use clap::Parser;
use crossbeam_channel::unbounded;
use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Config;

use hostnav::actions::ActionRegistry;
use hostnav::console::{self, Console};
use hostnav::model::ScanModel;
use hostnav::profiles::{profile_for, OS_PROFILE};
use hostnav::results::loader::load_file;
use hostnav::results::{MatchPolicy, ScanResultList};

use crate::args::Args;

const LOG_FILE: &str = "./hostnav.log";

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(args.log_level.unwrap_or(LevelFilter::Info))?;
    init_panic_hook();
    let _profiler = start_profiler(args.profiler_port)?;

    let mut results = ScanResultList::new(MatchPolicy::from_case_sensitive(args.case_sensitive));
    match &args.file {
        Some(file) => {
            load_file(file, &mut results)?;
        }
        None => log::warn!("No results file given, result list is empty"),
    }

    let profile = args.profile.as_deref()
        .map(profile_for)
        .unwrap_or_else(|| OS_PROFILE.clone());
    let registry = ActionRegistry::new(&profile)?;

    let (sender, receiver) = unbounded();
    let model = ScanModel::new(sender, results);
    let console = Console::new(io::stdin().lock(), io::stdout());
    console::run(model, &registry, console, receiver)
}

fn init_logging(level: LevelFilter) -> anyhow::Result<()> {
    let logfile = FileAppender::builder()
        .append(false)
        .encoder(Box::new(PatternEncoder::new("{d} {l} {t} - {m}{n}")))
        .build(LOG_FILE)?;

    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(Root::builder()
            .appender("logfile")
            .build(level))?;

    log4rs::init_config(config)?;

    log::info!("Logging from hostnav started");
    Ok(())
}

fn init_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        if let Some(location) = panic_info.location() {
            log::error!("panic occurred: {:?} at {} line {}:{}", panic_info, location.file(), location.line(), location.column());
        } else {
            log::error!("panic occurred: {:?}", panic_info);
        }
        default_hook(panic_info);
    }));
}

fn start_profiler(port: Option<u16>) -> anyhow::Result<Option<puffin_http::Server>> {
    let Some(port) = port else {
        return Ok(None);
    };
    let server_addr = format!("0.0.0.0:{}", port);
    let server = puffin_http::Server::new(&server_addr)?;
    puffin::set_scopes_on(true);
    log::info!("Profiler listens on {}", server_addr);
    Ok(Some(server))
}
