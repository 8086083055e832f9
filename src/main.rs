// std imports
use std::{
    io::{Write, stdin, stdout},
    process,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use listmatch::{app, cli, config, error::*, registry::Registry};

const LISTMATCH_DEBUG_LOG: &str = "LISTMATCH_DEBUG_LOG";
const LISTMATCH_DEBUG_LOG_STYLE: &str = "LISTMATCH_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(LISTMATCH_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(LISTMATCH_DEBUG_LOG)
                .write_style(LISTMATCH_DEBUG_LOG_STYLE),
        )
        .format_timestamp_micros()
        .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn run() -> Result<bool> {
    bootstrap();

    let opt = cli::Opt::parse();

    let (configs, no_default) = opt.config_files();
    let mut settings = config::at(configs).no_default(no_default).load()?;

    if let Some(list) = opt.inline_list() {
        log::debug!("using inline list {:?}", opt.list);
        settings.lists.insert(opt.list.clone(), list);
    }

    let registry = Registry::from_settings(&settings)?;

    if opt.list_names {
        let mut out = stdout().lock();
        for name in registry.names() {
            writeln!(out, "{}", name)?;
        }
        return Ok(true);
    }

    let app = app::App::new(&registry, app::Options { quiet: opt.quiet });
    let mut out = stdout().lock();

    if opt.values.is_empty() {
        app.run_lines(&opt.list, stdin().lock(), &mut out)
    } else {
        app.run(&opt.list, &opt.values, &mut out)
    }
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(2);
        }
    }
}
