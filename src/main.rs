use std::{env, io};

use color_eyre::{Section, eyre::eyre};
use pages::{config::SiteConfig, pipeline, scripts};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_logger();

    let config = SiteConfig::from_env();
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None | Some("build") => {
            pipeline::build_once(&config)?;
        }
        Some("render") => {
            let route = args
                .get(1)
                .ok_or_else(|| eyre!("Missing route").with_note(|| "Usage: pages render <route>"))?;
            let doc = pipeline::document_for(route, &config)?;
            doc.write_to(&mut io::stdout().lock())?;
        }
        Some("list") => {
            for script in scripts::all() {
                println!("{}\t{}", script.route, script.label);
            }
        }
        Some(other) => {
            return Err(eyre!("Unknown command '{other}'")
                .with_note(|| "Expected one of: build, render <route>, list"));
        }
    }

    Ok(())
}

// Logs go to stderr; stdout is reserved for rendered pages.
fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pages=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
