//! rtmpub-encode
//!
//! Reads a YAML write plan and prints one `rtm/write` PDU per line.
//! Usage: `rtmpub-encode [plan.yaml]` (defaults to `rtmpub.yaml`).

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use rtmpub_codec::{config, encode_write_text, RequestIds};
use rtmpub_core::error::Result;

fn run(path: &str) -> Result<()> {
    let plan = config::load_from_file(path)?;
    let ids = RequestIds::new(plan.ids.start);

    tracing::info!(path, writes = plan.writes.len(), "encoding write plan");
    for w in &plan.writes {
        let env = w.to_envelope()?;
        println!("{}", encode_write_text(&env, Some(ids.next_id()?))?);
    }
    Ok(())
}

fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "rtmpub.yaml".into());
    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, "rtmpub-encode failed");
            ExitCode::FAILURE
        }
    }
}
