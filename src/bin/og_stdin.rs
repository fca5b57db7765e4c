//! Simple CLI that reads HTML from stdin and prints Open Graph JSON to stdout.
//!
//! Usage: `og_stdin [--strict] [--url <URL>]`
//!
//! With `--url`, relative URLs in the output are resolved against it.
//! Set `RUST_LOG=rs_opengraph=debug` to see walk diagnostics on stderr.

use rs_opengraph::{parse_bytes, Intent};
use std::env;
use std::error::Error;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

fn parse_args() -> Result<Intent, String> {
    let mut intent = Intent::default();
    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--strict" => intent.strict = true,
            "--url" => {
                let url = args.next().ok_or("--url requires a value")?;
                intent.url = Some(url);
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    Ok(intent)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let intent = match parse_args() {
        Ok(intent) => intent,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("Usage: og_stdin [--strict] [--url <URL>]");
            std::process::exit(2);
        }
    };

    let mut html = Vec::new();
    io::stdin().read_to_end(&mut html)?;

    let mut og = parse_bytes(&html, intent)?;
    og.to_absolute_urls();

    println!("{}", serde_json::to_string_pretty(&og)?);
    Ok(())
}
