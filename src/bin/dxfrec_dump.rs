//! Diagnostic: read an entity stream and dump what was found.
//!
//! Usage:
//!   cargo run --bin dxfrec_dump -- <file> [acad-version]
//!
//! The file is expected to contain bare entity records (the content of an
//! ENTITIES section), terminated by `0/EOF` or end of file.

use anyhow::{bail, Context};
use dxfrec::entities::{read_next_entity, CodecContext};
use dxfrec::io::dxf::DxfTextReader;
use dxfrec::DxfVersion;
use std::fs::File;
use std::io::BufReader;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        bail!("usage: dxfrec_dump <file> [acad-version]");
    }

    let version = match args.get(2) {
        Some(v) => DxfVersion::try_from_version_string(v)
            .with_context(|| format!("unknown version '{}'", v))?,
        None => DxfVersion::AC1032,
    };

    let file = File::open(&args[1]).with_context(|| format!("opening {}", args[1]))?;
    let mut reader = DxfTextReader::new(BufReader::new(file));
    let mut ctx = CodecContext::new(version);

    let mut count = 0usize;
    while let Some(entity) = read_next_entity(&mut reader, &mut ctx)? {
        count += 1;
        let common = entity.common();
        let handle = if common.handle.is_valid() {
            common.handle.to_hex()
        } else {
            "-".to_string()
        };
        println!(
            "{:4}  {:<10}  handle={:<8}  layer={:<12}  linetype={}",
            count,
            entity.record_type(),
            handle,
            common.layer,
            common.linetype
        );
    }

    println!("{} record(s) read ({})", count, version);

    if !ctx.notifications.is_empty() {
        println!("\ndiagnostics:");
        for notification in &ctx.notifications {
            println!("  {}", notification);
        }
    }

    Ok(())
}
