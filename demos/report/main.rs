//! Generates a bunker or catwalk and prints a short report.
//!
//! ```text
//! cargo run --example report                        # reference bunker
//! cargo run --example report -- bunker params.json  # bunker from a JSON file
//! cargo run --example report -- catwalk             # default catwalk
//! ```
//!
//! Set `RUST_LOG=skirmish_terrain=debug` to trace family and pipeline steps.

use skirmish_terrain::operations::query::VolumeParams;
use skirmish_terrain::{generate, generate_catwalk, CatwalkParameters, GeometryParameters};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("skirmish_terrain=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let kind = args.next().unwrap_or_else(|| "bunker".into());
    let json = args.next().map(std::fs::read_to_string).transpose()?;

    let model = match kind.as_str() {
        "catwalk" => {
            let params = match json {
                Some(json) => CatwalkParameters::from_json(&json)?,
                None => CatwalkParameters::default(),
            };
            generate_catwalk(&params)?
        }
        _ => {
            let params = match json {
                Some(json) => GeometryParameters::from_json(&json)?,
                None => GeometryParameters::skirmish_bunker(),
            };
            generate(&params)?
        }
    };

    let bounds = model.bounding_box()?;
    let size = bounds.size();
    println!("{kind}: {:.1} x {:.1} x {:.1}", size.x, size.y, size.z);
    println!("bodies: {}", model.bodies()?.len());
    println!("solids in store: {}", model.store().len());
    println!(
        "volume (2.0 grid): {:.0}",
        model.volume(VolumeParams { cell_size: 2.0 })?
    );
    Ok(())
}
