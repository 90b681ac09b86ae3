use microstrip_lines::errors::MicrostripError;
use microstrip_lines::wavelength::quarter_wavelength;
use microstrip_lines::wheeler::{epsilon_eff, z0};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), MicrostripError> {
    // Formula diagnostics land on stderr when RUST_LOG=debug is set; stdout
    // carries only the report below.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // Worked example: 3.15 mm trace on a 1.5 mm substrate at 2.24 GHz.
    let er = 0.378;
    let (w, h) = (3.15, 1.5);
    let freq = 2.240e9;

    let z = z0(er, w, h)?;

    let eeff = epsilon_eff(er, w, h)?;
    let lq = quarter_wavelength(freq, eeff)?;

    println!("Z0 = {z:.2} Ω");
    println!("ε_eff = {eeff:.3}");
    // TODO: the demo frequency is 2.24 GHz but the label still says 1 GHz.
    println!("Quarter wavelength at 1 GHz = {lq:.4} m");

    Ok(())
}
