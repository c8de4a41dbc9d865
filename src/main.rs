mod astro_math;
pub mod config;
mod coordinates;
mod errors;
mod offset;
mod stellarium;
mod util;

#[cfg(test)]
#[macro_use]
extern crate assert_float_eq;

use config::Config;
use eyre::WrapErr;
use stellarium::StellariumClient;

const CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config: Config = confy::load_path(CONFIG_PATH)
        .wrap_err_with(|| format!("Couldn't parse configuration at {}", CONFIG_PATH))?;
    config.validate()?;

    eprintln!("Center the telescope reticle on a known object");
    eprintln!(
        "Slew virtual telescope {:?} to that object in Stellarium (Ctrl+1)",
        config.stellarium.telescope_name
    );
    eprintln!("Select the object you want the offset to");

    let client = StellariumClient::new(&config.stellarium)?;
    tracing::debug!("Using Stellarium at {}", client.base_url());

    let instructions = offset::plan_offset(&client, &config).await?;
    println!("{}", instructions);
    Ok(())
}
