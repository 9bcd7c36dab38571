// src/bin/cli.rs
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    vn_slang::cli::run()?;
    Ok(())
}
