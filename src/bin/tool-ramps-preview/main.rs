//! Helper tool rendering every family ramp and a hue sweep to HTML for visual review.

#[cfg(feature = "tool-ramps-preview")]
mod preview;

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "tool-ramps-preview")]
    {
        preview::run()?;
    }
    Ok(())
}
