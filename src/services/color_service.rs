use tracing::debug;

use crate::{
    color::{LchColor, parse_lch},
    dto::color::{ColorSnapshot, LerpRequest, ParseQuery, StopQuery},
    error::ServiceError,
    state::SharedState,
};

/// Parse a color literal into its snapshot.
pub fn parse(query: &ParseQuery) -> Result<ColorSnapshot, ServiceError> {
    let color = parse_lch(&query.value)?;
    debug!(input = %query.value, %color, "parsed color");
    Ok(color.into())
}

/// Stop `index` of the default ramp the parsed color belongs to.
pub fn stop(state: &SharedState, query: &StopQuery) -> Result<ColorSnapshot, ServiceError> {
    let color = parse_lch(&query.value)?;
    let stop = state.generator().color_at(color, query.index);
    debug!(source = %color, index = query.index, %stop, "resolved ramp stop");
    Ok(stop.into())
}

/// Blend two colors, taking the shorter way around the hue circle.
pub fn lerp(request: &LerpRequest) -> ColorSnapshot {
    let from = LchColor::from(request.from);
    let to = LchColor::from(request.to);
    from.lerp(to, request.t).into()
}
