use crate::prelude::{InputError, InputResult};

/// Parses one comma-separated decimal string into a vector of floats.
///
/// Tokens are trimmed before parsing; a blank string yields an empty vector
/// and the shape checks downstream decide whether that is acceptable.
pub fn parse_decimal_list(text: &str) -> InputResult<Vec<f64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    trimmed
        .split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<f64>()
                .map_err(|_| InputError::Parse(token.to_string()))
        })
        .collect()
}

/// Parses the latitude and longitude fields together.
pub fn parse_vectors(lat_text: &str, lon_text: &str) -> InputResult<(Vec<f64>, Vec<f64>)> {
    let lat = parse_decimal_list(lat_text)?;
    let lon = parse_decimal_list(lon_text)?;
    Ok((lat, lon))
}
