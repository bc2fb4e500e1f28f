use crate::utils::error::{Result, TrackerError};

/// Converts a clock-formatted duration "MM:SS" into total whole seconds.
///
/// Used to express running-event thresholds in the benchmark literals; a
/// malformed string is fatal for the table entry, never silently defaulted.
/// Seconds parts of 60 or more are accepted (the source tables use values
/// like "63:20" for minutes, not seconds, but nothing is enforced).
pub fn parse_time(input: &str) -> Result<u32> {
    let (minutes, seconds) = input
        .split_once(':')
        .ok_or_else(|| TrackerError::ParseError {
            input: input.to_string(),
            reason: "missing ':' separator".to_string(),
        })?;

    let minutes: u32 = minutes
        .trim()
        .parse()
        .map_err(|e| TrackerError::ParseError {
            input: input.to_string(),
            reason: format!("invalid minutes: {}", e),
        })?;
    let seconds: u32 = seconds
        .trim()
        .parse()
        .map_err(|e| TrackerError::ParseError {
            input: input.to_string(),
            reason: format!("invalid seconds: {}", e),
        })?;

    Ok(minutes * 60 + seconds)
}
