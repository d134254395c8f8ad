use anyhow::{anyhow, Result};
use std::time::Duration;

pub fn parse_timeout(timeout_str: &str) -> Result<Duration> {
    let timeout_str = timeout_str.trim();
    let parsed = if let Some(millis) = timeout_str.strip_suffix("ms") {
        millis.parse().ok().map(Duration::from_millis)
    } else if let Some(minutes) = timeout_str.strip_suffix('m') {
        minutes
            .parse::<u64>()
            .ok()
            .and_then(|m| m.checked_mul(60))
            .map(Duration::from_secs)
    } else if let Some(seconds) = timeout_str.strip_suffix('s') {
        seconds.parse().ok().map(Duration::from_secs)
    } else {
        timeout_str.parse().ok().map(Duration::from_secs)
    };

    parsed.ok_or_else(|| anyhow!("Invalid timeout: {}", timeout_str))
}

/// Hides the secret part of an `Authorization` value, keeping the scheme.
pub fn mask_authorization(value: &str) -> String {
    match value.split_once(' ') {
        Some((scheme, _)) => format!("{} ****", scheme),
        None => "****".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timeout_units() {
        assert_eq!(parse_timeout("30s").unwrap(), Duration::from_secs(30));
        assert_eq!(parse_timeout("250ms").unwrap(), Duration::from_millis(250));
        assert_eq!(parse_timeout("2m").unwrap(), Duration::from_secs(120));
        assert_eq!(parse_timeout("15").unwrap(), Duration::from_secs(15));
    }

    #[test]
    fn test_parse_timeout_rejects_garbage() {
        assert!(parse_timeout("soon").is_err());
        assert!(parse_timeout("-5s").is_err());
        assert!(parse_timeout("").is_err());
        assert!(parse_timeout("307445734561825861m").is_err());
        assert!(parse_timeout("99999999999999999999s").is_err());
    }

    #[test]
    fn test_mask_authorization() {
        assert_eq!(mask_authorization("ExtraHop apikey=abc"), "ExtraHop ****");
        assert_eq!(mask_authorization("abc"), "****");
    }
}
