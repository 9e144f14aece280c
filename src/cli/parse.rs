//! Value parsers bridging clap arguments into core types

use std::str::FromStr;

use wayfind_core::format::OutputFormat;

/// Parse `--format` via the core FromStr impl.
///
/// OutputFormat lives in wayfind-core, so clap's ValueEnum cannot be
/// implemented for it here; a value parser does the same job.
pub fn parse_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_str(s).map_err(|e| e.to_string())
}

/// Parse an `--edge` value of the form "FROM,TO"
pub fn parse_edge(s: &str) -> Result<(String, String), String> {
    let Some((from, to)) = s.split_once(',') else {
        return Err(format!("invalid edge '{s}' (expected FROM,TO)"));
    };
    if from.is_empty() || to.is_empty() {
        return Err(format!("invalid edge '{s}' (empty vertex key)"));
    }
    Ok((from.to_string(), to.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edge() {
        assert_eq!(parse_edge("A,B").unwrap(), ("A".into(), "B".into()));
        assert!(parse_edge("A").is_err());
        assert!(parse_edge(",B").is_err());
        assert!(parse_edge("A,").is_err());
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("json").unwrap(), OutputFormat::Json);
        assert!(parse_format("records").is_err());
    }
}
