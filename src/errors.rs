/// Error types for the edges of the pricer.
/// The pricing function itself is total and never returns these;
/// they come from parsing labels, building a day-count basis, and loading config.
#[derive(Debug, thiserror::Error)]
pub enum PricerError {
    #[error("config error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("unrecognized option kind: {0:?} (expected \"call\" or \"put\")")]
    InvalidOptionKind(String),

    #[error("day-count basis must be positive, got {0}")]
    InvalidDayCount(u32),
}

impl From<serde_json::Error> for PricerError {
    fn from(e: serde_json::Error) -> Self {
        PricerError::Parse(e.to_string())
    }
}

pub type PricerResult<T> = Result<T, PricerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_input() {
        let e = PricerError::InvalidOptionKind("Call".into());
        assert!(e.to_string().contains("\"Call\""), "message was: {e}");

        let e = PricerError::InvalidDayCount(0);
        assert_eq!(e.to_string(), "day-count basis must be positive, got 0");
    }

    #[test]
    fn test_json_error_maps_to_parse() {
        let err = serde_json::from_str::<f64>("not json").unwrap_err();
        let e: PricerError = err.into();
        assert!(matches!(e, PricerError::Parse(_)));
    }
}
