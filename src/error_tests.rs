//! Unit tests for the crate error type

#[cfg(test)]
mod tests {
    use crate::DirkindError;
    use std::error::Error;
    use std::io;

    #[test]
    fn test_invalid_input_display() {
        let error = DirkindError::InvalidInput("bad key".to_string());
        assert_eq!(error.to_string(), "Invalid input: bad key");
    }

    #[test]
    fn test_io_error_keeps_kind_and_source() {
        let error: DirkindError = io::Error::from(io::ErrorKind::NotFound).into();
        match &error {
            DirkindError::IoError(inner) => assert_eq!(inner.kind(), io::ErrorKind::NotFound),
            _ => panic!("Expected IoError variant"),
        }
        assert!(error.to_string().starts_with("I/O error:"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_config_error_conversion() {
        let error: DirkindError = ::config::ConfigError::Message("broken".into()).into();
        assert!(matches!(error, DirkindError::ConfigError(_)));
        assert!(error.to_string().contains("broken"));
    }

    #[test]
    fn test_error_debug() {
        let error = DirkindError::InvalidInput("test error".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("InvalidInput"));
        assert!(debug.contains("test error"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DirkindError>();
    }
}
