/// Failures that end a run with a dedicated exit code.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("{0}")]
    Usage(String),
    #[error("Deletion was not confirmed")]
    Declined,
    #[error("Exception found in broker output")]
    RemoteException(String),
}

impl ToolError {
    pub fn usage(message: impl Into<String>) -> Self {
        ToolError::Usage(message.into())
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            ToolError::Usage(_) => 2,
            ToolError::Declined => 255,
            ToolError::RemoteException(_) => 254,
        }
    }
}

/// Fails with [`ToolError::RemoteException`] if the output carries exception text.
pub fn check_for_exception(output: &str) -> Result<(), ToolError> {
    if output.contains("Exception") {
        return Err(ToolError::RemoteException(output.to_owned()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(ToolError::usage("conflict").exit_code(), 2);
        assert_eq!(ToolError::Declined.exit_code(), 255);
        assert_eq!(ToolError::RemoteException(String::new()).exit_code(), 254);
    }

    #[test]
    fn detects_exception_text() {
        assert!(check_for_exception("log.retention.ms=1000").is_ok());
        let error = check_for_exception("org.apache.kafka.common.errors.TimeoutException: boom")
            .unwrap_err();
        assert!(matches!(error, ToolError::RemoteException(text) if text.contains("Timeout")));
    }
}
