use kafka_tools::error::ToolError;

/// Exit code of a failed run: the code of the first [`ToolError`] in the
/// chain, 1 otherwise.
pub fn exit_code_for(error: &anyhow::Error) -> u8 {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<ToolError>())
        .map(ToolError::exit_code)
        .unwrap_or(1)
}
