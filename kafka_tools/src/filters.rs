mod consumer_selection;
mod topic_selection;

pub use consumer_selection::*;
pub use topic_selection::*;

use crate::error::ToolError;
use regex::Regex;

pub(crate) fn compile_regex(pattern: &str) -> Result<Regex, ToolError> {
    Regex::new(pattern)
        .map_err(|e| ToolError::usage(format!("Invalid regular expression '{pattern}': {e}")))
}
