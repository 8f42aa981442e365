use anyhow::Context;
use kafka_tools::error::ToolError;
use std::io::{BufRead, Write};

/// Asks before a destructive action. Only an answer of exactly `y`
/// proceeds; anything else fails with [`ToolError::Declined`].
pub fn confirm(
    out: &mut dyn Write,
    input: &mut dyn BufRead,
    message: &str,
) -> Result<(), anyhow::Error> {
    writeln!(out, "{message} Are you sure?")?;
    write!(out, "y to proceed, any other key to exit: ")?;
    out.flush()?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("While reading confirmation")?;

    if answer.trim_end_matches(['\r', '\n']) == "y" {
        writeln!(out, "Proceeding with deletion.")?;
        Ok(())
    } else {
        writeln!(out, "Exiting")?;
        Err(ToolError::Declined.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(answer: &str) -> (Result<(), anyhow::Error>, String) {
        let mut out = Vec::new();
        let result = confirm(&mut out, &mut answer.as_bytes(), "Delete everything.");
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn y_proceeds() {
        let (result, out) = ask("y\n");

        assert!(result.is_ok());
        assert_eq!(
            out,
            "Delete everything. Are you sure?\n\
             y to proceed, any other key to exit: Proceeding with deletion.\n"
        );
    }

    #[test]
    fn anything_else_declines() {
        for answer in ["n\n", "Y\n", "yes\n", ""] {
            let (result, out) = ask(answer);

            let error = result.unwrap_err();
            assert!(matches!(error.downcast_ref::<ToolError>(), Some(ToolError::Declined)));
            assert!(out.ends_with("Exiting\n"), "answer {answer:?}");
        }
    }
}
