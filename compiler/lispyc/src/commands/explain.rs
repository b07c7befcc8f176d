//! The `explain` command: display documentation for error codes.

use std::io::{self, Write};

use lispy_diagnostic::ErrorCode;

/// Print the explanation for `code_str`, or a hint on stderr if unknown.
pub fn explain_error<O: Write, E: Write>(
    code_str: &str,
    out: &mut O,
    err: &mut E,
) -> io::Result<bool> {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        writeln!(err, "Unknown error code: {code_str}")?;
        writeln!(err)?;
        writeln!(err, "Known codes:")?;
        for code in ErrorCode::ALL {
            writeln!(err, "  {code}  {}", code.description())?;
        }
        return Ok(false);
    };

    writeln!(out, "{code}: {}", code.description())?;
    writeln!(out)?;
    write!(out, "{}", code.explanation())?;
    Ok(true)
}
