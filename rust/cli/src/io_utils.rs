//! Line input and file helpers shared by the commands.

use std::io::{BufRead, Write};

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Returns the trimmed line (possibly empty), or `None` on EOF or a read error.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use parlor_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  bet 2 \n");
/// assert_eq!(read_stdin_line(&mut input), Some("bet 2".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Writes `question` without a newline, flushes, and reads the answer.
pub fn prompt_line(
    out: &mut dyn Write,
    input: &mut dyn BufRead,
    question: &str,
) -> std::io::Result<Option<String>> {
    write!(out, "{}", question)?;
    out.flush()?;
    Ok(read_stdin_line(input))
}

/// Ensure parent directory exists for given path, creating if needed.
pub fn ensure_parent_dir(path: &std::path::Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}
