use crate::parsing::{HtmlFragment, convert_lines};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Missing {}", .0.display())]
    MissingInput(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a markdown file into newline-stripped lines
///
/// Any failure to open the file is reported as [`IoError::MissingInput`].
pub fn read_lines(path: &Path) -> Result<Vec<String>, IoError> {
    let mut file = File::open(path).map_err(|_| IoError::MissingInput(path.to_path_buf()))?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Write every line of the fragment, each followed by a newline
///
/// The destination is created or truncated.
pub fn write_html(path: &Path, html: &HtmlFragment) -> Result<(), IoError> {
    let mut writer = BufWriter::new(File::create(path)?);
    for line in html.lines() {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Convert the markdown file at `input` and write the HTML to `output`
///
/// The input is read completely before the output is opened, so a missing
/// input never creates or truncates the output.
pub fn convert_file(input: &Path, output: &Path) -> Result<(), IoError> {
    let lines = read_lines(input)?;
    log::debug!("read {} lines from {}", lines.len(), input.display());

    let html = convert_lines(lines.iter().map(String::as_str));
    if let Some(list_type) = html.unclosed_list {
        log::debug!("closing <{}> left open at end of input", list_type.tag());
    }

    write_html(output, &html)?;
    log::debug!(
        "wrote {} lines to {}",
        html.lines().count(),
        output.display()
    );
    Ok(())
}
