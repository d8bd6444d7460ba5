//! Reading line batches and writing sorted output

use memmap2::Mmap;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use tracing::debug;

use crate::config::SortConfig;
use crate::error::{SortContext, SortError, SortResult};

/// Read-only memory map of an input file
pub struct MappedFile {
    mmap: Option<Mmap>,
}

impl MappedFile {
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        // Zero-length files cannot be mapped on every platform
        if file.metadata()?.len() == 0 {
            return Ok(Self { mmap: None });
        }
        // SAFETY: the map is read-only and only lives while the batch is split
        // into owned lines; the file is not written by this process.
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(Self { mmap: Some(mmap) })
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }
}

/// Split raw input on `terminator`. A trailing terminator does not start an
/// extra line; everything else, including `\r`, stays part of the line text.
/// `source` names the input in errors (`-` for stdin).
pub fn split_lines(data: &[u8], terminator: u8, source: &str) -> SortResult<Vec<String>> {
    let mut lines = Vec::new();
    let mut start = 0;

    for (i, &byte) in data.iter().enumerate() {
        if byte == terminator {
            lines.push(decode_line(&data[start..i], source, lines.len())?);
            start = i + 1;
        }
    }

    // Handle last line if it doesn't end with a terminator
    if start < data.len() {
        lines.push(decode_line(&data[start..], source, lines.len())?);
    }

    Ok(lines)
}

fn decode_line(bytes: &[u8], source: &str, index: usize) -> SortResult<String> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|_| SortError::invalid_utf8(source, index + 1))
}

/// Collect the whole batch from the configured files, or stdin
pub fn read_batch(config: &SortConfig) -> SortResult<Vec<String>> {
    let terminator = config.line_terminator();

    if config.reading_from_stdin() {
        return read_stdin(terminator);
    }

    let mut batch = Vec::new();
    for file in &config.input_files {
        let lines = if file == "-" {
            read_stdin(terminator)?
        } else {
            read_file(Path::new(file), terminator)?
        };
        debug!(file = %file, lines = lines.len(), "read input");
        batch.extend(lines);
    }
    Ok(batch)
}

fn read_stdin(terminator: u8) -> SortResult<Vec<String>> {
    let mut buffer = Vec::new();
    io::stdin().lock().read_to_end(&mut buffer)?;
    split_lines(&buffer, terminator, "-")
}

fn read_file(path: &Path, terminator: u8) -> SortResult<Vec<String>> {
    let name = path.display().to_string();
    if path.is_dir() {
        return Err(SortError::is_directory(&name));
    }
    let mapped = MappedFile::open(path).with_file_context(&name)?;
    split_lines(mapped.as_bytes(), terminator, &name)
}

/// Write `lines` to the configured output, terminating every line
pub fn write_batch(config: &SortConfig, lines: &[String]) -> SortResult<()> {
    let mut output: Box<dyn Write> = if let Some(output_file) = &config.output_file {
        Box::new(BufWriter::new(
            File::create(output_file).with_file_context(output_file)?,
        ))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    write_lines(&mut output, lines, config.line_terminator())?;
    output.flush()?;
    Ok(())
}

/// Write each line followed by `terminator`
pub fn write_lines<W: Write + ?Sized>(out: &mut W, lines: &[String], terminator: u8) -> io::Result<()> {
    for line in lines {
        out.write_all(line.as_bytes())?;
        out.write_all(&[terminator])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_split_lines_trailing_terminator() {
        let lines = split_lines(b"b\na\n", b'\n', "-").expect("split");
        assert_eq!(lines, vec!["b", "a"]);

        let lines = split_lines(b"b\na", b'\n', "-").expect("split");
        assert_eq!(lines, vec!["b", "a"]);
    }

    #[test]
    fn test_split_lines_keeps_blank_lines_and_cr() {
        let lines = split_lines(b"1\r\n\n2\r\n", b'\n', "-").expect("split");
        assert_eq!(lines, vec!["1\r", "", "2\r"]);
    }

    #[test]
    fn test_split_lines_zero_terminated() {
        let lines = split_lines(b"x\ny\0z\0", b'\0', "-").expect("split");
        assert_eq!(lines, vec!["x\ny", "z"]);
    }

    #[test]
    fn test_split_lines_rejects_invalid_utf8() {
        let err = split_lines(b"ok\n\xff\xfe\n", b'\n', "input.txt").unwrap_err();
        assert!(matches!(
            err,
            SortError::InvalidUtf8 { ref file, line: 2 } if file == "input.txt"
        ));
    }

    #[test]
    fn test_read_batch_concatenates_files() -> SortResult<()> {
        let temp_dir = TempDir::new()?;
        let first = temp_dir.path().join("first.txt");
        let second = temp_dir.path().join("second.txt");
        let empty = temp_dir.path().join("empty.txt");
        fs::write(&first, "3\n1\n")?;
        fs::write(&second, "2")?;
        fs::write(&empty, "")?;

        let config = SortConfig::default().with_input_files(vec![
            first.to_string_lossy().to_string(),
            empty.to_string_lossy().to_string(),
            second.to_string_lossy().to_string(),
        ]);
        assert_eq!(read_batch(&config)?, vec!["3", "1", "2"]);
        Ok(())
    }

    #[test]
    fn test_read_batch_missing_file() {
        let config = SortConfig::default()
            .with_input_files(vec!["/definitely/not/here.txt".to_string()]);
        let err = read_batch(&config).unwrap_err();
        assert!(matches!(err, SortError::FileNotFound { .. }));
    }

    #[test]
    fn test_read_batch_directory() -> SortResult<()> {
        let temp_dir = TempDir::new()?;
        let config = SortConfig::default()
            .with_input_files(vec![temp_dir.path().to_string_lossy().to_string()]);
        let err = read_batch(&config).unwrap_err();
        assert!(matches!(err, SortError::IsDirectory { .. }));
        Ok(())
    }

    #[test]
    fn test_write_batch_to_file() -> SortResult<()> {
        let temp_dir = TempDir::new()?;
        let output = temp_dir.path().join("out.txt");
        let config = SortConfig::default()
            .with_output_file(Some(output.to_string_lossy().to_string()));

        write_batch(&config, &["a".to_string(), "".to_string(), "b".to_string()])?;
        assert_eq!(fs::read_to_string(&output)?, "a\n\nb\n");
        Ok(())
    }
}
