//! RTL source file loading
//!
//! The file content is loaded as raw text and handed to the editor buffer
//! untouched; no parsing or validation happens client-side.

use std::path::Path;

use tbgen_core::error::{Error, Result};

/// File extensions accepted as RTL source
pub const RTL_EXTENSIONS: &[&str] = &["v", "sv", "vhd", "vhdl"];

/// Check whether a path carries one of the accepted RTL extensions
/// (case-insensitive).
pub fn is_rtl_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            RTL_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Read an RTL file's raw text content.
///
/// Fails with [`Error::UnsupportedFile`] for an unexpected extension and
/// [`Error::FileNotFound`] when the path does not exist.
pub fn read_rtl_file(path: &Path) -> Result<String> {
    if !is_rtl_file(path) {
        return Err(Error::unsupported_file(path));
    }
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }
    Ok(std::fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_accepted_extensions() {
        assert!(is_rtl_file(&PathBuf::from("counter.v")));
        assert!(is_rtl_file(&PathBuf::from("fifo.sv")));
        assert!(is_rtl_file(&PathBuf::from("alu.vhd")));
        assert!(is_rtl_file(&PathBuf::from("alu.vhdl")));
        assert!(is_rtl_file(&PathBuf::from("COUNTER.V")));
    }

    #[test]
    fn test_rejected_extensions() {
        assert!(!is_rtl_file(&PathBuf::from("notes.txt")));
        assert!(!is_rtl_file(&PathBuf::from("design.vh.bak")));
        assert!(!is_rtl_file(&PathBuf::from("Makefile")));
    }

    #[test]
    fn test_read_rtl_file_returns_raw_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counter.v");
        let source = "module counter(input clk);\nendmodule\n";
        std::fs::write(&path, source).unwrap();

        assert_eq!(read_rtl_file(&path).unwrap(), source);
    }

    #[test]
    fn test_read_rtl_file_rejects_wrong_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counter.txt");
        std::fs::write(&path, "module counter; endmodule").unwrap();

        assert!(matches!(
            read_rtl_file(&path).unwrap_err(),
            Error::UnsupportedFile { .. }
        ));
    }

    #[test]
    fn test_read_rtl_file_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ghost.v");

        assert!(matches!(
            read_rtl_file(&path).unwrap_err(),
            Error::FileNotFound { .. }
        ));
    }
}
