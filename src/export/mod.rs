use std::path::Path;

use eyre::Result;
use log::info;

/// Default name for the exported LaTeX source.
pub const LATEX_FILE_NAME: &str = "optimized_cv.tex";

/// PDF generation is an intentional stub: there is no LaTeX toolchain in
/// this build, so the action only explains itself.
pub const PDF_STUB_MESSAGE: &str = "PDF generation requires server-side LaTeX compilation, \
which is not available in this build. Save the LaTeX source instead and compile it yourself \
(pdflatex, tectonic, or Overleaf all work).";

/// Writes the LaTeX source exactly as the model produced it. No
/// re-encoding, no trailing-newline fixups.
pub fn save_latex(path: &Path, latex: &str) -> Result<()> {
    std::fs::write(path, latex)?;
    info!("wrote LaTeX source to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exported_latex_is_byte_for_byte() {
        let latex = "\\documentclass{moderncv}\r\n% weird spacing   \n\\begin{document}é\\end{document}";
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LATEX_FILE_NAME);

        save_latex(&path, latex).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, latex.as_bytes());
    }

    #[test]
    fn test_export_overwrites_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LATEX_FILE_NAME);

        save_latex(&path, "first").unwrap();
        save_latex(&path, "second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }
}
