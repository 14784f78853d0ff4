use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

use crate::detector::DetectionResult;

const CHECK: &str = "✅";
const CROSS: &str = "❌";

/// Which sanitizers a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    /// AddressSanitizer, MemorySanitizer and ThreadSanitizer only.
    #[default]
    Default,
    All,
}

pub trait OutputFormatter {
    fn render(&self, file: &Path, result: &DetectionResult) -> Vec<String>;

    fn format(&self, file: &Path, result: &DetectionResult) -> Result<()> {
        let mut stdout = io::stdout().lock();
        for line in self.render(file, result) {
            writeln!(stdout, "{}", line)?;
        }
        stdout.flush()?;
        Ok(())
    }
}

pub struct HumanFormatter {
    mode: ReportMode,
}

impl HumanFormatter {
    pub fn new(mode: ReportMode) -> Self {
        Self { mode }
    }

    fn summary(&self, file: &Path, result: &DetectionResult) -> String {
        let file = file.display();
        match self.mode {
            ReportMode::Default if result.any_major() => {
                format!("The file {} was built with a sanitizer:", file)
            }
            ReportMode::All if result.any() => {
                format!("The file {} was built with the sanitizers:", file)
            }
            _ => format!("The file {} was not built with any sanitizers:", file),
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn render(&self, file: &Path, result: &DetectionResult) -> Vec<String> {
        let mut lines = vec![self.summary(file, result)];

        for (sig, used) in result.iter() {
            if self.mode == ReportMode::Default && !sig.major {
                continue;
            }
            lines.push(format!("{}: {}", sig.name, if used { CHECK } else { CROSS }));
        }

        lines
    }
}
