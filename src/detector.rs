use crate::binary::TargetFile;
use crate::error::Result;
use crate::signatures::{self, SanitizerSignature, SANITIZER_COUNT, SIGNATURES};
use crate::symbols::SymbolSource;

/// One flag per entry of [`SIGNATURES`], in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DetectionResult {
    used: [bool; SANITIZER_COUNT],
}

impl DetectionResult {
    /// `None` for a name outside the signature table.
    pub fn is_used(&self, name: &str) -> Option<bool> {
        signatures::find(name).map(|idx| self.used[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static SanitizerSignature, bool)> + '_ {
        SIGNATURES.iter().zip(self.used.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    /// Any of ASan, MSan or TSan.
    pub fn any_major(&self) -> bool {
        self.iter().any(|(sig, used)| sig.major && used)
    }

    pub fn any(&self) -> bool {
        self.used.iter().any(|&used| used)
    }
}

/// Case-sensitive substring search of every tag in a symbol dump.
///
/// Tags are not anchored to symbol boundaries, so a tag embedded in an
/// unrelated name counts as a hit.
pub fn detect(symbols: &str) -> DetectionResult {
    let mut result = DetectionResult::default();
    for (flag, sig) in result.used.iter_mut().zip(SIGNATURES.iter()) {
        *flag = symbols.contains(sig.tag);
        if *flag {
            log::debug!("matched {} ({})", sig.name, sig.tag);
        }
    }
    result
}

/// Extracts the symbol table of a validated file and matches it.
pub fn detect_sanitizers(target: &TargetFile, source: &dyn SymbolSource) -> Result<DetectionResult> {
    let symbols = source.extract_symbols(target.path())?;
    log::debug!(
        "{}: {} bytes of symbol text from {}",
        target.path().display(),
        symbols.len(),
        source.name()
    );
    Ok(detect(&symbols))
}
