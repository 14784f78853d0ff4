/// A sanitizer and the symbol-name fragment its runtime leaves behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SanitizerSignature {
    pub name: &'static str,
    pub tag: &'static str,
    /// Part of the default report (ASan, MSan, TSan).
    pub major: bool,
}

pub const SANITIZER_COUNT: usize = 6;

/// Report order is table order.
pub static SIGNATURES: [SanitizerSignature; SANITIZER_COUNT] = [
    SanitizerSignature {
        name: "AddressSanitizer",
        tag: "_asan",
        major: true,
    },
    SanitizerSignature {
        name: "MemorySanitizer",
        tag: "_msan",
        major: true,
    },
    SanitizerSignature {
        name: "ThreadSanitizer",
        tag: "_tsan",
        major: true,
    },
    SanitizerSignature {
        name: "UndefinedBehaviorSanitizer",
        tag: "_ubsan",
        major: false,
    },
    SanitizerSignature {
        name: "DataFlowSanitizer",
        tag: "_dfsan",
        major: false,
    },
    SanitizerSignature {
        name: "LeakSanitizer",
        tag: "_lsan",
        major: false,
    },
];

pub fn find(name: &str) -> Option<usize> {
    SIGNATURES.iter().position(|sig| sig.name == name)
}
