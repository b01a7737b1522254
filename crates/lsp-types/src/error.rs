/// LSP2 value decoding error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lsp2Error {
    /// Array length value is not 16 bytes. Holds the actual byte length.
    InvalidArrayLength(usize),
    /// Mapping value is not `bytes4 | uint128`. Holds the actual byte length.
    InvalidMapValue(usize),
}

impl std::fmt::Display for Lsp2Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArrayLength(len) => {
                write!(f, "invalid array length value: expected 16 bytes, got {len}")
            }
            Self::InvalidMapValue(len) => {
                write!(f, "invalid mapping value: expected 20 bytes, got {len}")
            }
        }
    }
}

impl std::error::Error for Lsp2Error {}
