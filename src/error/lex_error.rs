#[derive(Debug, Clone, PartialEq, Eq)]
/// A character that does not belong to the language.
pub struct LexError {
    /// The offending character.
    pub character: char,
    /// The source line where the error occurred.
    pub line:      usize,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Error on line {}: Invalid character '{}'.",
               self.line,
               self.character.escape_default())
    }
}

impl std::error::Error for LexError {}
