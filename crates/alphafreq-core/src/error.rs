use std::io;
use std::path::PathBuf;

/// Errors raised while counting input text or building glyph geometry.
#[derive(Debug, thiserror::Error)]
pub enum AlphaFreqError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("input contains no letters a-z; nothing to plot")]
    NoLetters,
    #[error("no vector-text outline for character {0:?}")]
    UnknownGlyph(char),
}
