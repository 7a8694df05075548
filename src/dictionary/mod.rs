use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read word list {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word list {path:?} is not valid UTF-8")]
    Encoding { path: PathBuf },

    #[error("word list contains no words")]
    Empty,
}

/// Read-only word list used to validate every word a move forms.
///
/// All entries live in one uppercase, newline-separated buffer. `offsets`
/// holds the byte range of each entry and is kept in ascending order, so a
/// lookup is a binary search over the index.
#[derive(Debug)]
pub struct Lexicon {
    text: String,
    offsets: Vec<(usize, usize)>,
}

impl Lexicon {
    /// Load a newline-delimited word list from disk
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let bytes = fs::read(path).await.map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8(bytes).map_err(|_| LexiconError::Encoding {
            path: path.to_path_buf(),
        })?;

        let lexicon = Self::from_text(&content)?;
        tracing::info!("Loaded {} words into lexicon from {:?}", lexicon.len(), path);

        Ok(lexicon)
    }

    /// Build a lexicon from word list contents, one word per line
    pub fn from_text(content: &str) -> Result<Self, LexiconError> {
        let mut text = String::with_capacity(content.len());
        let mut offsets = Vec::new();

        for line in content.lines() {
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            let start = text.len();
            text.push_str(&word.to_uppercase());
            offsets.push((start, text.len()));
            text.push('\n');
        }

        if offsets.is_empty() {
            return Err(LexiconError::Empty);
        }

        let sorted = offsets
            .windows(2)
            .all(|pair| text[pair[0].0..pair[0].1] <= text[pair[1].0..pair[1].1]);
        if !sorted {
            tracing::warn!(
                "Word list of {} entries is not sorted; sorting index at load",
                offsets.len()
            );
            offsets.sort_by(|a, b| text[a.0..a.1].cmp(&text[b.0..b.1]));
            offsets.dedup_by(|a, b| text[a.0..a.1] == text[b.0..b.1]);
        }

        Ok(Self { text, offsets })
    }

    /// Build a lexicon from an in-memory list of words
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<Self, LexiconError> {
        let joined = words
            .iter()
            .map(|w| w.as_ref())
            .collect::<Vec<_>>()
            .join("\n");
        Self::from_text(&joined)
    }

    /// Exact, case-insensitive membership test
    pub fn is_valid_word(&self, word: &str) -> bool {
        let target = word.to_uppercase();
        if target.is_empty() {
            return false;
        }
        self.offsets
            .binary_search_by(|&(start, end)| self.text[start..end].cmp(target.as_str()))
            .is_ok()
    }

    /// Number of entries in the index
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}
