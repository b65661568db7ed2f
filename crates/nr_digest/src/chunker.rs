//! Sentence-aligned chunking.
//!
//! Text is split into sentences and the sentences are packed greedily into
//! chunks whose length (sentences joined by a single space) stays within a
//! character budget. A sentence is never split: one that is longer than the
//! budget on its own becomes a single oversized chunk.

use std::fmt;
use unicode_segmentation::UnicodeSegmentation;

/// How text is cut into the units that get packed into chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Segmentation {
    /// Unicode sentence boundaries (UAX #29).
    #[default]
    Sentences,
    /// Whitespace-separated words. Used when sentence boundaries are not
    /// meaningful for the input.
    Whitespace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunker {
    max_chars: usize,
    segmentation: Segmentation,
}

impl Chunker {
    pub fn new(max_chars: usize) -> Self {
        Self {
            max_chars,
            segmentation: Segmentation::default(),
        }
    }

    pub fn with_segmentation(mut self, segmentation: Segmentation) -> Self {
        self.segmentation = segmentation;
        self
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Lazily packs `text` into chunks. Calling `chunks` again starts over
    /// from the first sentence.
    pub fn chunks<'a>(&self, text: &'a str) -> Chunks<'a> {
        let units = split_units(text, self.segmentation);
        Chunks {
            units,
            next: 0,
            max_chars: self.max_chars,
        }
    }
}

fn split_units(text: &str, segmentation: Segmentation) -> Vec<&str> {
    match segmentation {
        Segmentation::Sentences => text
            .split_sentence_bounds()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect(),
        Segmentation::Whitespace => text.split_whitespace().collect(),
    }
}

/// Iterator over the chunks of one text.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    units: Vec<&'a str>,
    next: usize,
    max_chars: usize,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = *self.units.get(self.next)?;
        let mut sentences = vec![first];
        let mut len = first.chars().count();
        self.next += 1;

        while let Some(sentence) = self.units.get(self.next) {
            let grown = len + 1 + sentence.chars().count();
            if grown > self.max_chars {
                break;
            }
            sentences.push(sentence);
            len = grown;
            self.next += 1;
        }

        Some(Chunk { sentences, len })
    }
}

/// Consecutive sentences whose joined length fits the budget, unless it is a
/// single oversized sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<'a> {
    sentences: Vec<&'a str>,
    len: usize,
}

impl<'a> Chunk<'a> {
    pub fn sentences(&self) -> &[&'a str] {
        &self.sentences
    }

    /// Length in characters of the joined text.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn text(&self) -> String {
        self.sentences.join(" ")
    }
}

impl fmt::Display for Chunk<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
