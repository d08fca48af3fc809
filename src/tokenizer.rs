//! Split lines into tokens without copying.

use std::ops::Range;

/// Splits lines on a delimiter, reusing its span buffer between lines.
///
/// Runs of the delimiter are collapsed, so empty tokens are never produced.
#[derive(Clone, Debug)]
pub(crate) struct Tokenizer {
    delimiter: char,
    spans: Vec<Range<usize>>,
}

/// The tokens of one line.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Tokens<'a> {
    line: &'a str,
    spans: &'a [Range<usize>],
}

impl Tokenizer {
    pub(crate) fn new(delimiter: char) -> Tokenizer {
        Tokenizer {
            delimiter,
            spans: Vec::new(),
        }
    }

    pub(crate) fn tokenize<'a>(&'a mut self, line: &'a str) -> Tokens<'a> {
        self.spans.clear();
        let mut start = None;
        for (i, c) in line.char_indices() {
            if c == self.delimiter {
                if let Some(s) = start.take() {
                    self.spans.push(s..i);
                }
            } else if start.is_none() {
                start = Some(i);
            }
        }
        if let Some(s) = start {
            self.spans.push(s..line.len());
        }
        Tokens {
            line,
            spans: &self.spans,
        }
    }
}

impl<'a> Tokens<'a> {
    pub(crate) fn len(&self) -> usize {
        self.spans.len()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&'a str> {
        self.spans.get(index).map(|span| &self.line[span.clone()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_on_spaces() {
        let mut tokenizer = Tokenizer::new(' ');
        let tokens = tokenizer.tokenize("1.5 -2 3e4");
        assert_eq!(3, tokens.len());
        assert_eq!(Some("1.5"), tokens.get(0));
        assert_eq!(Some("-2"), tokens.get(1));
        assert_eq!(Some("3e4"), tokens.get(2));
    }

    #[test]
    fn runs_of_delimiters_are_collapsed() {
        let mut tokenizer = Tokenizer::new(' ');
        let tokens = tokenizer.tokenize("  1  2 3   ");
        assert_eq!(3, tokens.len());
        assert_eq!(Some("1"), tokens.get(0));
        assert_eq!(Some("3"), tokens.get(2));
        assert_eq!(None, tokens.get(3));
    }

    #[test]
    fn empty_line() {
        let mut tokenizer = Tokenizer::new(' ');
        assert_eq!(0, tokenizer.tokenize("").len());
        assert_eq!(0, tokenizer.tokenize("    ").len());
    }

    #[test]
    fn buffer_is_reused() {
        let mut tokenizer = Tokenizer::new(',');
        assert_eq!(4, tokenizer.tokenize("a,b,c,d").len());
        let tokens = tokenizer.tokenize("e,f");
        assert_eq!(2, tokens.len());
        assert_eq!(Some("f"), tokens.get(1));
    }
}
