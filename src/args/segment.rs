//! Segmenter: delimiters → shuffled segments.
//!
//! Decides which contiguous ranges of an argument list are permuted and
//! consumes the delimiter tokens that mark them:
//!
//! | start | end | behaviour                                                   |
//! |-------|-----|-------------------------------------------------------------|
//! | -     | -   | shuffle everything                                          |
//! | S     | -   | first `S` removed, everything after it shuffled             |
//! | -     | E   | first `E` removed, everything before it shuffled            |
//! | S     | E   | every `S ... E` pair removed, each inner span shuffled alone |
//!
//! The single-delimiter forms only look at the first occurrence; the paired
//! form handles any number of pairs in one pass.

use rand::Rng;

use crate::args::shuffle::shuffle;
use crate::error::RandooError;

/// Start/end delimiter configuration. Empty tokens count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delimiters {
    start: Option<String>,
    end: Option<String>,
}

/// Which segmentation rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentMode<'a> {
    /// No delimiters: the whole list is one segment.
    Whole,
    /// Shuffle everything after the first start token.
    After(&'a str),
    /// Shuffle everything before the first end token.
    Before(&'a str),
    /// Shuffle the span inside every start/end pair.
    Between { start: &'a str, end: &'a str },
}

impl Delimiters {
    pub fn new(start: Option<String>, end: Option<String>) -> Self {
        Self {
            start: start.filter(|s| !s.is_empty()),
            end: end.filter(|s| !s.is_empty()),
        }
    }

    pub fn start(&self) -> Option<&str> {
        self.start.as_deref()
    }

    pub fn end(&self) -> Option<&str> {
        self.end.as_deref()
    }

    pub fn mode(&self) -> SegmentMode<'_> {
        match (self.start(), self.end()) {
            (None, None) => SegmentMode::Whole,
            (Some(start), None) => SegmentMode::After(start),
            (None, Some(end)) => SegmentMode::Before(end),
            (Some(start), Some(end)) => SegmentMode::Between { start, end },
        }
    }
}

/// Remove delimiters from `args` and shuffle the segments they designate.
///
/// Fails with [`RandooError::DelimiterNotFound`] if a required delimiter is
/// absent; in that case nothing is returned, not even a partial result.
pub fn segment<R: Rng + ?Sized>(
    mut args: Vec<String>,
    delimiters: &Delimiters,
    rng: &mut R,
) -> Result<Vec<String>, RandooError> {
    match delimiters.mode() {
        SegmentMode::Whole => {
            shuffle(&mut args, rng);
            Ok(args)
        }
        SegmentMode::After(start) => {
            let index = position(&args, start)?;
            args.remove(index);
            shuffle(&mut args[index..], rng);
            Ok(args)
        }
        SegmentMode::Before(end) => {
            let index = position(&args, end)?;
            args.remove(index);
            shuffle(&mut args[..index], rng);
            Ok(args)
        }
        SegmentMode::Between { start, end } => between(args, start, end, rng),
    }
}

fn position(args: &[String], token: &str) -> Result<usize, RandooError> {
    args.iter()
        .position(|a| a == token)
        .ok_or_else(|| not_found(token))
}

fn between<R: Rng + ?Sized>(
    args: Vec<String>,
    start: &str,
    end: &str,
    rng: &mut R,
) -> Result<Vec<String>, RandooError> {
    let mut out = Vec::with_capacity(args.len());
    let mut saw_start = false;
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        if arg != start {
            out.push(arg);
            continue;
        }
        saw_start = true;

        // Everything up to the next end token belongs to this segment,
        // including further start tokens.
        let begin = out.len();
        let mut closed = false;
        for inner in iter.by_ref() {
            if inner == end {
                closed = true;
                break;
            }
            out.push(inner);
        }
        if !closed {
            return Err(not_found(end));
        }
        shuffle(&mut out[begin..], rng);
    }

    if !saw_start {
        return Err(not_found(start));
    }
    Ok(out)
}

fn not_found(token: &str) -> RandooError {
    RandooError::DelimiterNotFound {
        token: token.to_string(),
    }
}
