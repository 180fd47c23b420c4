use crate::{Error, TileBag};
use log::{debug, trace};
use std::fmt;
use std::io::{BufRead, Write};

/// Number of lines read and passed by [`run`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub read: usize,
    pub passed: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<Summary: {} read, {} passed>", self.read, self.passed)
    }
}

/// Trim `line` and return it if it can be drawn from `bag`.
fn check<'l>(bag: &TileBag, line: &'l str) -> Result<Option<&'l str>, Error> {
    let word = line.trim();
    if bag.can_draw(word)? {
        Ok(Some(word))
    } else {
        trace!("Rejected \"{}\"", word);
        Ok(None)
    }
}

/// Iterator over the candidates that can be drawn from a [`TileBag`]. See [`filter`].
///
/// After yielding an error the iterator is exhausted.
pub struct Filter<'a, I> {
    bag: &'a TileBag,
    lines: I,
    failed: bool,
}

impl<'a, I> Iterator for Filter<'a, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        for line in &mut self.lines {
            match check(self.bag, line.as_ref()) {
                Ok(Some(word)) => return Some(Ok(word.to_string())),
                Ok(None) => {}
                Err(err) => {
                    self.failed = true;
                    return Some(Err(err));
                }
            }
        }
        None
    }
}

/// Filter `candidates`, keeping the lines that can be drawn from `bag`.
///
/// Each passing line is yielded trimmed, with its case unchanged.
/// A line with a character that is not a tile yields an [`Error::UnknownTile`], and ends the iteration.
/// ## Examples
/// ```
/// use tile_filter::{filter, Error, TileBag};
/// let words = filter(TileBag::standard(), &["fizz", " FIZZ ", "jjjj"])
///     .collect::<Result<Vec<_>, Error>>()?;
/// assert_eq!(words, &["fizz", "FIZZ"]);
/// # Ok::<(), Error>(())
/// ```
pub fn filter<I>(bag: &TileBag, candidates: I) -> Filter<'_, I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Filter {
        bag,
        lines: candidates.into_iter(),
        failed: false,
    }
}

/// Read candidate lines from `input`, and write each line that can be drawn from `bag` to `output`.
///
/// Lines are written as soon as they pass, so output already written is kept when an error stops the run.
/// ## Errors
/// Stops at the first line with an unknown tile, or when reading or writing fails.
/// ## Examples
/// ```
/// use tile_filter::{run, Error, TileBag};
/// let mut output = Vec::new();
/// let summary = run(TileBag::standard(), &b"fizz\njjjj\n"[..], &mut output)?;
/// assert_eq!(output, b"fizz\n");
/// assert_eq!((summary.read, summary.passed), (2, 1));
/// # Ok::<(), Error>(())
/// ```
pub fn run<R, W>(bag: &TileBag, input: R, mut output: W) -> Result<Summary, Error>
where
    R: BufRead,
    W: Write,
{
    debug!("Filtering with {}", bag);
    let mut summary = Summary::default();
    for line in input.lines() {
        let line = line.map_err(|source| Error::ReadError { source })?;
        summary.read += 1;
        if let Some(word) = check(bag, &line)? {
            writeln!(output, "{}", word).map_err(|source| Error::WriteError { source })?;
            summary.passed += 1;
        }
    }
    output
        .flush()
        .map_err(|source| Error::WriteError { source })?;
    debug!("{}", summary);
    Ok(summary)
}
