//! Error aggregation
//!
//! [`Aggregate`] collects any number of errors into a single error value.
//! Its `Display` output joins the member messages with `", "`, and
//! [`Aggregate::into_result`] turns an empty aggregate back into success.
//!
//! # Example
//!
//! ```rust
//! use collection_utils::aggregate::Aggregate;
//!
//! let results: Vec<Result<u32, String>> = vec![
//!     Ok(1),
//!     Err("second failed".to_string()),
//!     Err("third failed".to_string()),
//! ];
//!
//! let errs: Aggregate<String> = results.into_iter().filter_map(Result::err).collect();
//! assert_eq!(errs.to_string(), "third failed, second failed");
//! assert!(errs.into_result().is_err());
//! ```
//!
//! Because `std::sync::mpsc::Receiver` iterates until the channel closes,
//! collecting the errors reported by many workers is just
//! `rx.into_iter().collect::<Aggregate<_>>()`.

use std::error::Error;
use std::fmt;

use crate::linked_list::ForwardList;

/// Multiple errors aggregated into a single error value
///
/// Errors are stored most-recently-added first.
#[derive(Debug, Default)]
pub struct Aggregate<E> {
    errs: ForwardList<E>,
}

impl<E> Aggregate<E> {
    /// Creates an aggregate holding no errors
    pub fn new() -> Self {
        Self {
            errs: ForwardList::new(),
        }
    }

    /// Records another error
    pub fn add(&mut self, err: E) {
        self.errs.prepend(err);
    }

    pub fn is_empty(&self) -> bool {
        self.errs.is_empty()
    }

    /// Iterates the collected errors, most recent first
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.errs.iter()
    }

    /// Materializes an error out of the aggregate: `Ok` if nothing was
    /// collected, otherwise the aggregate itself
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl<E: fmt::Display> fmt::Display for Aggregate<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.errs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl<E: fmt::Display + fmt::Debug> Error for Aggregate<E> {}

impl<E> Extend<E> for Aggregate<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for err in iter {
            self.add(err);
        }
    }
}

impl<E> FromIterator<E> for Aggregate<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut agg = Self::new();
        agg.extend(iter);
        agg
    }
}
