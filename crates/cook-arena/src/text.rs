//! Temporary text built on top of [`Arena::alloc`].
//!
//! Every helper copies into arena memory and hands back a `&mut str`
//! borrowed from the arena, so the text lives until the next
//! [`rewind`](Arena::rewind) or [`reset`](Arena::reset).
//!
//! ```
//! use cook_arena::{arena_format, Arena};
//!
//! let mut arena = Arena::with_capacity(256).unwrap();
//! let line = arena.scope(|arena| {
//!     let path = arena.alloc_str("src/deque.rs").unwrap();
//!     let name = arena.alloc_substr(path, 4, 5).unwrap();
//!     arena_format!(arena, "{name}:{}", 42).unwrap().to_owned()
//! });
//! assert_eq!(line, "deque:42");
//! assert_eq!(arena.used(), 0);
//! ```

use std::fmt::{self, Write};

use crate::arena::Arena;
use crate::error::ArenaError;

/// Format into an arena, like `format!`.
///
/// Expands to `arena.alloc_fmt(format_args!(...))`.
#[macro_export]
macro_rules! arena_format {
    ($arena:expr, $($arg:tt)*) => {
        $arena.alloc_fmt(::std::format_args!($($arg)*))
    };
}

impl Arena {
    /// Copy `s` into the arena.
    #[allow(clippy::mut_from_ref)]
    pub fn alloc_str(&self, s: &str) -> Result<&mut str, ArenaError> {
        let bytes = self.alloc(s.len())?;
        bytes.copy_from_slice(s.as_bytes());
        Ok(utf8(bytes))
    }

    /// Copy at most `max_len` bytes of `s` into the arena.
    ///
    /// The cut is moved back to the nearest character boundary, so the
    /// result may be shorter than `max_len` even when `s` is longer.
    #[allow(clippy::mut_from_ref)]
    pub fn alloc_str_prefix(&self, s: &str, max_len: usize) -> Result<&mut str, ArenaError> {
        let mut end = max_len.min(s.len());
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        self.alloc_str(&s[..end])
    }

    /// Copy the `len` bytes of `s` starting at byte `start` into the arena.
    ///
    /// Fails with [`ArenaError::InvalidRange`] if the range runs past the
    /// end of `s` or either end splits a character.
    #[allow(clippy::mut_from_ref)]
    pub fn alloc_substr(&self, s: &str, start: usize, len: usize) -> Result<&mut str, ArenaError> {
        let invalid = ArenaError::InvalidRange {
            start,
            len,
            source_len: s.len(),
        };
        let end = start.checked_add(len).ok_or_else(|| invalid.clone())?;
        let sub = s.get(start..end).ok_or(invalid)?;
        self.alloc_str(sub)
    }

    /// Render `args` into the arena.
    ///
    /// The output is measured first, then written into a single allocation
    /// of exactly that size. Fails with [`ArenaError::Format`] if a
    /// formatting impl reports an error or writes more on the second pass
    /// than on the first; the measured bytes stay allocated in that case.
    #[allow(clippy::mut_from_ref)]
    pub fn alloc_fmt(&self, args: fmt::Arguments<'_>) -> Result<&mut str, ArenaError> {
        if let Some(literal) = args.as_str() {
            return self.alloc_str(literal);
        }
        let mut counter = ByteCounter(0);
        counter.write_fmt(args).map_err(|_| ArenaError::Format)?;

        let mut writer = SliceWriter {
            buf: self.alloc(counter.0)?,
            pos: 0,
        };
        writer.write_fmt(args).map_err(|_| ArenaError::Format)?;
        let SliceWriter { buf, pos } = writer;
        Ok(utf8(&mut buf[..pos]))
    }
}

fn utf8(bytes: &mut [u8]) -> &mut str {
    std::str::from_utf8_mut(bytes).expect("arena text is copied from str fragments")
}

/// Counts the bytes a format would produce.
struct ByteCounter(usize);

impl Write for ByteCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.len();
        Ok(())
    }
}

/// Writes formatted output into a fixed slice, failing on overflow.
struct SliceWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.pos + s.len();
        let dst = self.buf.get_mut(self.pos..end).ok_or(fmt::Error)?;
        dst.copy_from_slice(s.as_bytes());
        self.pos = end;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::config::ArenaConfig;

    fn arena(capacity: usize) -> Arena {
        Arena::new(ArenaConfig {
            capacity,
            alignment: 8,
        })
        .unwrap()
    }

    #[test]
    fn alloc_str_copies() {
        let a = arena(64);
        let s = a.alloc_str("hello").unwrap();
        s.make_ascii_uppercase();
        assert_eq!(s, "HELLO");
        assert_eq!(a.used(), 5);
    }

    #[test]
    fn empty_str_is_free() {
        let a = arena(8);
        assert_eq!(a.alloc_str("").unwrap(), "");
        assert_eq!(a.used(), 0);
    }

    #[test]
    fn prefix_truncates() {
        let a = arena(64);
        assert_eq!(a.alloc_str_prefix("cook.h", 4).unwrap(), "cook");
        assert_eq!(a.alloc_str_prefix("ab", 10).unwrap(), "ab");
    }

    #[test]
    fn prefix_never_splits_a_char() {
        let a = arena(64);
        // 'é' is two bytes; a cut at 2 would land inside it.
        assert_eq!(a.alloc_str_prefix("réglé", 2).unwrap(), "r");
        assert_eq!(a.alloc_str_prefix("réglé", 3).unwrap(), "ré");
    }

    #[test]
    fn substr_extracts_a_range() {
        let a = arena(64);
        assert_eq!(a.alloc_substr("nob.c deque.c", 4, 1).unwrap(), "c");
        assert_eq!(a.alloc_substr("nob.c deque.c", 6, 7).unwrap(), "deque.c");
        assert_eq!(a.alloc_substr("abc", 3, 0).unwrap(), "");
    }

    #[test]
    fn substr_rejects_bad_ranges() {
        let a = arena(64);
        assert_eq!(
            a.alloc_substr("abc", 2, 2),
            Err(ArenaError::InvalidRange {
                start: 2,
                len: 2,
                source_len: 3,
            })
        );
        assert!(a.alloc_substr("abc", usize::MAX, 2).is_err());
        assert!(a.alloc_substr("réglé", 2, 1).is_err());
        assert_eq!(a.used(), 0);
    }

    #[test]
    fn fmt_allocates_exact_size() {
        let a = arena(64);
        let s = a.alloc_fmt(format_args!("{}-{:03}", "line", 7)).unwrap();
        assert_eq!(s, "line-007");
        assert_eq!(a.used(), 8);
    }

    #[test]
    fn fmt_macro_forwards_arguments() {
        let a = arena(64);
        let count = 3;
        assert_eq!(
            arena_format!(a, "{count} items").unwrap(),
            "3 items"
        );
    }

    #[test]
    fn fmt_literal_is_copied() {
        let a = arena(64);
        assert_eq!(a.alloc_fmt(format_args!("plain")).unwrap(), "plain");
    }

    #[test]
    fn fmt_that_does_not_fit_fails() {
        let a = arena(4);
        let err = a.alloc_fmt(format_args!("{}", 123_456)).unwrap_err();
        assert!(matches!(err, ArenaError::CapacityExceeded { requested: 6, .. }));
        assert_eq!(a.used(), 0);
    }

    struct Failing;

    impl fmt::Display for Failing {
        fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn failing_display_reports_format_error() {
        let a = arena(64);
        assert_eq!(
            a.alloc_fmt(format_args!("{}", Failing)),
            Err(ArenaError::Format)
        );
    }

    /// Writes one more byte on every call.
    struct Growing(Cell<usize>);

    impl fmt::Display for Growing {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let n = self.0.get() + 1;
            self.0.set(n);
            f.write_str(&"x".repeat(n))
        }
    }

    #[test]
    fn output_that_grows_between_passes_is_rejected() {
        let a = arena(64);
        let growing = Growing(Cell::new(0));
        assert_eq!(
            a.alloc_fmt(format_args!("{}", growing)),
            Err(ArenaError::Format)
        );
    }

    #[test]
    fn text_survives_until_rewind() {
        let mut a = arena(64);
        let cp = a.save();
        {
            let first = a.alloc_str("first").unwrap();
            let second = a.alloc_str("second").unwrap();
            assert_eq!(first, "first");
            assert_eq!(second, "second");
        }
        a.rewind(cp).unwrap();
        assert_eq!(a.alloc_str("third").unwrap(), "third");
        assert_eq!(a.used(), 5);
    }
}
