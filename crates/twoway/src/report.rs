//! Human-readable rendering of a [`Reconciled`] result.
//!
//! Rendering only reads the public views of the result; nothing here feeds
//! back into classification.

use std::fmt::{self, Write};

use twoway_core::Reconciled;

/// Display adapter listing every category of a result.
///
/// ```
/// use twoway::{report::Report, reconcile, IdentityOrder, Recency};
///
/// let diff = reconcile(
///     vec![1u32, 2],
///     vec![2u32, 3],
///     |a: &u32, b: &u32| IdentityOrder::from(a.cmp(b)),
///     |_: &u32, _: &u32| Recency::SameVersion,
/// )
/// .unwrap();
///
/// let text = Report::new(&diff).to_string();
/// assert!(text.contains("only in A (1):\n  1\n"));
/// ```
pub struct Report<'a, T> {
    result: &'a Reconciled<T>,
}

impl<'a, T> Report<'a, T> {
    pub fn new(result: &'a Reconciled<T>) -> Self {
        Self { result }
    }
}

impl<T: fmt::Display> fmt::Display for Report<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(f, self.result, |out, item| write!(out, "{}", item))
    }
}

/// Render a result into `out`, formatting each item with `show`.
///
/// Empty categories are listed with a count of zero. The Not map is
/// rendered as `newer <- older` lines.
pub fn render_with<W, T, F>(out: &mut W, result: &Reconciled<T>, mut show: F) -> fmt::Result
where
    W: Write,
    F: FnMut(&T) -> String,
{
    write_report(out, result, |out, item| out.write_str(&show(item)))
}

fn write_report<W, T, F>(out: &mut W, result: &Reconciled<T>, mut show: F) -> fmt::Result
where
    W: Write,
    F: FnMut(&mut W, &T) -> fmt::Result,
{
    let summary = result.summary();
    writeln!(out, "changes: {}", if summary.has_changes { "yes" } else { "no" })?;

    for (title, items) in [
        ("only in A", result.only_in_a()),
        ("only in B", result.only_in_b()),
        ("newer in A", result.newer_in_a()),
        ("newer in B", result.newer_in_b()),
    ] {
        writeln!(out, "{} ({}):", title, items.len())?;
        for item in items {
            out.write_str("  ")?;
            show(out, item)?;
            out.write_char('\n')?;
        }
    }

    writeln!(out, "equal ({}):", result.equal().len())?;
    for (a, b) in result.equal() {
        out.write_str("  ")?;
        show(out, a)?;
        out.write_str(" = ")?;
        show(out, b)?;
        out.write_char('\n')?;
    }

    let not = result.not();
    writeln!(out, "superseded ({}):", not.len())?;
    for (newer, older) in not.iter() {
        out.write_str("  ")?;
        show(out, newer)?;
        out.write_str(" <- ")?;
        show(out, older)?;
        out.write_char('\n')?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use twoway_testkit::Fixture;

    #[test]
    fn test_render_lists_all_categories() {
        let r = Fixture::new()
            .only_a(1, 5)
            .shared(2, 1, 9)
            .only_b(3, 1)
            .shared(7, 2, 2)
            .reconcile()
            .unwrap();

        let text = Report::new(&r).to_string();

        assert!(text.starts_with("changes: yes\n"));
        assert!(text.contains("only in A (1):\n  #1@v5\n"));
        assert!(text.contains("only in B (1):\n  #3@v1\n"));
        assert!(text.contains("newer in A (0):\n"));
        assert!(text.contains("newer in B (1):\n  #2@v9\n"));
        assert!(text.contains("equal (1):\n  #7@v2 = #7@v2\n"));
        assert!(text.contains("superseded (1):\n  #2@v9 <- #2@v1\n"));
    }

    #[test]
    fn test_render_with_custom_formatter() {
        let r = Fixture::new().shared(4, 1, 1).reconcile().unwrap();
        let mut text = String::new();
        render_with(&mut text, &r, |record| format!("id={}", record.id)).unwrap();

        assert!(text.starts_with("changes: no\n"));
        assert!(text.contains("  id=4 = id=4\n"));
    }

    /// Sink that refuses every write after the first `budget` bytes.
    struct Capped {
        text: String,
        budget: usize,
    }

    impl Write for Capped {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            if self.text.len() + s.len() > self.budget {
                return Err(fmt::Error);
            }
            self.text.push_str(s);
            Ok(())
        }
    }

    #[test]
    fn test_render_with_propagates_write_errors() {
        let r = Fixture::new().only_a(1, 1).only_b(2, 1).reconcile().unwrap();
        let mut sink = Capped {
            text: String::new(),
            budget: 20,
        };

        assert!(render_with(&mut sink, &r, |record| record.to_string()).is_err());
        assert!(sink.text.starts_with("changes: yes\n"));
        assert!(sink.text.len() <= 20);
    }
}
