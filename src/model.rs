/// How much of its input text a converter consumed.
///
/// In a combined short-flag run (ex: `-t4v`), the converter for `t` receives
/// `"4v"`, consumes `"4"`, and reports `Rest(1)` so the scan may continue with
/// `"v"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The entire text was consumed; nothing remains.
    Consumed,
    /// Consumption stopped at this byte offset into the input text.
    Rest(usize),
}

impl Advance {
    /// Build an `Advance` for a prefix of `text` ending at byte offset `end`.
    pub fn over(text: &str, end: usize) -> Self {
        if end >= text.len() {
            Advance::Consumed
        } else {
            Advance::Rest(end)
        }
    }
}
