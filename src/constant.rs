// The usage line spells out individual arguments/flags up to this many,
// falling back to the '<ARGUMENTS>' / '[OPTIONS]' placeholders beyond it.
pub(crate) const USAGE_INLINE_LIMIT: usize = 3;

pub(crate) const HELP_INDENT: usize = 4;
pub(crate) const HELP_GAP: usize = 2;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_DESCRIPTION_WIDTH: usize = 17;
