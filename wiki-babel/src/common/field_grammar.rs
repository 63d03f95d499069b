//! Ordered-label field grammar
//!
//! Bodies carry fields as `label value` pairs in a fixed order, values possibly spanning
//! several lines:
//!
//! ```text
//! ## Hello World
//! link: /posts/hello
//! meta: <span>Jan 1</span>
//! image_text: Sunset<br>Lake
//!
//! ### Excerpt
//! First lines of the post.
//! ```
//!
//! The tokenizer is a small state machine. In state `i` it looks for label `i` from the
//! cursor. When found, the value starts right after the label and runs up to the first
//! occurrence of the nearest later label that occurs at all (label `i + 1` if present, else
//! `i + 2`, ...) or to the end of the chunk. The cursor moves to that boundary and the machine
//! moves to the state of the label that ended the field. A label that cannot be found yields
//! [`FieldEvent::Missing`] and the machine moves on without touching the cursor.
//!
//! A value that happens to contain the text of a later label is cut at that point, and the
//! later field starts there. This is the format's known limitation, kept on purpose so
//! existing documents parse the same way. The `terminated_by` index of [`FieldEvent::Field`]
//! makes the transition visible.

/// One transition of the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent<'t> {
    /// Label `index` was found. `value` is untrimmed, `terminated_by` is the index of the label
    /// that ended it, `None` when it ran to the end of the chunk.
    Field {
        index: usize,
        value: &'t str,
        terminated_by: Option<usize>,
    },
    /// Label `index` does not occur after the cursor.
    Missing { index: usize },
}

/// A fixed, ordered list of field labels.
#[derive(Debug, Clone, Copy)]
pub struct FieldGrammar<'a> {
    labels: &'a [&'a str],
}

impl<'a> FieldGrammar<'a> {
    pub const fn new(labels: &'a [&'a str]) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &'a [&'a str] {
        self.labels
    }

    /// Run the machine over `chunk`, one event per label in label order.
    pub fn tokenize<'t>(&self, chunk: &'t str) -> Vec<FieldEvent<'t>> {
        let mut events = Vec::with_capacity(self.labels.len());
        let mut cursor = 0;

        for (index, label) in self.labels.iter().enumerate() {
            let Some(found) = chunk[cursor..].find(label) else {
                events.push(FieldEvent::Missing { index });
                continue;
            };

            let start = cursor + found + label.len();
            let (end, terminated_by) = self.boundary(chunk, start, index + 1);
            events.push(FieldEvent::Field {
                index,
                value: &chunk[start..end],
                terminated_by,
            });
            cursor = end;
        }

        events
    }

    /// Trimmed field values by label index, `None` for missing labels.
    pub fn extract<'t>(&self, chunk: &'t str) -> Vec<Option<&'t str>> {
        self.tokenize(chunk)
            .into_iter()
            .map(|event| match event {
                FieldEvent::Field { value, .. } => Some(value.trim()),
                FieldEvent::Missing { .. } => None,
            })
            .collect()
    }

    fn boundary(&self, chunk: &str, start: usize, from: usize) -> (usize, Option<usize>) {
        for later in from..self.labels.len() {
            if let Some(pos) = chunk[start..].find(self.labels[later]) {
                return (start + pos, Some(later));
            }
        }
        (chunk.len(), None)
    }
}
