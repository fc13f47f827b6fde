//! Accumulated output of one update.
//!
//! Handlers append lines to two ordered sequences, public and private, and
//! may request best-effort deletions. Separators are not the handlers'
//! concern: rendering joins lines with `\n`, so an explicitly pushed blank
//! line produces the blank-line separator between paragraphs.

/// The two output channels plus requested deletions for one update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    public: Vec<String>,
    private: Vec<String>,
    deletions: Vec<i64>,
}

impl Reply {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line to the channel-visible output.
    pub fn public(&mut self, line: impl Into<String>) {
        self.public.push(line.into());
    }

    /// Blank separator line in the public output.
    pub fn public_blank(&mut self) {
        self.public.push(String::new());
    }

    /// Append a line to the sender-private output.
    pub fn private(&mut self, line: impl Into<String>) {
        self.private.push(line.into());
    }

    /// Blank separator line in the private output.
    pub fn private_blank(&mut self) {
        self.private.push(String::new());
    }

    /// Ask the transport to delete a message, best-effort.
    pub fn request_delete(&mut self, external_message_id: i64) {
        self.deletions.push(external_message_id);
    }

    pub fn deletions(&self) -> &[i64] {
        &self.deletions
    }

    /// Rendered public text, or `None` when there is nothing worth sending.
    pub fn public_text(&self) -> Option<String> {
        render(&self.public)
    }

    /// Rendered private text, or `None` when there is nothing worth sending.
    pub fn private_text(&self) -> Option<String> {
        render(&self.private)
    }
}

fn render(lines: &[String]) -> Option<String> {
    let text = lines.join("\n");
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
