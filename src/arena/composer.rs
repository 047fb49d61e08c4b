/// Add-lane modal: an open/closed flag plus the uncommitted input buffer.
///
/// The buffer only ever holds text while the modal is open. Both exits
/// (commit and cancel) leave it empty, so reopening always starts fresh.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    open: bool,
    buffer: String,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn open(&mut self) {
        self.open = true;
        self.buffer.clear();
    }

    /// Close and drop whatever was typed.
    pub fn close(&mut self) {
        self.open = false;
        self.buffer.clear();
    }

    pub fn push(&mut self, c: char) {
        if self.open && !c.is_control() {
            self.buffer.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.open {
            self.buffer.pop();
        }
    }
}
