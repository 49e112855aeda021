/// Selection in the host's visual list of results.
///
/// Navigation and search read the current selection and move it, but never keep it themselves.
pub trait ResultView {
    fn selection(&self) -> Option<usize>;

    /// Selects and focuses the result at `index`.
    fn select(&mut self, index: usize);

    fn deselect_all(&mut self);
}

/// Plain selection holder for hosts without a visual list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: Option<usize>,
}

impl Cursor {
    pub fn at(index: usize) -> Self {
        Cursor { index: Some(index) }
    }

    pub fn unset() -> Self {
        Cursor::default()
    }
}

impl ResultView for Cursor {
    fn selection(&self) -> Option<usize> {
        self.index
    }

    fn select(&mut self, index: usize) {
        self.index = Some(index);
    }

    fn deselect_all(&mut self) {
        self.index = None;
    }
}
