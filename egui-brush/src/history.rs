use crate::Dimensions;

/// Committed selections in the order they were made.
/// Undo and redo move `end` without discarding entries until the next push.
#[derive(Debug, Default)]
pub struct SelectionHistory {
    selections: Vec<Dimensions>,
    end: usize,
}

impl SelectionHistory {
    pub fn iter(&self) -> impl Iterator<Item = &'_ Dimensions> {
        self.selections.iter().take(self.end)
    }

    pub fn push(&mut self, selection: Dimensions) {
        self.selections.truncate(self.end);
        self.selections.push(selection);
        self.end = self.selections.len();
    }

    /// Steps back and returns the selection which is current afterwards.
    /// Undoing the first selection yields [`Dimensions::ZERO`].
    pub fn undo(&mut self) -> Option<Dimensions> {
        self.end = self.end.checked_sub(1)?;
        Some(self.current())
    }

    pub fn redo(&mut self) -> Option<Dimensions> {
        let item = *self.selections.get(self.end)?;
        self.end += 1;
        Some(item)
    }

    pub fn current(&self) -> Dimensions {
        self.end
            .checked_sub(1)
            .and_then(|i| self.selections.get(i).copied())
            .unwrap_or(Dimensions::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use emath::pos2;

    use super::*;

    fn selection(x: f32) -> Dimensions {
        Dimensions::new(pos2(x, x), pos2(x + 1.0, x + 1.0))
    }

    #[test]
    fn undo_empty_returns_none() {
        let mut history = SelectionHistory::default();
        assert_eq!(None, history.undo());
    }

    #[test]
    fn insert_undo_and_redo() {
        let mut history = SelectionHistory::default();
        history.push(selection(1.0));
        history.push(selection(2.0));
        assert_eq!(Some(selection(1.0)), history.undo());
        assert_eq!(Some(Dimensions::ZERO), history.undo());
        assert_eq!(None, history.undo());
        assert_eq!(Some(selection(1.0)), history.redo());
        assert_eq!(Some(selection(2.0)), history.redo());
        assert_eq!(None, history.redo());
    }

    #[test]
    fn push_after_undo() {
        let mut history = SelectionHistory::default();
        history.push(selection(1.0));
        history.push(selection(2.0));
        history.undo();
        history.push(selection(3.0));
        assert_eq!(None, history.redo());
        assert_eq!(
            vec![selection(1.0), selection(3.0)],
            history.iter().copied().collect::<Vec<_>>()
        );
    }
}
