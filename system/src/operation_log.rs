use crate::types::Operation;

/// Linear drawing history with a single shared undo/redo cursor.
///
/// `active` counts the operations currently rendered, so the cursor is
/// `active - 1` and `-1` is represented by `active == 0`. Everything past
/// `active` is the redo tail.
#[derive(Debug, Default, Clone)]
pub struct OperationLog {
    operations: Vec<Operation>,
    active: usize,
}

impl OperationLog {
    pub fn new() -> Self {
        Self {
            operations: Vec::new(),
            active: 0,
        }
    }

    /// Drops the redo tail, then appends `op` as the new last active entry.
    pub fn append(&mut self, op: Operation) {
        self.operations.truncate(self.active);
        self.operations.push(op);
        self.active = self.operations.len();
    }

    pub fn undo(&mut self) -> bool {
        if self.can_undo() {
            self.active -= 1;
            true
        } else {
            false
        }
    }

    pub fn redo(&mut self) -> bool {
        if self.can_redo() {
            self.active += 1;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.operations.clear();
        self.active = 0;
    }

    pub fn active_slice(&self) -> &[Operation] {
        &self.operations[..self.active]
    }

    /// Index of the last active operation, `None` when the canvas is empty.
    pub fn cursor(&self) -> Option<usize> {
        self.active.checked_sub(1)
    }

    pub fn can_undo(&self) -> bool {
        self.active > 0
    }

    pub fn can_redo(&self) -> bool {
        self.active < self.operations.len()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
