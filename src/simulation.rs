use crate::board::{
    editor::{Action, Edit, Editor},
    Board,
};

/// A board together with the editor driving it.
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    pub board: Board,
    pub editor: Editor,
}

impl Simulation {
    pub fn new(board: Board, editor: Editor) -> Self {
        Self { board, editor }
    }

    /// Runs one frame: applies `actions` in order, then evaluates the board once.
    pub fn frame(&mut self, actions: impl IntoIterator<Item = Action>) -> Vec<Edit> {
        let mut edits = vec![];
        for action in actions {
            edits.extend(self.editor.apply(&mut self.board, action));
        }
        self.board.evaluate();
        edits
    }
}
