//! Editing gestures.
//!
//! The editor turns logical pointer actions into board edits. It never looks at raw
//! device events and never draws anything, so a frontend only has to translate its
//! input into [`Action`]s and read back [`Editor::pending_wire`] for the preview line.

use log::debug;

use crate::{
    circuits::ComponentKind,
    vector::{Rect, Vec2f},
};

use super::{
    wire::{Wire, WireEnd, WireTag},
    Board, ComponentId,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Palette pick. The next primary press outside the reserved region places it.
    Select(ComponentKind),
    PrimaryDown(Vec2f),
    PrimaryUp,
    SecondaryDown(Vec2f),
    PointerMove(Vec2f),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// First end of a wire picked, waiting for the second.
    WireStart(WireEnd),
    Dragging(ComponentId),
}

/// What an action did to the board or the gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    Placed(ComponentId, ComponentKind),
    Toggled(ComponentId),
    WireStarted(WireEnd),
    WireAdded(usize),
    WireCancelled,
    WireRemoved(Wire),
    DragStarted(ComponentId),
    Moved(ComponentId),
    Dropped(ComponentId),
}

impl Gesture {
    /// Pointer part of the state machine: terminals, dragging and wire removal.
    ///
    /// Switch toggling and palette placement are not gestures and live in
    /// [`Editor::apply`].
    pub fn transition(
        self,
        board: &mut Board,
        action: Action,
        tag: WireTag,
        edits: &mut Vec<Edit>,
    ) -> Gesture {
        match action {
            Action::PrimaryDown(pos) => {
                if let Some(end) = board.terminal_at(pos) {
                    return match self {
                        Gesture::WireStart(start) => {
                            let index = board.add_wire(Wire::new(start, end, tag));
                            debug!("wire {index}: {start} -> {end}");
                            edits.push(Edit::WireAdded(index));
                            Gesture::Idle
                        }
                        Gesture::Idle | Gesture::Dragging(_) => {
                            edits.push(Edit::WireStarted(end));
                            Gesture::WireStart(end)
                        }
                    };
                }

                match (self, board.component_at(pos)) {
                    (Gesture::Idle, Some(id)) => {
                        debug!("dragging {id}");
                        edits.push(Edit::DragStarted(id));
                        Gesture::Dragging(id)
                    }
                    (state, _) => state,
                }
            }
            Action::PointerMove(pos) => {
                if let Gesture::Dragging(id) = self {
                    if board.move_component(id, pos) {
                        edits.push(Edit::Moved(id));
                    }
                }
                self
            }
            Action::PrimaryUp => match self {
                Gesture::Dragging(id) => {
                    debug!("dropped {id}");
                    edits.push(Edit::Dropped(id));
                    Gesture::Idle
                }
                state => state,
            },
            Action::SecondaryDown(pos) => match self {
                Gesture::WireStart(_) => {
                    debug!("wire cancelled");
                    edits.push(Edit::WireCancelled);
                    Gesture::Idle
                }
                state => {
                    if let Some(wire) = board.remove_wire_at(pos) {
                        debug!("removed wire {wire}");
                        edits.push(Edit::WireRemoved(wire));
                    }
                    state
                }
            },
            Action::Select(_) => self,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Editor {
    gesture: Gesture,
    selected: Option<ComponentKind>,
    reserved: Option<Rect>,
    wire_tag: WireTag,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Presses inside `region` never place components.
    pub fn with_reserved_region(mut self, region: Rect) -> Self {
        self.reserved = Some(region);
        self
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn selected(&self) -> Option<ComponentKind> {
        self.selected
    }

    /// Tag given to the next wire created.
    pub fn set_wire_tag(&mut self, tag: WireTag) {
        self.wire_tag = tag;
    }

    /// Position of the first picked end of an unfinished wire.
    pub fn pending_wire(&self, board: &Board) -> Option<Vec2f> {
        match self.gesture {
            Gesture::WireStart(end) => end.resolve(board),
            _ => None,
        }
    }

    pub fn apply(&mut self, board: &mut Board, action: Action) -> Vec<Edit> {
        let mut edits = vec![];

        match action {
            Action::Select(kind) => {
                debug!("selected {kind}");
                self.selected = Some(kind);
            }
            Action::PrimaryDown(pos) => {
                edits.extend(board.toggle_switches_at(pos).into_iter().map(Edit::Toggled));
            }
            _ => {}
        }

        self.gesture = self
            .gesture
            .transition(board, action, self.wire_tag, &mut edits);

        if let Action::PrimaryDown(pos) = action {
            self.place_selected(board, pos, &mut edits);
        }

        edits
    }

    fn place_selected(&mut self, board: &mut Board, pos: Vec2f, edits: &mut Vec<Edit>) {
        if self.reserved.is_some_and(|r| r.contains(pos)) {
            return;
        }

        if let Some(kind) = self.selected.take() {
            let id = board.place(kind, pos);
            debug!("placed {kind} as {id} at ({}, {})", pos.x, pos.y);
            edits.push(Edit::Placed(id, kind));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::circuits::{gates::GateKind, terminals::Terminal};

    use super::*;

    fn p(x: f32, y: f32) -> Vec2f {
        Vec2f::new(x, y)
    }

    fn place(editor: &mut Editor, board: &mut Board, kind: ComponentKind, pos: Vec2f) -> ComponentId {
        editor.apply(board, Action::Select(kind));
        let edits = editor.apply(board, Action::PrimaryDown(pos));
        editor.apply(board, Action::PrimaryUp);
        match edits.last() {
            Some(Edit::Placed(id, _)) => *id,
            other => panic!("expected placement, got {other:?}"),
        }
    }

    #[test]
    fn selection_is_placed_once() {
        let mut board = Board::new();
        let mut editor = Editor::new();

        let id = place(&mut editor, &mut board, ComponentKind::Light, p(300.0, 300.0));
        assert_eq!(editor.selected(), None);
        assert_eq!(board.component(id).map(|c| c.kind()), Some(ComponentKind::Light));

        editor.apply(&mut board, Action::PrimaryDown(p(500.0, 500.0)));
        assert_eq!(board.component_count(), 1);
    }

    #[test]
    fn reserved_region_blocks_placement() {
        let mut board = Board::new();
        let mut editor = Editor::new().with_reserved_region(Rect::new(p(0.0, 0.0), p(200.0, 600.0)));

        editor.apply(&mut board, Action::Select(ComponentKind::Switch));
        editor.apply(&mut board, Action::PrimaryDown(p(100.0, 100.0)));
        assert_eq!(board.component_count(), 0);
        assert_eq!(editor.selected(), Some(ComponentKind::Switch));

        editor.apply(&mut board, Action::PrimaryDown(p(250.0, 100.0)));
        assert_eq!(board.component_count(), 1);
    }

    #[test]
    fn two_terminal_clicks_make_a_wire_in_click_order() {
        let mut board = Board::new();
        let mut editor = Editor::new();
        let light = place(&mut editor, &mut board, ComponentKind::Light, p(300.0, 100.0));
        let switch = place(&mut editor, &mut board, ComponentKind::Switch, p(100.0, 100.0));
        editor.set_wire_tag(WireTag(2));

        // light input first, switch output second
        let edits = editor.apply(&mut board, Action::PrimaryDown(p(290.0, 115.0)));
        let light_in = WireEnd::new(light, Terminal::Input(0));
        assert_eq!(edits, [Edit::WireStarted(light_in)]);
        assert_eq!(editor.gesture(), Gesture::WireStart(light_in));
        assert_eq!(editor.pending_wire(&board), Some(p(290.0, 115.0)));

        let edits = editor.apply(&mut board, Action::PrimaryDown(p(150.0, 110.0)));
        assert_eq!(edits, [Edit::WireAdded(0)]);
        assert_eq!(editor.gesture(), Gesture::Idle);
        assert_eq!(editor.pending_wire(&board), None);

        let wire = board.wires()[0];
        assert_eq!(wire.source, light_in);
        assert_eq!(wire.target, WireEnd::new(switch, Terminal::Output));
        assert_eq!(wire.tag, WireTag(2));
    }

    #[test]
    fn same_terminal_twice_makes_a_self_loop() {
        let mut board = Board::new();
        let mut editor = Editor::new();
        let gate = place(&mut editor, &mut board, ComponentKind::Gate(GateKind::Not), p(100.0, 100.0));

        editor.apply(&mut board, Action::PrimaryDown(p(90.0, 120.0)));
        editor.apply(&mut board, Action::PrimaryDown(p(90.0, 120.0)));
        let end = WireEnd::new(gate, Terminal::Input(0));
        assert_eq!(board.wires()[0].source, end);
        assert_eq!(board.wires()[0].target, end);
    }

    #[test]
    fn secondary_click_cancels_pending_wire_without_deleting() {
        let mut board = Board::new();
        let mut editor = Editor::new();
        let switch = place(&mut editor, &mut board, ComponentKind::Switch, p(0.0, 0.0));
        let light = place(&mut editor, &mut board, ComponentKind::Light, p(100.0, -5.0));
        board
            .connect(
                WireEnd::new(switch, Terminal::Output),
                WireEnd::new(light, Terminal::Input(0)),
                WireTag(0),
            )
            .unwrap();

        editor.apply(&mut board, Action::PrimaryDown(p(50.0, 10.0)));
        let edits = editor.apply(&mut board, Action::SecondaryDown(p(70.0, 10.0)));
        assert_eq!(edits, [Edit::WireCancelled]);
        assert_eq!(editor.gesture(), Gesture::Idle);
        assert_eq!(board.wires().len(), 1);

        let edits = editor.apply(&mut board, Action::SecondaryDown(p(70.0, 10.0)));
        assert!(matches!(edits.as_slice(), [Edit::WireRemoved(_)]));
        assert!(board.wires().is_empty());
    }

    #[test]
    fn drag_moves_anchor_to_pointer() {
        let mut board = Board::new();
        let mut editor = Editor::new();
        let gate = place(&mut editor, &mut board, ComponentKind::Gate(GateKind::And), p(100.0, 100.0));

        let edits = editor.apply(&mut board, Action::PrimaryDown(p(120.0, 110.0)));
        assert_eq!(edits, [Edit::DragStarted(gate)]);

        editor.apply(&mut board, Action::PointerMove(p(300.0, 200.0)));
        assert_eq!(board.component(gate).map(|c| c.pos()), Some(p(300.0, 200.0)));
        assert_eq!(
            board.component(gate).and_then(|c| c.terminal_pos(Terminal::Output)),
            Some(p(370.0, 220.0))
        );

        assert_eq!(editor.apply(&mut board, Action::PrimaryUp), [Edit::Dropped(gate)]);
        editor.apply(&mut board, Action::PointerMove(p(0.0, 0.0)));
        assert_eq!(board.component(gate).map(|c| c.pos()), Some(p(300.0, 200.0)));
    }

    #[test]
    fn wires_follow_dragged_components() {
        let mut board = Board::new();
        let mut editor = Editor::new();
        let switch = place(&mut editor, &mut board, ComponentKind::Switch, p(0.0, 0.0));
        let light = place(&mut editor, &mut board, ComponentKind::Light, p(100.0, 0.0));
        editor.apply(&mut board, Action::PrimaryDown(p(50.0, 10.0)));
        editor.apply(&mut board, Action::PrimaryDown(p(90.0, 15.0)));

        editor.apply(&mut board, Action::PrimaryDown(p(110.0, 10.0)));
        editor.apply(&mut board, Action::PointerMove(p(200.0, 50.0)));
        editor.apply(&mut board, Action::PrimaryUp);

        let wire = board.wires()[0];
        assert_eq!(wire.target.component, light);
        assert_eq!(wire.source.component, switch);
        assert_eq!(wire.endpoints(&board), Some((p(50.0, 10.0), p(190.0, 65.0))));
    }

    #[test]
    fn clicking_a_switch_toggles_and_drags() {
        let mut board = Board::new();
        let mut editor = Editor::new();
        let switch = place(&mut editor, &mut board, ComponentKind::Switch, p(0.0, 0.0));
        // placing it did not toggle it
        assert_eq!(board.state(switch), Some(false));

        let edits = editor.apply(&mut board, Action::PrimaryDown(p(10.0, 10.0)));
        assert_eq!(edits, [Edit::Toggled(switch), Edit::DragStarted(switch)]);
        assert_eq!(board.state(switch), Some(true));
    }

    #[test]
    fn body_click_during_pending_wire_keeps_it_and_does_not_drag() {
        let mut board = Board::new();
        let mut editor = Editor::new();
        let switch = place(&mut editor, &mut board, ComponentKind::Switch, p(0.0, 0.0));
        place(&mut editor, &mut board, ComponentKind::Light, p(200.0, 0.0));

        editor.apply(&mut board, Action::PrimaryDown(p(50.0, 10.0)));
        let edits = editor.apply(&mut board, Action::PrimaryDown(p(210.0, 10.0)));
        assert!(edits.is_empty());
        assert_eq!(
            editor.gesture(),
            Gesture::WireStart(WireEnd::new(switch, Terminal::Output))
        );
    }
}
