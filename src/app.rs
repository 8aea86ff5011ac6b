use eframe::egui::{self, Align2, Color32, FontId, PointerButton, Pos2, Sense, Stroke, Ui};
use egui_dock::{DockArea, DockState, NodeIndex, Style, TabViewer};
use serde::{Deserialize, Serialize};

use crate::{
    board::{
        editor::{Action, Edit},
        wire::WireTag,
    },
    circuits::{Component, ComponentKind},
    config::Config,
    simulation::Simulation,
    vector::Vec2f,
};

const DOCK_KEY: &str = "dock";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tab {
    Palette,
    Canvas,
}

pub struct BreadboardApp {
    sim: Simulation,
    dock: DockState<Tab>,
    config: Config,
    /// Palette picks waiting for the next canvas frame.
    pending: Vec<Action>,
}

impl BreadboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let dock = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, DOCK_KEY))
            .unwrap_or_else(|| default_dock(config.palette_fraction));

        let mut sim = Simulation::default();
        sim.editor.set_wire_tag(random_tag());

        Self {
            sim,
            dock,
            config,
            pending: vec![],
        }
    }
}

impl eframe::App for BreadboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut viewer = Viewer {
            sim: &mut self.sim,
            config: &self.config,
            pending: &mut self.pending,
        };

        DockArea::new(&mut self.dock)
            .style(Style::from_egui(ctx.style().as_ref()))
            .show(ctx, &mut viewer);

        // evaluation runs every frame, not only on input
        ctx.request_repaint();
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, DOCK_KEY, &self.dock);
    }
}

fn default_dock(palette_fraction: f32) -> DockState<Tab> {
    let mut dock = DockState::new(vec![Tab::Canvas]);
    let [_canvas, _palette] =
        dock.main_surface_mut()
            .split_left(NodeIndex::root(), palette_fraction, vec![Tab::Palette]);
    dock
}

fn random_tag() -> WireTag {
    let mut byte = [0u8];
    if let Err(err) = getrandom::getrandom(&mut byte) {
        log::warn!("no random wire color: {err}");
    }
    WireTag(byte[0])
}

struct Viewer<'a> {
    sim: &'a mut Simulation,
    config: &'a Config,
    pending: &'a mut Vec<Action>,
}

impl TabViewer for Viewer<'_> {
    type Tab = Tab;

    fn title(&mut self, tab: &mut Self::Tab) -> egui::WidgetText {
        match tab {
            Tab::Palette => "Palette".into(),
            Tab::Canvas => "Canvas".into(),
        }
    }

    fn ui(&mut self, ui: &mut Ui, tab: &mut Self::Tab) {
        match tab {
            Tab::Palette => self.palette(ui),
            Tab::Canvas => self.canvas(ui),
        }
    }

    fn closeable(&mut self, _tab: &mut Self::Tab) -> bool {
        false
    }
}

impl Viewer<'_> {
    fn palette(&mut self, ui: &mut Ui) {
        let selected = self.sim.editor.selected();
        let size = egui::vec2(ui.available_width(), 40.0);

        for kind in ComponentKind::ALL {
            let button = egui::Button::new(kind.label())
                .selected(selected == Some(kind))
                .min_size(size);
            if ui.add(button).on_hover_text(kind.display_name()).clicked() {
                self.pending.push(Action::Select(kind));
            }
        }
    }

    fn canvas(&mut self, ui: &mut Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let rect = response.rect;
        let origin = rect.min;
        let to_board = |pos: Pos2| board_pos(origin, pos);

        let mut actions = std::mem::take(&mut *self.pending);
        ui.input(|input| {
            for event in &input.events {
                let action = match *event {
                    egui::Event::PointerMoved(pos) => Action::PointerMove(to_board(pos)),
                    egui::Event::PointerButton {
                        pos,
                        button,
                        pressed,
                        ..
                    } => match (button, pressed) {
                        (PointerButton::Primary, true) if rect.contains(pos) => {
                            Action::PrimaryDown(to_board(pos))
                        }
                        (PointerButton::Primary, false) => Action::PrimaryUp,
                        (PointerButton::Secondary, true) if rect.contains(pos) => {
                            Action::SecondaryDown(to_board(pos))
                        }
                        _ => continue,
                    },
                    _ => continue,
                };
                actions.push(action);
            }
        });

        let edits = self.sim.frame(actions);
        if edits.iter().any(|e| matches!(e, Edit::WireAdded(_))) {
            self.sim.editor.set_wire_tag(random_tag());
        }

        painter.rect_filled(rect, 0.0, Color32::WHITE);
        self.draw_wires(&painter, origin);
        for (_, component) in self.sim.board.components() {
            self.draw_component(&painter, origin, component);
        }

        if let (Some(start), Some(pointer)) = (
            self.sim.editor.pending_wire(&self.sim.board),
            response.hover_pos(),
        ) {
            painter.line_segment(
                [screen(origin, start), pointer],
                Stroke::new(self.config.wire_width, Color32::BLACK),
            );
        }
    }

    fn draw_wires(&self, painter: &egui::Painter, origin: Pos2) {
        let board = &self.sim.board;
        for wire in board.wires() {
            let Some((a, b)) = wire.endpoints(board) else {
                continue;
            };
            let (r, g, b_) = self.config.wire_color(wire.tag);
            painter.line_segment(
                [screen(origin, a), screen(origin, b)],
                Stroke::new(self.config.wire_width, Color32::from_rgb(r, g, b_)),
            );
        }
    }

    fn draw_component(&self, painter: &egui::Painter, origin: Pos2, component: &Component) {
        let bounds = component.bounds();
        let rect = egui::Rect::from_min_size(screen(origin, bounds.pos), bounds.size.into());

        match component {
            Component::Gate(gate) => {
                let fill = if gate.state {
                    Color32::from_rgb(60, 60, 255)
                } else {
                    Color32::from_rgb(0, 0, 160)
                };
                painter.rect_filled(rect, 0.0, fill);
                painter.text(
                    rect.min + egui::vec2(5.0, 10.0),
                    Align2::LEFT_TOP,
                    gate.kind.label(),
                    FontId::proportional(16.0),
                    Color32::WHITE,
                );
            }
            Component::Switch(switch) => {
                painter.rect_filled(rect, 0.0, Color32::from_gray(200));
                let (knob, color) = if switch.state {
                    (egui::pos2(rect.max.x - 10.0, rect.center().y), Color32::GREEN)
                } else {
                    (egui::pos2(rect.min.x + 10.0, rect.center().y), Color32::RED)
                };
                painter.circle_filled(knob, 8.0, color);
            }
            Component::Light(light) => {
                let color = if light.state {
                    Color32::GREEN
                } else {
                    Color32::RED
                };
                painter.circle_filled(rect.center(), rect.width() / 2.0, color);
            }
        }

        for (_, pos) in component.terminal_positions() {
            painter.circle_filled(screen(origin, pos), self.config.terminal_radius, Color32::BLACK);
        }
    }
}

impl From<Vec2f> for egui::Vec2 {
    fn from(v: Vec2f) -> Self {
        egui::vec2(v.x, v.y)
    }
}

impl From<egui::Vec2> for Vec2f {
    fn from(v: egui::Vec2) -> Self {
        Vec2f::new(v.x, v.y)
    }
}

fn screen(origin: Pos2, pos: Vec2f) -> Pos2 {
    origin + egui::Vec2::from(pos)
}

fn board_pos(origin: Pos2, pos: Pos2) -> Vec2f {
    (pos - origin).into()
}
