//! One evaluation pass over a board.
//!
//! Every pass reads the output states as they were before the pass started, so a
//! signal advances by exactly one component per pass and the order in which
//! components are visited never matters. Loops are evaluated like anything else and
//! simply never settle.

use crate::circuits::Component;

use super::{Board, ComponentId};

impl Board {
    /// Recomputes every gate and light once. Returns how many component states changed.
    pub fn evaluate(&mut self) -> usize {
        let outputs: Vec<Option<bool>> = self
            .components
            .map_slots(Component::output_state)
            .into_iter()
            .map(Option::flatten)
            .collect();

        // (target, driven state) per live wire, in wire order.
        let feeds: Vec<(ComponentId, bool)> = self
            .wires
            .iter()
            .filter(|wire| !wire.is_stale(self))
            .filter_map(|wire| {
                let state = outputs.get(wire.source.component.0).copied().flatten()?;
                Some((wire.target.component, state))
            })
            .collect();

        let mut changed = 0;
        let mut inputs = Vec::new();
        for (i, component) in self.components.iter_mut() {
            let id = ComponentId(i);
            let fed = feeds.iter().filter(|(target, _)| *target == id);

            let before = component.state();
            match component {
                Component::Gate(gate) => {
                    inputs.clear();
                    inputs.extend(fed.map(|(_, state)| *state));
                    gate.evaluate(&inputs);
                }
                Component::Light(light) => {
                    light.state = fed.last().is_some_and(|(_, state)| *state);
                }
                Component::Switch(_) => {}
            }

            if component.state() != before {
                changed += 1;
            }
        }

        log::trace!(
            "evaluated {} components over {} live wires, {changed} changed",
            self.components.len(),
            feeds.len(),
        );
        changed
    }
}
