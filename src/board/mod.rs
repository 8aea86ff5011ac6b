pub mod editor;
pub mod eval;
pub mod wire;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    circuits::{terminals::Terminal, Component, ComponentKind},
    containers::SlotVec,
    vector::Vec2f,
};

use wire::{Wire, WireEnd, WireTag};

/// Stable handle of a component on a board. Never reused, even after removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentId(pub usize);

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("component {0} is not on the board")]
    UnknownComponent(ComponentId),

    #[error("component {component} has no {terminal}")]
    NoSuchTerminal {
        component: ComponentId,
        terminal: Terminal,
    },
}

/// A circuit: the registry owning every component and wire.
///
/// Wires refer to components by [`ComponentId`] only. A wire whose component was removed,
/// or whose terminal the component does not have, is stale: it is skipped by evaluation,
/// rendering and hit-testing but stays in the registry.
#[derive(Debug, Clone, Default)]
pub struct Board {
    components: SlotVec<Component>,
    wires: Vec<Wire>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place(&mut self, kind: ComponentKind, pos: Vec2f) -> ComponentId {
        self.insert(Component::new(kind, pos))
    }

    pub fn insert(&mut self, component: Component) -> ComponentId {
        ComponentId(self.components.push(component))
    }

    /// Removes a component. Wires attached to it become stale.
    pub fn remove_component(&mut self, id: ComponentId) -> Option<Component> {
        self.components.remove(id.0)
    }

    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.get(id.0)
    }

    pub fn component_mut(&mut self, id: ComponentId) -> Option<&mut Component> {
        self.components.get_mut(id.0)
    }

    /// Live components in placement order.
    pub fn components(&self) -> impl Iterator<Item = (ComponentId, &Component)> {
        self.components.iter().map(|(i, c)| (ComponentId(i), c))
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn state(&self, id: ComponentId) -> Option<bool> {
        self.component(id).map(Component::state)
    }

    pub fn wires(&self) -> &[Wire] {
        &self.wires
    }

    /// Connects two terminals after checking that both exist.
    ///
    /// Nothing else is checked: a terminal may be fed by any number of wires and both
    /// ends may be on the same component.
    pub fn connect(
        &mut self,
        source: WireEnd,
        target: WireEnd,
        tag: WireTag,
    ) -> Result<usize, BoardError> {
        for end in [source, target] {
            let component = self
                .component(end.component)
                .ok_or(BoardError::UnknownComponent(end.component))?;

            if component.terminal_pos(end.terminal).is_none() {
                return Err(BoardError::NoSuchTerminal {
                    component: end.component,
                    terminal: end.terminal,
                });
            }
        }

        Ok(self.add_wire(Wire::new(source, target, tag)))
    }

    /// Appends a wire as is, stale or not.
    pub fn add_wire(&mut self, wire: Wire) -> usize {
        self.wires.push(wire);
        self.wires.len() - 1
    }

    pub fn remove_wire(&mut self, index: usize) -> Option<Wire> {
        (index < self.wires.len()).then(|| self.wires.remove(index))
    }

    /// Index of the first wire hit at `point`.
    pub fn wire_at(&self, point: Vec2f) -> Option<usize> {
        self.wires.iter().position(|w| w.hit_test(self, point))
    }

    /// Removes the first wire hit at `point`, leaving every other wire in place.
    pub fn remove_wire_at(&mut self, point: Vec2f) -> Option<Wire> {
        let index = self.wire_at(point)?;
        self.remove_wire(index)
    }

    /// First terminal near `point`, checking components in placement order.
    pub fn terminal_at(&self, point: Vec2f) -> Option<WireEnd> {
        self.components().find_map(|(id, c)| {
            c.terminal_at(point)
                .map(|terminal| WireEnd::new(id, terminal))
        })
    }

    /// Topmost (last placed) component containing `point`.
    pub fn component_at(&self, point: Vec2f) -> Option<ComponentId> {
        self.components()
            .filter(|(_, c)| c.contains_point(point))
            .last()
            .map(|(id, _)| id)
    }

    /// Toggles a switch and returns its new state. Other components are left alone.
    pub fn toggle(&mut self, id: ComponentId) -> Option<bool> {
        self.component_mut(id)?
            .as_switch_mut()
            .map(|switch| switch.toggle())
    }

    /// Toggles every switch containing `point`.
    pub fn toggle_switches_at(&mut self, point: Vec2f) -> Vec<ComponentId> {
        self.components
            .iter_mut()
            .filter_map(|(i, c)| {
                if !c.contains_point(point) {
                    return None;
                }
                let switch = c.as_switch_mut()?;
                switch.toggle();
                Some(ComponentId(i))
            })
            .collect()
    }

    pub fn move_component(&mut self, id: ComponentId, pos: Vec2f) -> bool {
        match self.component_mut(id) {
            Some(component) => {
                component.set_pos(pos);
                true
            }
            None => false,
        }
    }
}
