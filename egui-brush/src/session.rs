use log::debug;

use crate::{
    point_in_bounds, selection_of, transition, Action, Bounds, Brush, BrushConfig, Dimensions,
    Point, SelectionHistory,
};

/// Owns the brush state of one interactive surface.
/// Every dispatched action replaces the brush with the next state.
#[derive(Debug, Default)]
pub struct BrushSession {
    brush: Brush,
    config: BrushConfig,
    history: SelectionHistory,
}

impl BrushSession {
    pub fn new(config: BrushConfig) -> Self {
        Self {
            brush: Brush::initial(),
            config,
            history: SelectionHistory::default(),
        }
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn config(&self) -> &BrushConfig {
        &self.config
    }

    /// Takes effect with the next dispatched action.
    pub fn set_config(&mut self, config: BrushConfig) {
        self.config = config;
    }

    pub fn history(&self) -> &SelectionHistory {
        &self.history
    }

    pub fn dispatch(&mut self, action: Action) -> &Brush {
        let next = transition(self.brush, action, &self.config);
        match (self.brush.is_open(), next) {
            (true, Brush::Closed { selection }) => {
                debug!("Brush committed {selection:?} after {action:?}");
                self.history.push(selection);
            }
            (false, next) if next.is_open() => {
                debug!("Brush opened with {action:?}");
            }
            _ => (),
        }
        self.brush = next;
        &self.brush
    }

    /// Restores the previous committed selection. Ignored during a gesture.
    pub fn undo(&mut self) -> bool {
        self.restore(SelectionHistory::undo)
    }

    pub fn redo(&mut self) -> bool {
        self.restore(SelectionHistory::redo)
    }

    fn restore(&mut self, step: fn(&mut SelectionHistory) -> Option<Dimensions>) -> bool {
        if self.brush.is_open() {
            return false;
        }
        match step(&mut self.history) {
            Some(selection) => {
                self.brush = Brush::Closed { selection };
                true
            }
            None => false,
        }
    }

    pub fn selection(&self) -> Bounds {
        selection_of(&self.brush)
    }

    /// Whether `point` lies strictly inside the current selection
    pub fn contains(&self, point: Point) -> bool {
        point_in_bounds(&self.selection(), point)
    }
}
