use crate::{
    constraint::{move_brush, resize_brush},
    dimensions_to_bounds, BrushConfig, Bounds, Dimensions, Point,
};

/// Lets callers tell the first frame of a gesture from sustained movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    Start,
    Active,
    End,
}

/// State of a brush. Values are replaced by [`transition`], never mutated.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Brush {
    /// No gesture. `selection` is the last committed rectangle.
    Closed { selection: Dimensions },
    /// A new rectangle is being sized.
    Brushing {
        start: Point,
        current: Point,
        phase: Phase,
    },
    /// A closed selection is being moved. `previous_position` is the last
    /// observed pointer position, not the clamped one.
    Dragging {
        start: Point,
        current: Point,
        previous_position: Point,
        phase: Phase,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    PointerDown(Point),
    /// Pointer pressed on the existing selection. Classified by the adapter.
    PointerDownInside(Point),
    PointerMove(Point),
    PointerUp,
    PointerLeave,
}

impl Brush {
    pub fn initial() -> Self {
        Brush::Closed {
            selection: Dimensions::ZERO,
        }
    }

    /// Live corners of an open brush or the committed selection of a closed one
    pub fn dimensions(&self) -> Dimensions {
        match *self {
            Brush::Closed { selection } => selection,
            Brush::Brushing { start, current, .. } | Brush::Dragging { start, current, .. } => {
                Dimensions { start, current }
            }
        }
    }

    pub fn phase(&self) -> Option<Phase> {
        match *self {
            Brush::Closed { .. } => None,
            Brush::Brushing { phase, .. } | Brush::Dragging { phase, .. } => Some(phase),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Brush::Closed { .. })
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::initial()
    }
}

/// Computes the brush state following `action`.
///
/// Total over all state/action pairs: combinations that do not apply return
/// `state` unchanged. Releasing and leaving both commit the open rectangle.
pub fn transition(state: Brush, action: Action, config: &BrushConfig) -> Brush {
    match (state, action) {
        (_, Action::PointerDown(point)) => Brush::Brushing {
            start: point,
            current: point,
            phase: Phase::Start,
        },
        (Brush::Closed { selection }, Action::PointerDownInside(point)) if config.drag_mode => {
            Brush::Dragging {
                start: selection.start,
                current: selection.current,
                previous_position: point,
                phase: Phase::Start,
            }
        }
        (Brush::Brushing { start, .. }, Action::PointerMove(point)) => {
            let dims = resize_brush(point, start, config.min_size, config.bounds());
            Brush::Brushing {
                start: dims.start,
                current: dims.current,
                phase: Phase::Active,
            }
        }
        (
            Brush::Dragging {
                start,
                current,
                previous_position,
                ..
            },
            Action::PointerMove(point),
        ) if config.drag_mode => {
            let dims = move_brush(
                point,
                Dimensions { start, current },
                previous_position,
                config.bounds(),
            );
            Brush::Dragging {
                start: dims.start,
                current: dims.current,
                previous_position: point,
                phase: Phase::Active,
            }
        }
        (
            Brush::Brushing { start, current, .. } | Brush::Dragging { start, current, .. },
            Action::PointerUp | Action::PointerLeave,
        ) => Brush::Closed {
            selection: Dimensions { start, current },
        },
        (state, _) => state,
    }
}

/// The current selection, whether or not a gesture is in progress
pub fn selection_of(brush: &Brush) -> Bounds {
    dimensions_to_bounds(&brush.dimensions())
}

/// Left fold of [`transition`] over `actions`, yielding every intermediate state.
pub fn replay<'a, I>(
    initial: Brush,
    actions: I,
    config: &'a BrushConfig,
) -> impl Iterator<Item = Brush> + 'a
where
    I: IntoIterator<Item = Action>,
    I::IntoIter: 'a,
{
    actions.into_iter().scan(initial, move |state, action| {
        *state = transition(*state, action, config);
        Some(*state)
    })
}
