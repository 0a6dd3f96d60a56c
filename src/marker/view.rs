use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Canvas;

/// Constraint passed to `View::measure` for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MeasureSpec {
    /// No constraint: the view reports its natural size.
    Unspecified,
    Exactly(f64),
    AtMost(f64),
}

impl MeasureSpec {
    /// Resolves a natural size against this constraint.
    #[must_use]
    pub fn resolve(self, natural: f64) -> f64 {
        match self {
            Self::Unspecified => natural,
            Self::Exactly(size) => size,
            Self::AtMost(limit) => natural.min(limit),
        }
    }
}

/// How a child is sized inside its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LayoutSizing {
    /// Size to content.
    #[default]
    WrapContent,
    MatchParent,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Rectangle relative to the parent's origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Bounds of `size` anchored at the origin.
    #[must_use]
    pub const fn at_origin(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }
}

/// Minimal view contract a host toolkit binds to.
///
/// `draw` paints in the view's local frame: `(0, 0)` is the view's own
/// top-left corner, whatever translation the canvas carries.
pub trait View: fmt::Debug {
    fn set_layout_sizing(&mut self, _width: LayoutSizing, _height: LayoutSizing) {}

    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size;

    fn layout(&mut self, bounds: Bounds);

    fn bounds(&self) -> Bounds;

    fn draw(&self, canvas: &mut dyn Canvas) -> ChartResult<()>;
}

/// Identifier of a registered layout template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LayoutId(pub u32);

/// Turns a layout template identifier into a fresh view tree.
pub trait LayoutInflater {
    fn inflate(&self, layout_id: LayoutId) -> ChartResult<Box<dyn View>>;
}

type ViewFactory = Box<dyn Fn() -> Box<dyn View>>;

/// In-process `LayoutInflater` backed by registered factories.
#[derive(Default)]
pub struct TemplateRegistry {
    factories: IndexMap<LayoutId, ViewFactory>,
}

impl TemplateRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `factory` under `layout_id`, replacing any earlier template.
    pub fn register<V, F>(&mut self, layout_id: LayoutId, factory: F)
    where
        V: View + 'static,
        F: Fn() -> V + 'static,
    {
        self.factories
            .insert(layout_id, Box::new(move || Box::new(factory()) as Box<dyn View>));
    }

    #[must_use]
    pub fn contains(&self, layout_id: LayoutId) -> bool {
        self.factories.contains_key(&layout_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateRegistry")
            .field("layouts", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl LayoutInflater for TemplateRegistry {
    fn inflate(&self, layout_id: LayoutId) -> ChartResult<Box<dyn View>> {
        self.factories
            .get(&layout_id)
            .map(|factory| factory())
            .ok_or(ChartError::UnknownLayout(layout_id.0))
    }
}
