//! Pointer-driven tilt and light effects.
//!
//! Every interactive surface owns one [`TiltSurface`]: its element reference
//! (the on-screen rect, absent while unmounted) and its current style. Handlers
//! only ever touch their own surface, and do nothing while the element is
//! missing.

use crate::consts::cli_consts::tilt::*;
use crate::consts::cli_consts::ui::{CELL_HEIGHT_PX, CELL_WIDTH_PX};
use ratatui::layout::{Position, Rect};

/// 3D transform applied to a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub perspective: f64,
    /// Degrees.
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
    pub translate_z: f64,
}

impl Transform {
    pub fn neutral(perspective: f64) -> Self {
        Self {
            perspective,
            rotate_x: 0.0,
            rotate_y: 0.0,
            scale: 1.0,
            translate_z: 0.0,
        }
    }
}

/// Light effect following the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    None,
    /// Radial glow centred on the pointer, in px relative to the surface.
    Glow {
        x: f64,
        y: f64,
        intensity: f64,
        radius: f64,
    },
    /// Background position as a percentage of the surface.
    Position { x_percent: f64, y_percent: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lift {
    Scale(f64),
    TranslateZ(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    Glow { active: f64, idle: f64, radius: f64 },
    Position,
}

/// Sensitivity and styling of a tilt effect. A smaller divisor tilts harder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltConfig {
    pub divisor: f64,
    pub perspective: f64,
    pub lift: Lift,
    pub light: LightKind,
}

impl TiltConfig {
    pub const fn card() -> Self {
        Self {
            divisor: CARD_DIVISOR,
            perspective: CARD_PERSPECTIVE_PX,
            lift: Lift::Scale(CARD_HOVER_SCALE),
            light: LightKind::Glow {
                active: CARD_GLOW_ACTIVE,
                idle: CARD_GLOW_IDLE,
                radius: CARD_GLOW_RADIUS,
            },
        }
    }

    pub const fn button() -> Self {
        Self {
            divisor: BUTTON_DIVISOR,
            perspective: BUTTON_PERSPECTIVE_PX,
            lift: Lift::TranslateZ(BUTTON_LIFT_PX),
            light: LightKind::Position,
        }
    }
}

/// Pointer position relative to a rect, in px, sampled at the cell centre.
fn relative_px(rect: Rect, column: u16, row: u16) -> (f64, f64) {
    let x = (column.saturating_sub(rect.x)) as f64 * CELL_WIDTH_PX + CELL_WIDTH_PX / 2.0;
    let y = (row.saturating_sub(rect.y)) as f64 * CELL_HEIGHT_PX + CELL_HEIGHT_PX / 2.0;
    (x, y)
}

fn size_px(rect: Rect) -> (f64, f64) {
    (
        rect.width as f64 * CELL_WIDTH_PX,
        rect.height as f64 * CELL_HEIGHT_PX,
    )
}

#[derive(Debug, Clone)]
pub struct TiltSurface {
    config: TiltConfig,
    element: Option<Rect>,
    active: bool,
    hovered: bool,
    transform: Transform,
    light: Light,
}

impl TiltSurface {
    pub fn new(config: TiltConfig) -> Self {
        Self {
            config,
            element: None,
            active: false,
            hovered: false,
            transform: Transform::neutral(config.perspective),
            light: Light::None,
        }
    }

    pub fn mount(&mut self, rect: Rect) {
        self.element = Some(rect);
    }

    pub fn unmount(&mut self) {
        self.element = None;
        self.hovered = false;
        self.transform = Transform::neutral(self.config.perspective);
        self.light = Light::None;
    }

    /// Active surfaces glow brighter on the next pointer move.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn light(&self) -> Light {
        self.light
    }

    pub fn pointer_move(&mut self, column: u16, row: u16) {
        let Some(rect) = self.element else {
            return;
        };
        self.hovered = true;
        let (x, y) = relative_px(rect, column, row);
        let (width, height) = size_px(rect);
        let (center_x, center_y) = (width / 2.0, height / 2.0);

        let mut transform = Transform::neutral(self.config.perspective);
        transform.rotate_x = (y - center_y) / self.config.divisor;
        transform.rotate_y = (center_x - x) / self.config.divisor;
        match self.config.lift {
            Lift::Scale(scale) => transform.scale = scale,
            Lift::TranslateZ(z) => transform.translate_z = z,
        }
        self.transform = transform;

        self.light = match self.config.light {
            LightKind::Glow {
                active,
                idle,
                radius,
            } => Light::Glow {
                x,
                y,
                intensity: if self.active { active } else { idle },
                radius: radius * width.hypot(height),
            },
            LightKind::Position => Light::Position {
                x_percent: x * 100.0 / width,
                y_percent: y * 100.0 / height,
            },
        };
    }

    pub fn pointer_leave(&mut self) {
        if self.element.is_none() {
            return;
        }
        self.hovered = false;
        self.transform = Transform::neutral(self.config.perspective);
        self.light = Light::None;
    }

    /// Dispatches a pointer position: move while inside, leave on exit.
    pub fn route(&mut self, column: u16, row: u16) {
        let Some(rect) = self.element else {
            return;
        };
        if rect.contains(Position::new(column, row)) {
            self.pointer_move(column, row);
        } else if self.hovered {
            self.pointer_leave();
        }
    }
}

/// Layered parallax: each layer follows the pointer in proportion to its depth.
#[derive(Debug, Clone)]
pub struct ParallaxScene {
    element: Option<Rect>,
    offsets: Vec<(f64, f64)>,
    hovered: bool,
}

impl ParallaxScene {
    pub fn new(layers: usize) -> Self {
        Self {
            element: None,
            offsets: vec![(0.0, 0.0); layers],
            hovered: false,
        }
    }

    pub fn mount(&mut self, rect: Rect) {
        self.element = Some(rect);
    }

    /// Layer offsets in px, nearest layer last.
    pub fn offsets(&self) -> &[(f64, f64)] {
        &self.offsets
    }

    pub fn pointer_move(&mut self, column: u16, row: u16) {
        let Some(rect) = self.element else {
            return;
        };
        self.hovered = true;
        let (x, y) = relative_px(rect, column, row);
        let (width, height) = size_px(rect);
        let move_x = (x - width / 2.0) / PARALLAX_DIVISOR;
        let move_y = (y - height / 2.0) / PARALLAX_DIVISOR;
        for (index, offset) in self.offsets.iter_mut().enumerate() {
            let depth = (index + 1) as f64;
            *offset = (move_x * depth, move_y * depth);
        }
    }

    pub fn pointer_leave(&mut self) {
        if self.element.is_none() {
            return;
        }
        self.hovered = false;
        self.offsets.iter_mut().for_each(|o| *o = (0.0, 0.0));
    }

    pub fn route(&mut self, column: u16, row: u16) {
        let Some(rect) = self.element else {
            return;
        };
        if rect.contains(Position::new(column, row)) {
            self.pointer_move(column, row);
        } else if self.hovered {
            self.pointer_leave();
        }
    }
}
