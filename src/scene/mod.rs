//! Scene contract plus the small pieces of state every scene animates:
//! transforms, materials, and the pointer selection store.

pub mod carousel;
pub mod filmstrip;

use crate::app::UiEvent;
use crate::math::{Color, Vec3};

/// A self-contained gallery layout. The app owns exactly one at a time and
/// drives it with pointer/scroll events plus a per-frame update.
pub trait Scene {
    fn name(&self) -> &'static str;
    /// Returns true if the scene consumed the event.
    fn handle_event(&mut self, event: &UiEvent) -> bool;
    /// Advances every damped quantity by `dt` seconds.
    fn update(&mut self, dt: f32);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation_y: f32,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation_y: 0.0,
            scale: Vec3::ONE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub opacity: f32,
    /// 0 is full color, 1 is fully desaturated.
    pub grayscale: f32,
    pub tint: Color,
    /// Texture magnification; 1 shows the image at rest.
    pub zoom: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            grayscale: 0.0,
            tint: Color::WHITE,
            zoom: 1.0,
        }
    }
}

/// World-units extent of the visible area at the content plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Pointer selection for one scene: at most one hovered and one clicked
/// item at any time. Scenes read it every frame to derive targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interaction {
    hovered: Option<usize>,
    clicked: Option<usize>,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn clicked(&self) -> Option<usize> {
        self.clicked
    }

    pub fn pointer_over(&mut self, index: usize) {
        self.hovered = Some(index);
    }

    pub fn pointer_out(&mut self) {
        self.hovered = None;
    }

    /// Click on an item toggles it; clicking empty space clears.
    pub fn click(&mut self, target: Option<usize>) {
        self.clicked = match target {
            Some(index) if self.clicked == Some(index) => None,
            Some(index) => Some(index),
            None => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_toggles_and_clears() {
        let mut state = Interaction::new();
        state.click(Some(4));
        assert_eq!(state.clicked(), Some(4));
        state.click(Some(4));
        assert_eq!(state.clicked(), None);
        state.click(Some(2));
        state.click(None);
        assert_eq!(state.clicked(), None);
    }

    #[test]
    fn hover_is_single() {
        let mut state = Interaction::new();
        state.pointer_over(1);
        state.pointer_over(9);
        assert_eq!(state.hovered(), Some(9));
        state.pointer_out();
        assert_eq!(state.hovered(), None);
    }
}
