//! Horizontal strip of tiles on a bounded scroll track. Tiles near the
//! focus point swell and regain color, a clicked tile expands while its
//! neighbors part to make room, and a minimap of ticks echoes the focus
//! curve at the bottom of the view.

use crate::app::{PickTarget, UiEvent};
use crate::assets::{AssetId, AssetLibrary};
use crate::config::{FilmstripConfig, MotionConfig};
use crate::math::{Color, Vec3};
use crate::motion::{damp, damp_color, damp_vec3};
use crate::scene::{Interaction, Material, Scene, Transform, Viewport};
use crate::scroll::ScrollControls;
use log::info;

const EXPANDED_WIDTH: f32 = 4.7;
const EXPANDED_HEIGHT: f32 = 5.0;
/// How far unclicked tiles slide away from an expanded one.
const PART_OFFSET: f32 = 2.0;
/// The focus bump spans this many tile widths to either side of its center.
const FOCUS_REACH: f32 = 2.0;
const TICK_SPACING: f32 = 0.06;
const TICK_MARGIN_BOTTOM: f32 = 0.6;
const TICK_REST: f32 = 0.15;
const TICK_SWELL: f32 = 6.0;
const MUTED_FALLBACK: Color = Color {
    r: 2.0 / 3.0,
    g: 2.0 / 3.0,
    b: 2.0 / 3.0,
};

#[derive(Debug, Clone)]
pub struct Tile {
    pub asset: AssetId,
    /// Rest x of the tile center; parting slides relative to this.
    pub base_x: f32,
    pub transform: Transform,
    pub material: Material,
}

/// One bar of the minimap. Unit-length line scaled vertically.
#[derive(Debug, Clone)]
pub struct Tick {
    pub position: Vec3,
    pub scale_y: f32,
}

/// Where one tile is headed this frame. Computed without touching the live
/// transform so the goal state can be inspected on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileTargets {
    pub scale: Vec3,
    pub x: f32,
    pub grayscale: f32,
    pub tint: Color,
}

pub struct FilmstripScene {
    pub scroll: ScrollControls,
    pub viewport: Viewport,
    pub tiles: Vec<Tile>,
    pub ticks: Vec<Tick>,
    pub interaction: Interaction,
    motion: MotionConfig,
    tile_width: f32,
    tile_height: f32,
    muted: Color,
}

/// Scrollable extent in screen-widths for `count` tiles of pitch `pitch`.
pub fn pages(count: usize, pitch: f32, viewport_width: f32) -> f32 {
    (viewport_width - pitch + count as f32 * pitch) / viewport_width
}

impl FilmstripScene {
    pub fn new(
        assets: &AssetLibrary,
        cfg: &FilmstripConfig,
        viewport: Viewport,
        motion: MotionConfig,
    ) -> Self {
        // one tile per image; the library is non-empty by construction
        let count = assets.len();
        let pitch = cfg.tile_width + cfg.gap;
        let tiles = (0..count)
            .map(|i| Tile {
                asset: assets.cyclic(i).id,
                base_x: i as f32 * pitch,
                transform: Transform {
                    position: Vec3::new(i as f32 * pitch, 0.0, 0.0),
                    rotation_y: 0.0,
                    scale: Vec3::new(cfg.tile_width, cfg.tile_height, 1.0),
                },
                material: Material::default(),
            })
            .collect();
        let ticks = (0..count)
            .map(|i| Tick {
                position: Vec3::new(
                    i as f32 * TICK_SPACING - count as f32 * TICK_SPACING / 2.0,
                    -viewport.height / 2.0 + TICK_MARGIN_BOTTOM,
                    0.0,
                ),
                scale_y: 1.0,
            })
            .collect();
        info!(
            "filmstrip ready: {} tiles over {:.2} pages",
            count,
            pages(count, pitch, viewport.width)
        );
        Self {
            scroll: ScrollControls::horizontal(
                pages(count, pitch, viewport.width),
                cfg.scroll_damping,
            ),
            viewport,
            tiles,
            ticks,
            interaction: Interaction::new(),
            motion,
            tile_width: cfg.tile_width,
            tile_height: cfg.tile_height,
            muted: Color::from_hex(&cfg.muted_tint).unwrap_or(MUTED_FALLBACK),
        }
    }

    /// Focus curve sample for tile `index` at the current scroll position.
    /// Total over `index`: positions past the strip sit outside the bump
    /// and read 0.
    pub fn focus(&self, index: usize) -> f32 {
        let n = self.tiles.len() as f32;
        self.scroll.curve((index as f32 + 0.5) / n, FOCUS_REACH / n)
    }

    /// Animation goals for tile `index`, a pure read of the scroll and
    /// interaction state. `update` eases the live transform toward these.
    /// `None` past the end of the strip, the same bound `handle_event`
    /// applies to picks.
    pub fn tile_targets(&self, index: usize) -> Option<TileTargets> {
        let tile = self.tiles.get(index)?;
        let y = self.focus(index);
        let expanded = self.interaction.clicked() == Some(index);
        let lit = self.interaction.hovered() == Some(index) || expanded;
        let scale = if expanded {
            Vec3::new(EXPANDED_WIDTH, EXPANDED_HEIGHT, 1.0)
        } else {
            Vec3::new(self.tile_width, self.tile_height + y, 1.0)
        };
        let x = match self.interaction.clicked() {
            Some(c) if index < c => tile.base_x - PART_OFFSET,
            Some(c) if index > c => tile.base_x + PART_OFFSET,
            _ => tile.base_x,
        };
        Some(TileTargets {
            scale,
            x,
            grayscale: if lit { 0.0 } else { (1.0 - y).max(0.0) },
            tint: if lit { Color::WHITE } else { self.muted },
        })
    }
}

impl Scene for FilmstripScene {
    fn name(&self) -> &'static str {
        "horizontal-tiles"
    }

    fn handle_event(&mut self, event: &UiEvent) -> bool {
        match event {
            UiEvent::PointerOver {
                target: PickTarget::Tile { index },
            } if *index < self.tiles.len() => {
                self.interaction.pointer_over(*index);
                true
            }
            UiEvent::PointerOut => {
                self.interaction.pointer_out();
                true
            }
            UiEvent::Click { target } => match target {
                Some(PickTarget::Tile { index }) if *index < self.tiles.len() => {
                    self.interaction.click(Some(*index));
                    true
                }
                // a click that hits nothing collapses the expanded tile
                None => {
                    self.interaction.click(None);
                    true
                }
                _ => false,
            },
            UiEvent::Scroll { delta } => {
                self.scroll.feed(*delta);
                true
            }
            _ => false,
        }
    }

    fn update(&mut self, dt: f32) {
        self.scroll.update(dt);

        for i in 0..self.tiles.len() {
            let Some(goal) = self.tile_targets(i) else {
                continue;
            };
            // hovered tiles recolor on the slower track
            let tint_lambda = if self.interaction.hovered() == Some(i) {
                self.motion.tint_hovered
            } else {
                self.motion.tint
            };
            let tile = &mut self.tiles[i];
            tile.transform.scale = damp_vec3(tile.transform.scale, goal.scale, self.motion.scale, dt);
            tile.transform.position.x =
                damp(tile.transform.position.x, goal.x, self.motion.slide, dt);
            tile.material.grayscale =
                damp(tile.material.grayscale, goal.grayscale, self.motion.grayscale, dt);
            tile.material.tint = damp_color(tile.material.tint, goal.tint, tint_lambda, dt);
        }

        for i in 0..self.ticks.len() {
            let swell = TICK_REST + self.focus(i) / TICK_SWELL;
            let tick = &mut self.ticks[i];
            tick.scale_y = damp(tick.scale_y, swell, self.motion.minimap, dt);
        }
    }
}
