//! Circular card gallery: four seasonal arc segments of cards around a ring,
//! spun by an endless scroll track, with a billboard spotlight showing the
//! hovered image at center.

use crate::app::{PickTarget, UiEvent};
use crate::assets::{AssetId, AssetLibrary};
use crate::config::{CarouselConfig, MotionConfig};
use crate::math::{Color, Vec2, Vec3};
use crate::motion::{damp, damp_vec3};
use crate::scene::{Material, Scene, Transform};
use crate::scroll::ScrollControls;
use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// Golden-ratio card face, wider than tall.
const CARD_ASPECT: f32 = 1.618;
/// Slots left empty at the end of each arc so neighboring seasons get a gap.
const TRAILING_SLACK: usize = 3;
const HOVER_LIFT: f32 = 0.25;
const HOVER_SCALE: f32 = 1.4;
const ACTIVE_SCALE: f32 = 1.25;
const LABEL_RADIUS_FACTOR: f32 = 1.4;
const LABEL_HEIGHT: f32 = 0.5;
const LABEL_FONT_SIZE: f32 = 0.25;
const ORIGIN_HEIGHT: f32 = 1.5;
const SPOTLIGHT_LIFT: f32 = 1.5;
const SPOTLIGHT_WIDTH: f32 = 3.5;
const SPOTLIGHT_DEPTH: f32 = 0.2;
/// Zoom level the spotlight texture punches in to whenever the hovered image
/// changes, before easing back out to 1.
const SPOTLIGHT_ZOOM_RESET: f32 = 0.8;
const FALLBACK_ASSET: AssetId = AssetId(0);
const POINTER_GAIN: f32 = 2.0;
const CAMERA_HEIGHT: f32 = 4.5;
const CAMERA_DISTANCE: f32 = 9.0;

const TITLE_WORDS: [&str; 24] = [
    "amber", "birch", "cinder", "drift", "ember", "fjord", "glade", "harbor", "isle", "juniper",
    "kestrel", "lumen", "meadow", "north", "opal", "prairie", "quill", "reed", "sable", "thistle",
    "umber", "vale", "willow", "zephyr",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Season {
    pub category: &'static str,
    /// Start angle of the arc, radians.
    pub from: f32,
    /// Angular span of the arc, radians.
    pub len: f32,
    /// Vertical offset of the whole segment group.
    pub lift: f32,
}

pub const SEASONS: [Season; 4] = [
    Season {
        category: "spring",
        from: 0.0,
        len: FRAC_PI_4,
        lift: 0.0,
    },
    Season {
        category: "summer",
        from: FRAC_PI_4,
        len: FRAC_PI_2,
        lift: 0.4,
    },
    Season {
        category: "autumn",
        from: FRAC_PI_4 + FRAC_PI_2,
        len: FRAC_PI_2,
        lift: 0.0,
    },
    Season {
        category: "winter",
        from: PI * 1.25,
        len: PI * 2.0 - PI * 1.25,
        lift: -0.4,
    },
];

/// Angular slots an arc of `len` radians is divided into.
pub fn slot_count(len: f32, cards_per_radian: f32) -> usize {
    (len * cards_per_radian).round() as usize
}

/// Cards actually placed on an arc: the slot count minus the trailing gap.
pub fn card_count(len: f32, cards_per_radian: f32) -> usize {
    slot_count(len, cards_per_radian).saturating_sub(TRAILING_SLACK)
}

#[derive(Debug, Clone)]
pub struct Card {
    pub asset: AssetId,
    pub angle: f32,
    /// Fixed spot on the ring; the damped transform moves relative to it.
    pub pivot: Vec3,
    pub transform: Transform,
}

/// Where a card's transform is headed this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTargets {
    pub position: Vec3,
    pub scale: Vec3,
}

/// Animation goals for a card from its hover state alone. The whole segment
/// grows a little while any of its cards is hovered; the hovered card grows
/// more and lifts.
pub fn card_targets(hovered: bool, segment_active: bool) -> CardTargets {
    let f = if hovered {
        HOVER_SCALE
    } else if segment_active {
        ACTIVE_SCALE
    } else {
        1.0
    };
    CardTargets {
        position: Vec3::new(0.0, if hovered { HOVER_LIFT } else { 0.0 }, 0.0),
        scale: Vec3::new(CARD_ASPECT * f, f, 1.0),
    }
}

#[derive(Debug, Clone)]
pub struct Label {
    pub text: &'static str,
    pub position: Vec3,
    pub font_size: f32,
    pub color: Color,
}

#[derive(Debug, Clone)]
pub struct SegmentGroup {
    pub season: Season,
    pub lift: Vec3,
    pub label: Label,
    pub cards: Vec<Card>,
    /// Card index hovered within this segment, if any.
    pub hovered: Option<usize>,
}

impl SegmentGroup {
    fn new(season: Season, assets: &AssetLibrary, cfg: &CarouselConfig) -> Self {
        let slots = slot_count(season.len, cfg.cards_per_radian);
        let shown = slots.saturating_sub(TRAILING_SLACK);
        let cards = (0..shown)
            .map(|i| {
                let angle = season.from + (i as f32 / slots as f32) * season.len;
                Card {
                    asset: assets.cyclic(i).id,
                    angle,
                    pivot: Vec3::new(angle.sin() * cfg.radius, 0.0, angle.cos() * cfg.radius),
                    transform: Transform {
                        position: Vec3::ZERO,
                        // face outward along the ring tangent
                        rotation_y: FRAC_PI_2 + angle,
                        scale: Vec3::new(CARD_ASPECT, 1.0, 1.0),
                    },
                }
            })
            .collect();

        let mid = season.from + season.len / 2.0;
        let label_radius = cfg.radius * LABEL_RADIUS_FACTOR;
        Self {
            season,
            lift: Vec3::new(0.0, season.lift, 0.0),
            label: Label {
                text: season.category,
                position: Vec3::new(mid.sin() * label_radius, LABEL_HEIGHT, mid.cos() * label_radius),
                font_size: LABEL_FONT_SIZE,
                color: Color::BLACK,
            },
            cards,
            hovered: None,
        }
    }
}

/// Center billboard that enlarges whatever card the pointer rests on.
#[derive(Debug, Clone)]
pub struct Spotlight {
    pub asset: AssetId,
    pub title: String,
    pub title_visible: bool,
    pub position: Vec3,
    pub scale: Vec3,
    pub material: Material,
}

impl Spotlight {
    fn new(title: String) -> Self {
        Self {
            asset: FALLBACK_ASSET,
            title,
            title_visible: false,
            position: Vec3::new(0.0, SPOTLIGHT_LIFT, 0.0),
            scale: Vec3::new(SPOTLIGHT_WIDTH, CARD_ASPECT * SPOTLIGHT_WIDTH, SPOTLIGHT_DEPTH),
            material: Material {
                opacity: 0.0,
                zoom: SPOTLIGHT_ZOOM_RESET,
                ..Material::default()
            },
        }
    }
}

/// Camera that leans away from the pointer while orbiting the gallery.
#[derive(Debug, Clone)]
pub struct CameraRig {
    pub position: Vec3,
    pub look_at: Vec3,
    pointer: Vec2,
}

impl CameraRig {
    fn new() -> Self {
        Self {
            position: Vec3::new(0.0, CAMERA_HEIGHT, CAMERA_DISTANCE),
            look_at: Vec3::ZERO,
            pointer: Vec2::ZERO,
        }
    }

    fn update(&mut self, lambda: f32, dt: f32) {
        let target = Vec3::new(
            -self.pointer.x * POINTER_GAIN,
            self.pointer.y * POINTER_GAIN + CAMERA_HEIGHT,
            CAMERA_DISTANCE,
        );
        self.position = damp_vec3(self.position, target, lambda, dt);
    }
}

pub struct CarouselScene {
    pub origin: Vec3,
    /// Current yaw of the whole ring, driven directly by the scroll offset.
    pub rotation_y: f32,
    pub scroll: ScrollControls,
    pub segments: Vec<SegmentGroup>,
    pub spotlight: Spotlight,
    pub camera: CameraRig,
    hovered_asset: Option<AssetId>,
    motion: MotionConfig,
    rng: StdRng,
}

impl CarouselScene {
    pub fn new(assets: &AssetLibrary, cfg: &CarouselConfig, motion: MotionConfig) -> Self {
        let segments = SEASONS
            .iter()
            .map(|season| SegmentGroup::new(*season, assets, cfg))
            .collect();
        let mut rng = StdRng::from_entropy();
        let title = random_title(&mut rng);
        info!(
            "carousel ready: {} segments, {} images, radius {}",
            SEASONS.len(),
            assets.len(),
            cfg.radius
        );
        Self {
            origin: Vec3::new(0.0, ORIGIN_HEIGHT, 0.0),
            rotation_y: 0.0,
            scroll: ScrollControls::infinite(cfg.pages, cfg.scroll_damping),
            segments,
            spotlight: Spotlight::new(title),
            camera: CameraRig::new(),
            hovered_asset: None,
            motion,
            rng,
        }
    }

    pub fn hovered_asset(&self) -> Option<AssetId> {
        self.hovered_asset
    }

    fn hover_card(&mut self, segment: usize, card: usize) -> bool {
        let Some(asset) = self
            .segments
            .get(segment)
            .and_then(|s| s.cards.get(card))
            .map(|c| c.asset)
        else {
            return false;
        };
        for (i, seg) in self.segments.iter_mut().enumerate() {
            seg.hovered = (i == segment).then_some(card);
        }
        self.set_hovered_asset(Some(asset));
        true
    }

    fn clear_hover(&mut self) {
        for seg in &mut self.segments {
            seg.hovered = None;
        }
        self.set_hovered_asset(None);
    }

    fn set_hovered_asset(&mut self, next: Option<AssetId>) {
        if next == self.hovered_asset {
            return;
        }
        let was_lit = self.hovered_asset.is_some();
        self.hovered_asset = next;
        self.spotlight.asset = next.unwrap_or(FALLBACK_ASSET);
        // every change of subject restarts the punch-in
        self.spotlight.material.zoom = SPOTLIGHT_ZOOM_RESET;
        if was_lit != next.is_some() {
            self.spotlight.title = random_title(&mut self.rng);
        }
    }
}

impl Scene for CarouselScene {
    fn name(&self) -> &'static str {
        "cards-circle"
    }

    fn handle_event(&mut self, event: &UiEvent) -> bool {
        match event {
            UiEvent::PointerOver {
                target: PickTarget::Card { segment, card },
            } => self.hover_card(*segment, *card),
            UiEvent::PointerOut => {
                self.clear_hover();
                true
            }
            UiEvent::PointerMove { ndc } => {
                self.camera.pointer = *ndc;
                true
            }
            UiEvent::Scroll { delta } => {
                self.scroll.feed(*delta);
                true
            }
            _ => false,
        }
    }

    fn update(&mut self, dt: f32) {
        self.scroll.update(dt);
        self.rotation_y = -self.scroll.offset() * (PI * 2.0);
        self.camera.update(self.motion.camera, dt);

        for segment in &mut self.segments {
            let active = segment.hovered.is_some();
            for (i, card) in segment.cards.iter_mut().enumerate() {
                let goal = card_targets(segment.hovered == Some(i), active);
                card.transform.position =
                    damp_vec3(card.transform.position, goal.position, self.motion.lift, dt);
                card.transform.scale =
                    damp_vec3(card.transform.scale, goal.scale, self.motion.scale, dt);
            }
        }

        let lit = self.hovered_asset.is_some();
        let mat = &mut self.spotlight.material;
        mat.opacity = damp(mat.opacity, if lit { 1.0 } else { 0.0 }, self.motion.opacity, dt);
        mat.zoom = damp(mat.zoom, 1.0, self.motion.zoom, dt);
        self.spotlight.title_visible = lit;
    }
}

fn random_title<R: Rng>(rng: &mut R) -> String {
    let first = TITLE_WORDS.choose(rng).copied().unwrap_or("untitled");
    let second = TITLE_WORDS.choose(rng).copied().unwrap_or("card");
    format!("{first} {second}")
}
