use crate::assets::AssetLibrary;
use crate::config::Config;
use crate::math::Vec2;
use crate::scene::carousel::CarouselScene;
use crate::scene::filmstrip::FilmstripScene;
use crate::scene::{Scene, Viewport};
use anyhow::Result;
use log::info;
use time::{Date, OffsetDateTime};

/// What the pointer is resting on, as reported by the host's hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickTarget {
    /// A card on the carousel ring: segment index plus card index within it.
    Card { segment: usize, card: usize },
    /// A tile on the filmstrip.
    Tile { index: usize },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    PointerOver { target: PickTarget },
    PointerOut,
    /// Pointer position in normalized device coordinates, both axes [-1, 1].
    PointerMove { ndc: Vec2 },
    /// Click on a target, or `None` when the click hit empty space.
    Click { target: Option<PickTarget> },
    /// Scroll input normalized so 1.0 travels one full run of the track.
    Scroll { delta: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    CardsCircle,
    HorizontalTiles,
}

impl Page {
    /// Resolves a route path. The bare root redirects to the carousel.
    pub fn from_path(path: &str) -> Option<Page> {
        let trimmed = path.trim_start_matches('/');
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("cards-circle") {
            Some(Page::CardsCircle)
        } else if trimmed.eq_ignore_ascii_case("horizontal-tiles") {
            Some(Page::HorizontalTiles)
        } else {
            None
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Page::CardsCircle => "/cards-circle",
            Page::HorizontalTiles => "/horizontal-tiles",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Page::CardsCircle => "scroll up and down",
            Page::HorizontalTiles => "scroll left and right",
        }
    }
}

/// The 2D chrome drawn over every scene: today's date and a scroll hint.
#[derive(Debug, Clone)]
pub struct Overlay {
    pub date: String,
    pub hint: &'static str,
}

impl Overlay {
    fn for_page(page: Page) -> Self {
        Self {
            date: format_date(today()),
            hint: page.hint(),
        }
    }
}

/// `DD/MM/YYYY`, the format the overlay prints.
pub fn format_date(date: Date) -> String {
    format!(
        "{:02}/{:02}/{:04}",
        date.day(),
        u8::from(date.month()),
        date.year()
    )
}

fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

pub enum ActiveScene {
    Carousel(CarouselScene),
    Filmstrip(FilmstripScene),
}

impl ActiveScene {
    pub fn as_scene(&self) -> &dyn Scene {
        match self {
            ActiveScene::Carousel(scene) => scene,
            ActiveScene::Filmstrip(scene) => scene,
        }
    }

    pub fn as_scene_mut(&mut self) -> &mut dyn Scene {
        match self {
            ActiveScene::Carousel(scene) => scene,
            ActiveScene::Filmstrip(scene) => scene,
        }
    }
}

pub struct App {
    pub config: Config,
    pub assets: AssetLibrary,
    pub page: Page,
    pub scene: ActiveScene,
    pub overlay: Overlay,
    pub time: f32,
}

impl App {
    pub fn new(config: Config, assets: AssetLibrary, page: Page) -> Self {
        let scene = mount_scene(&config, &assets, page);
        info!("mounted {}", scene.as_scene().name());
        Self {
            config,
            assets,
            page,
            scene,
            overlay: Overlay::for_page(page),
            time: 0.0,
        }
    }

    /// Switches pages, tearing down the old scene and mounting a fresh one.
    /// Navigating to the current page leaves the scene untouched.
    pub fn navigate(&mut self, path: &str) -> Result<()> {
        let page = Page::from_path(path)
            .ok_or_else(|| anyhow::anyhow!("No route matches {path:?}"))?;
        if page != self.page {
            self.page = page;
            self.scene = mount_scene(&self.config, &self.assets, page);
            self.overlay = Overlay::for_page(page);
            info!("navigated to {}", self.scene.as_scene().name());
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: UiEvent) {
        self.scene.as_scene_mut().handle_event(&event);
    }

    pub fn update(&mut self, dt: f32) {
        self.time += dt;
        self.scene.as_scene_mut().update(dt);
    }
}

fn mount_scene(config: &Config, assets: &AssetLibrary, page: Page) -> ActiveScene {
    match page {
        Page::CardsCircle => {
            ActiveScene::Carousel(CarouselScene::new(assets, &config.carousel, config.motion))
        }
        Page::HorizontalTiles => ActiveScene::Filmstrip(FilmstripScene::new(
            assets,
            &config.filmstrip,
            Viewport::new(config.viewport.width, config.viewport.height),
            config.motion,
        )),
    }
}
