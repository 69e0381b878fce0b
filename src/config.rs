use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_viewport")]
    pub viewport: ViewportSize,

    #[serde(default = "default_motion")]
    pub motion: MotionConfig,

    #[serde(default = "default_carousel")]
    pub carousel: CarouselConfig,

    #[serde(default = "default_filmstrip")]
    pub filmstrip: FilmstripConfig,

    #[serde(default = "default_fps_cap")]
    pub fps_cap: u32,
}

/// Visible extent at the content plane, world units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

/// Smoothing times, seconds, one per animated property. Smaller chases harder.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MotionConfig {
    pub lift: f32,
    pub scale: f32,
    pub slide: f32,
    pub opacity: f32,
    pub zoom: f32,
    pub grayscale: f32,
    pub tint: f32,
    /// Tint eases out slower while the pointer is still on the tile.
    pub tint_hovered: f32,
    pub camera: f32,
    pub minimap: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    pub radius: f32,
    /// Card density along each arc; slots per radian of span.
    pub cards_per_radian: f32,
    pub pages: f32,
    pub scroll_damping: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilmstripConfig {
    pub tile_width: f32,
    pub tile_height: f32,
    pub gap: f32,
    pub scroll_damping: f32,
    /// Hex color for tiles outside the focus area.
    pub muted_tint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            motion: default_motion(),
            carousel: default_carousel(),
            filmstrip: default_filmstrip(),
            fps_cap: default_fps_cap(),
        }
    }
}

fn default_viewport() -> ViewportSize {
    ViewportSize {
        width: 10.0,
        height: 7.5,
    }
}

fn default_motion() -> MotionConfig {
    MotionConfig {
        lift: 0.1,
        scale: 0.15,
        slide: 0.15,
        opacity: 0.3,
        zoom: 0.5,
        grayscale: 0.15,
        tint: 0.15,
        tint_hovered: 0.3,
        camera: 0.3,
        minimap: 0.15,
    }
}

fn default_carousel() -> CarouselConfig {
    CarouselConfig {
        radius: 5.25,
        cards_per_radian: 22.0,
        pages: 4.0,
        scroll_damping: 0.25,
    }
}

fn default_filmstrip() -> FilmstripConfig {
    FilmstripConfig {
        tile_width: 0.7,
        tile_height: 4.0,
        gap: 0.15,
        scroll_damping: 0.1,
        muted_tint: "#aaa".to_string(),
    }
}

fn default_fps_cap() -> u32 {
    60
}

impl Config {
    /// Fixed timestep of the frame loop, derived from the fps cap.
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.fps_cap.max(1) as f32
    }

    pub fn load() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        let config_path = config_dir.join("zoetrope").join("config.toml");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        let config_dir = config_dir.join("zoetrope");
        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, contents)?;

        Ok(())
    }
}
