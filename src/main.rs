use anyhow::Result;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;
use zoetrope::app::{ActiveScene, App, Page, PickTarget, UiEvent};
use zoetrope::assets::AssetLibrary;
use zoetrope::config::Config;
use zoetrope::math::Vec2;

const SCROLL_DRIFT: f32 = 0.002;

/// Headless demo: mounts a page, feeds it a scripted stream of scroll and
/// pointer input, and logs scene state as it settles.
///
/// Usage: zoetrope [route] [frames] [image-dir]
fn main() -> Result<()> {
    env_logger::init();
    println!("Starting zoetrope...");

    let config = Config::load().unwrap_or_default();
    let frame_dt = config.frame_dt();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "/cards-circle".to_string());
    let frames: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(600);
    let assets = match args.next() {
        Some(dir) => AssetLibrary::scan_dir(Path::new(&dir))?,
        None => AssetLibrary::placeholder(10)?,
    };
    info!("{} images loaded", assets.len());

    let page = Page::from_path(&path)
        .ok_or_else(|| anyhow::anyhow!("No route matches {path:?}"))?;
    let mut app = App::new(config, assets, page);
    let mut rng = StdRng::seed_from_u64(7);

    for frame in 0..frames {
        // flip to the other page halfway through to exercise a remount
        if frame == frames / 2 && frames >= 120 {
            let next = match app.page {
                Page::CardsCircle => Page::HorizontalTiles,
                Page::HorizontalTiles => Page::CardsCircle,
            };
            app.navigate(next.path())?;
        }

        for event in scripted_events(&app, frame, &mut rng) {
            app.handle_event(event);
        }
        app.update(frame_dt);

        if frame % 30 == 0 {
            report(&app);
        }
    }

    println!("Done after {} frames ({:.1}s simulated)", frames, app.time);
    Ok(())
}

/// A plausible user: steady scrolling, a wandering pointer, and periodic
/// hovers and clicks on random items of whatever scene is mounted.
fn scripted_events(app: &App, frame: u32, rng: &mut StdRng) -> Vec<UiEvent> {
    let mut events = vec![UiEvent::Scroll { delta: SCROLL_DRIFT }];

    let t = app.time;
    events.push(UiEvent::PointerMove {
        ndc: Vec2::new((t * 0.5).sin() * 0.6, (t * 0.33).cos() * 0.4),
    });

    match frame % 180 {
        30 => {
            if let Some(target) = random_target(app, rng) {
                events.push(UiEvent::PointerOver { target });
            }
        }
        120 => events.push(UiEvent::PointerOut),
        150 => {
            // clicks only matter on the filmstrip; every third one misses
            if matches!(app.scene, ActiveScene::Filmstrip(_)) {
                let target = (frame % 540 != 150).then(|| random_target(app, rng)).flatten();
                events.push(UiEvent::Click { target });
            }
        }
        _ => {}
    }

    events
}

fn random_target(app: &App, rng: &mut StdRng) -> Option<PickTarget> {
    match &app.scene {
        ActiveScene::Carousel(scene) => {
            let segment = rng.gen_range(0..scene.segments.len());
            let cards = scene.segments[segment].cards.len();
            (cards > 0).then(|| PickTarget::Card {
                segment,
                card: rng.gen_range(0..cards),
            })
        }
        ActiveScene::Filmstrip(scene) => Some(PickTarget::Tile {
            index: rng.gen_range(0..scene.tiles.len()),
        }),
    }
}

fn report(app: &App) {
    match &app.scene {
        ActiveScene::Carousel(scene) => {
            info!(
                "t={:5.2}s yaw={:6.3} hovered={:?} spotlight opacity={:.2} zoom={:.2} title={:?}",
                app.time,
                scene.rotation_y,
                scene.hovered_asset(),
                scene.spotlight.material.opacity,
                scene.spotlight.material.zoom,
                scene.spotlight.title,
            );
        }
        ActiveScene::Filmstrip(scene) => {
            let tile = &scene.tiles[scene.tiles.len() / 2];
            info!(
                "t={:5.2}s offset={:.3} clicked={:?} mid tile scale=({:.2},{:.2}) gray={:.2}",
                app.time,
                scene.scroll.offset(),
                scene.interaction.clicked(),
                tile.transform.scale.x,
                tile.transform.scale.y,
                tile.material.grayscale,
            );
        }
    }
}
