//! Horizontal filmstrip: focus-curve sizing, click-to-expand parting,
//! desaturation and tinting, the minimap, and selection consistency
//! under arbitrary event streams.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zoetrope::app::{PickTarget, UiEvent};
use zoetrope::assets::{AssetId, AssetLibrary};
use zoetrope::config::Config;
use zoetrope::scene::filmstrip::{pages, FilmstripScene};
use zoetrope::scene::{Scene, Viewport};

const DT: f32 = 1.0 / 60.0;

fn strip() -> FilmstripScene {
    let config = Config::default();
    let assets = AssetLibrary::placeholder(10).unwrap();
    FilmstripScene::new(
        &assets,
        &config.filmstrip,
        Viewport::new(config.viewport.width, config.viewport.height),
        config.motion,
    )
}

fn settle(scene: &mut FilmstripScene, frames: usize) {
    for _ in 0..frames {
        scene.update(DT);
    }
}

fn over(index: usize) -> UiEvent {
    UiEvent::PointerOver {
        target: PickTarget::Tile { index },
    }
}

fn click(index: usize) -> UiEvent {
    UiEvent::Click {
        target: Some(PickTarget::Tile { index }),
    }
}

fn click_miss() -> UiEvent {
    UiEvent::Click { target: None }
}

mod layout {
    use super::*;

    #[test]
    fn tiles_sit_at_their_pitch() {
        let scene = strip();
        assert_eq!(scene.tiles.len(), 10);
        for (i, tile) in scene.tiles.iter().enumerate() {
            assert!((tile.base_x - i as f32 * 0.85).abs() < 1e-5);
            assert_eq!(tile.transform.position.x, tile.base_x);
        }
        let first = &scene.tiles[0];
        assert!((first.transform.scale.x - 0.7).abs() < 1e-6);
        assert!((first.transform.scale.y - 4.0).abs() < 1e-6);
    }

    #[test]
    fn each_image_gets_one_tile() {
        let scene = strip();
        assert_eq!(scene.tiles.len(), 10);
        for (i, tile) in scene.tiles.iter().enumerate() {
            assert_eq!(tile.asset, AssetId(i));
        }
    }

    #[test]
    fn pages_grow_with_tile_count() {
        assert!((pages(15, 0.85, 10.0) - 2.19).abs() < 1e-5);
        assert!((pages(1, 0.85, 10.0) - 1.0).abs() < 1e-6);
        let scene = strip();
        assert!((scene.scroll.pages() - 1.765).abs() < 1e-5);
    }

    #[test]
    fn minimap_ticks_line_up_under_the_strip() {
        let scene = strip();
        assert_eq!(scene.ticks.len(), 10);
        for (i, tick) in scene.ticks.iter().enumerate() {
            assert!((tick.position.x - (i as f32 * 0.06 - 0.3)).abs() < 1e-5);
            assert!((tick.position.y + 3.15).abs() < 1e-5);
        }
    }
}

mod focus_curve {
    use super::*;

    #[test]
    fn leading_tiles_swell_at_rest() {
        let mut scene = strip();
        assert!((scene.focus(0) - 0.92388).abs() < 1e-4);
        assert!((scene.focus(1) - 0.38268).abs() < 1e-4);
        assert_eq!(scene.focus(7), 0.0);

        settle(&mut scene, 600);
        assert!((scene.tiles[0].transform.scale.y - 4.92388).abs() < 1e-3);
        assert!((scene.tiles[7].transform.scale.y - 4.0).abs() < 1e-3);
    }

    #[test]
    fn focus_follows_the_scroll() {
        let mut scene = strip();
        scene.scroll.snap_to(0.75);
        assert!((scene.focus(7) - 1.0).abs() < 1e-6);
        assert_eq!(scene.focus(0), 0.0);
    }

    #[test]
    fn distant_tiles_fully_desaturate() {
        let mut scene = strip();
        settle(&mut scene, 600);
        assert!((scene.tiles[7].material.grayscale - 1.0).abs() < 1e-3);
    }

    #[test]
    fn focused_tiles_keep_most_color() {
        let mut scene = strip();
        settle(&mut scene, 600);
        let expected = 1.0 - 0.92388f32;
        assert!((scene.tiles[0].material.grayscale - expected).abs() < 1e-3);
    }
}

mod expand {
    use super::*;

    #[test]
    fn click_expands_to_full_size() {
        let mut scene = strip();
        assert!(scene.handle_event(&click(7)));
        assert_eq!(scene.interaction.clicked(), Some(7));
        settle(&mut scene, 600);
        let tile = &scene.tiles[7];
        assert!((tile.transform.scale.x - 4.7).abs() < 1e-3);
        assert!((tile.transform.scale.y - 5.0).abs() < 1e-3);
    }

    #[test]
    fn every_neighbor_parts_by_the_same_two_units() {
        let mut scene = strip();
        scene.handle_event(&click(7));
        settle(&mut scene, 900);
        for (i, tile) in scene.tiles.iter().enumerate() {
            let expected = match i {
                i if i < 7 => tile.base_x - 2.0,
                i if i > 7 => tile.base_x + 2.0,
                _ => tile.base_x,
            };
            assert!(
                (tile.transform.position.x - expected).abs() < 1e-3,
                "tile {i}: {} vs {expected}",
                tile.transform.position.x
            );
        }
    }

    #[test]
    fn second_click_collapses() {
        let mut scene = strip();
        scene.handle_event(&click(7));
        settle(&mut scene, 300);
        scene.handle_event(&click(7));
        assert_eq!(scene.interaction.clicked(), None);
        settle(&mut scene, 900);
        let tile = &scene.tiles[7];
        assert!((tile.transform.scale.x - 0.7).abs() < 1e-3);
        assert!((tile.transform.position.x - tile.base_x).abs() < 1e-3);
    }

    #[test]
    fn clicking_elsewhere_moves_the_expansion() {
        let mut scene = strip();
        scene.handle_event(&click(7));
        scene.handle_event(&click(3));
        assert_eq!(scene.interaction.clicked(), Some(3));
        settle(&mut scene, 900);
        assert!((scene.tiles[3].transform.scale.x - 4.7).abs() < 1e-3);
        // tile 5 was left of 7 but is right of 3, so it now parts outward
        let five = &scene.tiles[5];
        assert!((five.transform.position.x - (five.base_x + 2.0)).abs() < 1e-3);
    }

    #[test]
    fn missed_click_clears_the_expansion() {
        let mut scene = strip();
        scene.handle_event(&click(7));
        settle(&mut scene, 120);
        assert!(scene.handle_event(&click_miss()));
        assert_eq!(scene.interaction.clicked(), None);
        settle(&mut scene, 900);
        for tile in &scene.tiles {
            assert!((tile.transform.position.x - tile.base_x).abs() < 1e-3);
        }
    }

    #[test]
    fn out_of_range_clicks_are_ignored() {
        let mut scene = strip();
        scene.handle_event(&click(7));
        assert!(!scene.handle_event(&click(99)));
        assert_eq!(scene.interaction.clicked(), Some(7));
    }
}

mod targets {
    use super::*;

    #[test]
    fn goals_move_ahead_of_the_eased_state() {
        let mut scene = strip();
        scene.handle_event(&click(7));
        let goal = scene.tile_targets(5).unwrap();
        assert!((goal.x - (scene.tiles[5].base_x - 2.0)).abs() < 1e-6);
        let right = scene.tile_targets(9).unwrap();
        assert!((right.x - (scene.tiles[9].base_x + 2.0)).abs() < 1e-6);
        assert!((scene.tile_targets(7).unwrap().scale.x - 4.7).abs() < 1e-6);
        // reading goals never moves anything; only update eases toward them
        assert_eq!(scene.tiles[5].transform.position.x, scene.tiles[5].base_x);
        assert_eq!(scene.tile_targets(5), Some(goal));
    }

    #[test]
    fn eased_state_converges_on_the_goals() {
        let mut scene = strip();
        scene.handle_event(&click(3));
        settle(&mut scene, 900);
        for i in 0..scene.tiles.len() {
            let goal = scene.tile_targets(i).unwrap();
            let tile = &scene.tiles[i];
            assert!((tile.transform.position.x - goal.x).abs() < 1e-3);
            assert!((tile.transform.scale.y - goal.scale.y).abs() < 1e-3);
            assert!((tile.material.grayscale - goal.grayscale).abs() < 1e-3);
        }
    }

    #[test]
    fn goals_stop_at_the_end_of_the_strip() {
        let scene = strip();
        assert!(scene.tile_targets(9).is_some());
        assert!(scene.tile_targets(10).is_none());
        assert!(scene.tile_targets(usize::MAX).is_none());
        // the focus curve stays total; far indexes just sit outside the bump
        assert_eq!(scene.focus(99), 0.0);
    }
}

mod hover_tint {
    use super::*;

    #[test]
    fn hovered_tile_brightens_fully() {
        let mut scene = strip();
        scene.handle_event(&over(5));
        settle(&mut scene, 900);
        let tile = &scene.tiles[5];
        assert!(tile.material.grayscale < 1e-3);
        assert!((tile.material.tint.r - 1.0).abs() < 1e-3);
        assert!((tile.material.tint.g - 1.0).abs() < 1e-3);
        assert!((tile.material.tint.b - 1.0).abs() < 1e-3);
    }

    #[test]
    fn unhovered_tiles_wear_the_muted_tint() {
        let mut scene = strip();
        settle(&mut scene, 900);
        let muted = 170.0 / 255.0;
        let tile = &scene.tiles[9];
        assert!((tile.material.tint.r - muted).abs() < 1e-3);
        assert!((tile.material.tint.g - muted).abs() < 1e-3);
        assert!((tile.material.tint.b - muted).abs() < 1e-3);
    }

    #[test]
    fn hover_fades_back_after_leaving() {
        let mut scene = strip();
        scene.handle_event(&over(5));
        settle(&mut scene, 300);
        scene.handle_event(&UiEvent::PointerOut);
        settle(&mut scene, 900);
        let muted = 170.0 / 255.0;
        assert!((scene.tiles[5].material.tint.r - muted).abs() < 1e-3);
    }

    #[test]
    fn clicked_tile_stays_bright_without_hover() {
        let mut scene = strip();
        scene.handle_event(&click(5));
        scene.handle_event(&UiEvent::PointerOut);
        settle(&mut scene, 900);
        let tile = &scene.tiles[5];
        assert!(tile.material.grayscale < 1e-3);
        assert!((tile.material.tint.r - 1.0).abs() < 1e-3);
    }
}

mod minimap {
    use super::*;

    #[test]
    fn ticks_echo_the_focus_curve() {
        let mut scene = strip();
        assert_eq!(scene.ticks[0].scale_y, 1.0);
        settle(&mut scene, 900);
        let expected = 0.15 + scene.focus(0) / 6.0;
        assert!((scene.ticks[0].scale_y - expected).abs() < 1e-3);
        assert!((scene.ticks[7].scale_y - 0.15).abs() < 1e-3);
    }

    #[test]
    fn ticks_travel_with_the_focus() {
        let mut scene = strip();
        scene.scroll.snap_to(0.75);
        settle(&mut scene, 900);
        assert!((scene.ticks[7].scale_y - (0.15 + 1.0 / 6.0)).abs() < 1e-3);
        assert!((scene.ticks[0].scale_y - 0.15).abs() < 1e-3);
    }
}

mod selection_consistency {
    use super::*;

    /// Replays a random pointer stream against a shadow model of the
    /// single-selection rules and checks the scene agrees after every event.
    #[test]
    fn random_event_storm_keeps_one_selection() {
        let mut scene = strip();
        let mut rng = StdRng::seed_from_u64(42);
        let mut expected_hovered: Option<usize> = None;
        let mut expected_clicked: Option<usize> = None;

        for step in 0..2000 {
            match rng.gen_range(0..5) {
                0 => {
                    let index = rng.gen_range(0..10);
                    scene.handle_event(&over(index));
                    expected_hovered = Some(index);
                }
                1 => {
                    scene.handle_event(&UiEvent::PointerOut);
                    expected_hovered = None;
                }
                2 => {
                    let index = rng.gen_range(0..10);
                    scene.handle_event(&click(index));
                    expected_clicked = if expected_clicked == Some(index) {
                        None
                    } else {
                        Some(index)
                    };
                }
                3 => {
                    scene.handle_event(&click_miss());
                    expected_clicked = None;
                }
                _ => {
                    scene.handle_event(&UiEvent::Scroll {
                        delta: rng.gen_range(-0.2..0.2),
                    });
                }
            }
            if step % 7 == 0 {
                scene.update(DT);
            }
            assert_eq!(scene.interaction.hovered(), expected_hovered, "step {step}");
            assert_eq!(scene.interaction.clicked(), expected_clicked, "step {step}");
            if let Some(index) = scene.interaction.clicked() {
                assert!(index < scene.tiles.len());
            }
        }
    }
}
