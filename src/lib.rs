//! Scroll-driven 3D image-gallery engine, headless.
//!
//! Two scenes share one motion vocabulary: a circular carousel of seasonal
//! card arcs spun by an endless scroll track, and a horizontal filmstrip
//! whose tiles swell near a scroll-driven focus point and part around a
//! clicked tile. Every frame the scenes recompute layout targets from the
//! current scroll and pointer state, then ease all animated values toward
//! those targets with framerate-independent exponential damping. Rendering
//! is left to the host; this crate only produces transforms and materials.

pub mod app;
pub mod assets;
pub mod config;
pub mod math;
pub mod motion;
pub mod scene;
pub mod scroll;
