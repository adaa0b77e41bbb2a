//! Interactive shell: window, input polling, and the per-frame loop.
//! Each frame applies queued input to the camera, re-renders the whole
//! image, and blits it; nothing else survives between frames.

use std::time::Instant;

use anyhow::Context;
use log::info;
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

use crate::{
    algebra::Vec3, camera::Camera, framebuffer::Framebuffer, renderer, scene::Scene,
};

pub const WIDTH: usize = 1280;
pub const HEIGHT: usize = 720;

const MOVE_SPEED: f32 = 0.1;
const ROT_SPEED: f32 = 0.05;
/// Radians per pixel of mouse travel.
const MOUSE_SENSITIVITY: f32 = 0.002;

/// Frame counter owned by the loop; reports a once-per-second average.
struct FpsCounter {
    frames: u32,
    since: Instant,
}

impl FpsCounter {
    fn new() -> Self {
        Self { frames: 0, since: Instant::now() }
    }

    fn tick(&mut self) {
        self.frames += 1;
        let elapsed = self.since.elapsed().as_secs_f32();
        if elapsed >= 1.0 {
            let fps = self.frames as f32 / elapsed;
            info!("fps: {:.2} | frame time: {:.2} ms", fps, 1000.0 / fps);
            self.frames = 0;
            self.since = Instant::now();
        }
    }
}

pub fn run(scene: &Scene) -> anyhow::Result<()> {
    let mut window = Window::new("rayview", WIDTH, HEIGHT, WindowOptions::default())
        .context("creating window")?;

    let mut frame = Framebuffer::new(WIDTH, HEIGHT);
    let mut surface = vec![0u32; WIDTH * HEIGHT];
    let mut camera = Camera::new(Vec3(0.0, 2.0, 5.0));
    let mut fps = FpsCounter::new();
    let mut last_mouse: Option<(f32, f32)> = None;

    info!("controls: W/S forward/back, A/D strafe, Q/E down/up, arrows rotate");
    info!("          hold right mouse button to look around, Esc quits");

    while window.is_open() && !window.is_key_down(Key::Escape) {
        apply_input(&window, &mut camera, &mut last_mouse);

        renderer::render(&mut frame, &scene.objects, &camera);
        frame.write_argb(&mut surface);
        window
            .update_with_buffer(&surface, WIDTH, HEIGHT)
            .context("presenting frame")?;

        fps.tick();
    }

    Ok(())
}

fn apply_input(window: &Window, camera: &mut Camera, last_mouse: &mut Option<(f32, f32)>) {
    if window.is_key_down(Key::W) {
        camera.translate(camera.forward, MOVE_SPEED);
    }
    if window.is_key_down(Key::S) {
        camera.translate(camera.forward, -MOVE_SPEED);
    }
    if window.is_key_down(Key::A) {
        camera.translate(camera.right, -MOVE_SPEED);
    }
    if window.is_key_down(Key::D) {
        camera.translate(camera.right, MOVE_SPEED);
    }
    if window.is_key_down(Key::Q) {
        camera.translate(camera.up, -MOVE_SPEED);
    }
    if window.is_key_down(Key::E) {
        camera.translate(camera.up, MOVE_SPEED);
    }

    if window.is_key_down(Key::Left) {
        camera.rotate(0.0, -ROT_SPEED);
    }
    if window.is_key_down(Key::Right) {
        camera.rotate(0.0, ROT_SPEED);
    }
    if window.is_key_down(Key::Up) {
        camera.rotate(ROT_SPEED, 0.0);
    }
    if window.is_key_down(Key::Down) {
        camera.rotate(-ROT_SPEED, 0.0);
    }

    // Mouse look while the right button is held. minifb has no relative
    // mouse mode, so rotation comes from position deltas.
    if window.get_mouse_down(MouseButton::Right) {
        if let Some((x, y)) = window.get_mouse_pos(MouseMode::Pass) {
            if let Some((px, py)) = *last_mouse {
                camera.rotate(
                    -(y - py) * MOUSE_SENSITIVITY,
                    (x - px) * MOUSE_SENSITIVITY,
                );
            }
            *last_mouse = Some((x, y));
        }
    } else {
        *last_mouse = None;
    }
}
