// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Bouncing balls in a box
//!
//! Spawns a handful of balls with seeded random velocities, each carrying a
//! child label that follows it through the scene graph. Every frame the
//! balls are updated, bounced off the walls and rendered to a recording
//! surface; a summary of positions and draw calls is printed periodically.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example bouncing
//! ```
//!
//! With a different seed or frame count:
//! ```bash
//! cargo run --example bouncing -- --seed arcade --frames 300
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use kinetic2d::core::Core;
use kinetic2d::events::{EventBus, INIT};
use kinetic2d::math::helpers;
use kinetic2d::render::{RecordingContext, RenderContext, SharedContext};
use kinetic2d::scene::{GameObject, GameObjectConfig, ObjectId, Scene};

const WIDTH: f64 = 320.0;
const HEIGHT: f64 = 240.0;
const BALL_SIZE: f64 = 16.0;
const BALL_COUNT: usize = 5;

/// Demo configuration
struct DemoConfig {
    seed: String,
    frames: u32,
    report_interval: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            seed: "kinetic".to_string(),
            frames: 120,
            report_interval: 30,
        }
    }
}

// Reflect velocity off the box walls, keeping the ball inside
fn bounce(ball: &mut GameObject, dt: f64) {
    ball.advance(dt);

    let half = BALL_SIZE / 2.0;
    if ball.x() < half || ball.x() > WIDTH - half {
        let dx = ball.body().dx();
        ball.body_mut().set_dx(-dx);
        ball.set_x(helpers::clamp(half, WIDTH - half, ball.x()));
    }
    if ball.y() < half || ball.y() > HEIGHT - half {
        let dy = ball.body().dy();
        ball.body_mut().set_dy(-dy);
        ball.set_y(helpers::clamp(half, HEIGHT - half, ball.y()));
    }
}

fn draw_ball(ball: &GameObject, surface: &mut dyn RenderContext) {
    surface.begin_path();
    surface.arc(
        ball.width() / 2.0,
        ball.height() / 2.0,
        ball.width() / 2.0,
        0.0,
        std::f64::consts::TAU,
        false,
    );
    surface.fill();
}

fn spawn_balls(scene: &mut Scene, config: &DemoConfig) -> Vec<ObjectId> {
    let mut rng = helpers::seed_rand(&config.seed);
    let mut balls = Vec::with_capacity(BALL_COUNT);

    for i in 0..BALL_COUNT {
        let label = scene.spawn(
            GameObjectConfig::new(24.0, 8.0)
                .at(0.0, -BALL_SIZE)
                .with_anchor(0.5, 1.0)
                .with_opacity(0.8)
                .with_render(move |label: &GameObject, surface: &mut dyn RenderContext| {
                    surface.fill_text(&format!("#{}", i), 0.0, label.height(), None);
                }),
        );

        let x = f64::from(helpers::rand_int(20, WIDTH as i32 - 20, &mut rng));
        let y = f64::from(helpers::rand_int(20, HEIGHT as i32 - 20, &mut rng));
        let dx = f64::from(helpers::rand_int(-3, 4, &mut rng));
        let dy = f64::from(helpers::rand_int(-3, 4, &mut rng));

        let ball = scene.spawn(
            GameObjectConfig::new(BALL_SIZE, BALL_SIZE)
                .at(x, y)
                .with_velocity(dx, dy)
                .with_acceleration(0.0, 0.1)
                .with_anchor(0.5, 0.5)
                .with_update(bounce)
                .with_render(draw_ball)
                .with_children(vec![label]),
        );
        balls.push(ball);
    }

    balls
}

fn main() {
    println!("Kinetic2D - Bouncing Balls Example");
    println!("==================================\n");

    // Parse command line arguments (simple)
    let args: Vec<String> = std::env::args().collect();
    let mut config = DemoConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].clone();
                    i += 2;
                } else {
                    eprintln!("Error: --seed requires an argument");
                    std::process::exit(1);
                }
            }
            "--frames" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<u32>() {
                        Ok(value) => config.frames = value,
                        Err(_) => {
                            eprintln!("Warning: Invalid frame count '{}', using default 120", args[i + 1]);
                        }
                    }
                    i += 2;
                } else {
                    eprintln!("Error: --frames requires an argument");
                    std::process::exit(1);
                }
            }
            _ => {
                i += 1;
            }
        }
    }

    println!("Configuration:");
    println!("  Seed: {}", config.seed);
    println!("  Frames: {}", config.frames);
    println!("  Box: {} x {}", WIDTH, HEIGHT);
    println!();

    let mut bus = EventBus::new();
    bus.on(INIT, |_| println!("Received '{}' event", INIT));

    let recorder = Rc::new(RefCell::new(RecordingContext::new()));
    let context: SharedContext = recorder.clone();
    let core = Core::new(Some(context), &mut bus);

    let mut scene = core.scene();
    let balls = spawn_balls(&mut scene, &config);
    println!("Spawned {} balls ({} objects total)\n", balls.len(), scene.len());

    let mut draw_calls = 0;
    for frame in 1..=config.frames {
        scene.update_roots(0.0);
        scene.render_roots();
        draw_calls += recorder.borrow_mut().take_commands().len();

        if frame % config.report_interval == 0 {
            println!("Frame {}:", frame);
            for (index, ball) in balls.iter().enumerate() {
                let Some(object) = scene.get(*ball) else {
                    continue;
                };
                let label_world = scene
                    .children(*ball)
                    .first()
                    .and_then(|label| scene.get(*label))
                    .map(|label| *label.world());
                println!(
                    "  Ball #{}: pos=({:7.2}, {:7.2}) vel=({:5.2}, {:5.2}) label world=({:7.2}, {:7.2})",
                    index,
                    object.x(),
                    object.y(),
                    object.body().dx(),
                    object.body().dy(),
                    label_world.map_or(f64::NAN, |w| w.x),
                    label_world.map_or(f64::NAN, |w| w.y),
                );
            }
            println!();
        }
    }

    println!("Summary:");
    println!("  Frames rendered: {}", config.frames);
    println!("  Draw calls issued: {}", draw_calls);
    println!("  Surface balanced: {}", recorder.borrow().depth() == 0);
}
