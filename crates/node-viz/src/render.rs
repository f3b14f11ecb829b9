//! Draws the simulation's drawable state with nannou.
//!
//! The core works in top-left-origin screen space; everything here maps
//! those coordinates into nannou's centered, y-up space and turns the
//! drawable state (particles, connections, stars, flashes) into primitive
//! draw calls. Nothing flows back into the simulation.

use nannou::prelude::*;
use node_viz_core::{ConnectionTier, FadingLifetime, Simulation};

/// Base connection line thickness; strong-tier lines double it.
const LINE_THICKNESS: f32 = 5.0;
/// Dim grey for normal-tier connection lines.
const NORMAL_LINE_LEVEL: f32 = 69.0 / 255.0;
/// Near-black blue background.
const BACKGROUND: (f32, f32, f32) = (15.0 / 255.0, 15.0 / 255.0, 20.0 / 255.0);

pub fn draw_frame(draw: &Draw, bounds: Rect, sim: &Simulation) {
    draw.background()
        .color(rgb(BACKGROUND.0, BACKGROUND.1, BACKGROUND.2));

    let config = sim.config();
    let to_screen = |position: glam::Vec2| -> Point2 {
        pt2(
            bounds.x() + position.x - config.width / 2.0,
            bounds.y() + config.height / 2.0 - position.y,
        )
    };

    for particle in sim.particles() {
        let color = particle.color;
        draw.ellipse()
            .xy(to_screen(particle.position))
            .radius(particle.radius)
            .color(rgb(color.r, color.g, color.b));
    }

    let particles = sim.particles();
    for connection in sim.connections() {
        let start = to_screen(particles[connection.a].position);
        let end = to_screen(particles[connection.b].position);
        match connection.tier {
            ConnectionTier::Strong => {
                draw.line()
                    .start(start)
                    .end(end)
                    .weight(LINE_THICKNESS * 2.0)
                    .color(rgb(1.0, 1.0, 1.0));
            }
            ConnectionTier::Normal => {
                draw.line()
                    .start(start)
                    .end(end)
                    .weight(LINE_THICKNESS)
                    .color(rgb(NORMAL_LINE_LEVEL, NORMAL_LINE_LEVEL, NORMAL_LINE_LEVEL));
            }
        }
    }

    let star_config = &config.star;
    for star in sim.stars().stars() {
        let alpha = star.alpha();
        if alpha <= 0.0 {
            continue;
        }
        let points: Vec<Point2> = star
            .vertices(star_config)
            .into_iter()
            .map(to_screen)
            .collect();
        draw.polygon()
            .points(points)
            .color(rgba(1.0, 1.0, 1.0, alpha));
    }

    // Flashes go down last, each as its own translucent layer over the frame.
    for flash in sim.flashes().flashes() {
        draw.ellipse()
            .xy(to_screen(flash.position))
            .radius(flash.radius)
            .color(rgba(1.0, 1.0, 1.0, flash.alpha()));
    }
}
