use toybox_engine::coords::{Rect, Vec2};
use toybox_engine::paint::Color;

use crate::physics::PhysicsConfig;

/// Everything the jumper needs to set up its window and world.
#[derive(Debug, Clone)]
pub struct JumperConfig {
    pub title: String,
    pub world_width: f32,
    pub world_height: f32,
    pub target_fps: u32,

    pub physics: PhysicsConfig,

    pub actor_size: Vec2,
    pub actor_start: Vec2,
    pub ground: Rect,

    pub sky_color: Color,
    pub actor_color: Color,
    pub ground_color: Color,
}

impl Default for JumperConfig {
    fn default() -> Self {
        let world_width = 800.0;
        let world_height = 600.0;
        let ground_height = 50.0;
        let actor_size = Vec2::new(50.0, 50.0);

        Self {
            title: "Jumping Square".to_string(),
            world_width,
            world_height,
            target_fps: 60,
            physics: PhysicsConfig {
                world_width,
                ..PhysicsConfig::default()
            },
            actor_size,
            // Resting on the ground's top edge.
            actor_start: Vec2::new(100.0, world_height - ground_height - actor_size.y),
            ground: Rect::new(0.0, world_height - ground_height, world_width, ground_height),
            sky_color: Color::rgb(107, 140, 255),
            actor_color: Color::rgb(255, 0, 0),
            ground_color: Color::rgb(139, 69, 19),
        }
    }
}
