use raylib::prelude::*;
use crate::process_events::KeySet;
use crate::{HEIGHT, WIDTH};

pub struct Player {
    pub pos: Vector2,
    pub speed: f32,
    pub radius: f32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vector2::new(WIDTH / 2.0, HEIGHT / 2.0), // centro de la ventana
            speed: 220.0,
            radius: 12.0,
        }
    }

    /// Avanza según las teclas sostenidas y acota la posición al interior
    /// de la ventana (margen = radio en los cuatro lados).
    /// La diagonal va sin normalizar: más rápida que los ejes, a propósito.
    pub fn update(&mut self, dt: f32, keys: &KeySet) {
        use KeyboardKey::*;

        let mut vx = 0.0;
        if keys.is_down(KEY_RIGHT) || keys.is_down(KEY_D) { vx += 1.0; }
        if keys.is_down(KEY_LEFT)  || keys.is_down(KEY_A) { vx -= 1.0; }

        let mut vy = 0.0;
        if keys.is_down(KEY_DOWN)  || keys.is_down(KEY_S) { vy += 1.0; }
        if keys.is_down(KEY_UP)    || keys.is_down(KEY_W) { vy -= 1.0; } // en pantalla y crece hacia abajo

        self.pos.x = (self.pos.x + vx * self.speed * dt).clamp(self.radius, WIDTH - self.radius);
        self.pos.y = (self.pos.y + vy * self.speed * dt).clamp(self.radius, HEIGHT - self.radius);
    }
}
