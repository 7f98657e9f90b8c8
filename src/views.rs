use raylib::prelude::*;

use crate::player::Player;
use crate::process_events::KeySet;
use crate::{HEIGHT, WIDTH};

/// Vista activa del programa: exactamente una a la vez.
/// Cambiar de vista reemplaza el valor completo, o sea que el estado
/// de la vista anterior se descarta (partida nueva en cada entrada).
pub enum View {
    Title(TitleView),
    Game(GameView),
}

impl View {
    pub fn update(&mut self, dt: f32) {
        if let View::Game(game) = self {
            game.update(dt);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        match self {
            View::Title(v) => v.draw(d),
            View::Game(v) => v.draw(d),
        }
    }

    /// Devuelve `Some(vista)` cuando la tecla provoca una transición.
    pub fn on_key_press(&mut self, key: KeyboardKey) -> Option<View> {
        match self {
            View::Title(v) => v.on_key_press(key),
            View::Game(v) => v.on_key_press(key),
        }
    }

    pub fn drop_released(&mut self, window: &RaylibHandle) {
        if let View::Game(game) = self {
            game.keys.drop_released(window);
        }
    }
}

// ---------- Pantalla de título ----------

pub struct TitleView;

impl TitleView {
    pub fn new() -> Self {
        TitleView
    }

    pub fn on_key_press(&mut self, key: KeyboardKey) -> Option<View> {
        if key == KeyboardKey::KEY_SPACE {
            log::info!("cambio de vista: titulo -> juego");
            return Some(View::Game(GameView::new()));
        }
        None
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        d.clear_background(Color::BLACK);
        draw_text_centered(d, "Arkos Inari", HEIGHT as i32 / 2 - 66, 36, Color::new(255, 191, 0, 255));
        draw_text_centered(d, "Press SPACE to begin", HEIGHT as i32 / 2 + 4, 16, Color::LIGHTGRAY);
    }
}

// ---------- Pantalla de juego ----------

pub struct GameView {
    pub player: Player,
    pub keys: KeySet,
}

impl GameView {
    pub fn new() -> Self {
        Self {
            player: Player::new(),
            keys: KeySet::new(),
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.player.update(dt, &self.keys);
    }

    pub fn on_key_press(&mut self, key: KeyboardKey) -> Option<View> {
        // La tecla queda registrada aunque sea ESC; la transición descarta todo igual
        self.keys.press(key);
        if key == KeyboardKey::KEY_ESCAPE {
            log::info!("cambio de vista: juego -> titulo");
            return Some(View::Title(TitleView::new()));
        }
        None
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        d.clear_background(Color::new(47, 79, 79, 255)); // dark slate gray

        d.draw_circle_v(self.player.pos, self.player.radius, Color::new(0, 255, 255, 255));
        d.draw_text(
            "Move: WASD/Arrows — ESC: Title",
            10,
            HEIGHT as i32 - 22,
            12,
            Color::LIGHTGRAY,
        );

        // FPS en la esquina superior izquierda
        let fps_now = d.get_fps();
        d.draw_text(&format!("FPS: {}", fps_now), 10, 10, 20, Color::WHITE);
    }
}

/// Texto centrado horizontalmente (con la fuente por defecto de raylib).
fn draw_text_centered(d: &mut RaylibDrawHandle, text: &str, y: i32, size: i32, color: Color) {
    let w = d.measure_text(text, size);
    d.draw_text(text, (WIDTH as i32 - w) / 2, y, size, color);
}
