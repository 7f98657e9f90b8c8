// main.rs
#![allow(unused_imports)]
#![allow(dead_code)]

mod player;
mod process_events;
mod views;

use raylib::prelude::*;
use process_events::process_events;
use views::{TitleView, View};

// Tamaño fijo de la ventana (coherente con los límites del jugador)
pub const WIDTH: f32 = 960.0;
pub const HEIGHT: f32 = 540.0;
pub const TITLE: &str = "Arkos Inari — Foxfire Trial";
pub const UPDATE_RATE: u32 = 120;

fn main() {
    env_logger::init();

    let (mut window, raylib_thread) = raylib::init()
        .size(WIDTH as i32, HEIGHT as i32)
        .title(TITLE)
        .build();

    // ✅ ESC vuelve al título, no cierra la ventana (raylib lo trae como exit key por defecto)
    window.set_exit_key(None);
    window.set_target_fps(UPDATE_RATE);

    log::info!(
        "ventana {}x{} lista, {} updates/s",
        WIDTH as i32,
        HEIGHT as i32,
        UPDATE_RATE
    );

    // Vista activa: arranca en el título
    let mut view = View::Title(TitleView::new());

    while !window.window_should_close() {
        // Entrada (key down / key up) hacia la vista activa; puede cambiar de vista
        process_events(&mut window, &mut view);

        // Avance por frame con el tiempo transcurrido
        let dt = window.get_frame_time();
        view.update(dt);

        {
            let mut d = window.begin_drawing(&raylib_thread);
            view.draw(&mut d);
        }
    }
}
