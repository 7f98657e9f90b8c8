use raylib::prelude::*;
use crate::views::View;

/// Conjunto de teclas sostenidas (key down sin su key up todavía).
pub struct KeySet {
    held: Vec<KeyboardKey>,
}

impl KeySet {
    pub fn new() -> Self {
        Self { held: Vec::new() }
    }

    pub fn press(&mut self, key: KeyboardKey) {
        if !self.held.contains(&key) {
            self.held.push(key);
        }
    }

    /// Soltar una tecla que nunca se presionó no hace nada.
    pub fn release(&mut self, key: KeyboardKey) {
        self.held.retain(|&h| h != key);
    }

    pub fn is_down(&self, key: KeyboardKey) -> bool {
        self.held.contains(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Quita las teclas que raylib reporta como soltadas este frame.
    pub fn drop_released(&mut self, window: &RaylibHandle) {
        self.held.retain(|&k| !window.is_key_released(k));
    }
}

/// Entrega los eventos de teclado del frame a la vista activa.
/// Un key down puede devolver una vista nueva; se reemplaza al instante,
/// así los eventos que queden en la cola llegan a la vista entrante.
pub fn process_events(window: &mut RaylibHandle, view: &mut View) {
    while let Some(key) = window.get_key_pressed() {
        if let Some(next) = view.on_key_press(key) {
            *view = next;
        }
    }
    view.drop_released(window);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_y_release() {
        let mut keys = KeySet::new();
        keys.press(KeyboardKey::KEY_W);
        assert!(keys.is_down(KeyboardKey::KEY_W));
        keys.release(KeyboardKey::KEY_W);
        assert!(!keys.is_down(KeyboardKey::KEY_W));
        assert!(keys.is_empty());
    }

    #[test]
    fn test_press_repetido_no_duplica() {
        let mut keys = KeySet::new();
        keys.press(KeyboardKey::KEY_D);
        keys.press(KeyboardKey::KEY_D);
        keys.release(KeyboardKey::KEY_D);
        assert!(!keys.is_down(KeyboardKey::KEY_D));
    }

    #[test]
    fn test_release_sin_press_es_noop() {
        let mut keys = KeySet::new();
        keys.release(KeyboardKey::KEY_Z);
        assert!(keys.is_empty());

        keys.press(KeyboardKey::KEY_A);
        keys.release(KeyboardKey::KEY_Z);
        assert!(keys.is_down(KeyboardKey::KEY_A));
    }

    #[test]
    fn test_varias_teclas_independientes() {
        let mut keys = KeySet::new();
        keys.press(KeyboardKey::KEY_A);
        keys.press(KeyboardKey::KEY_S);
        keys.release(KeyboardKey::KEY_A);
        assert!(!keys.is_down(KeyboardKey::KEY_A));
        assert!(keys.is_down(KeyboardKey::KEY_S));
    }
}
