//! Input side of the driver: keysym tables, keymap construction, and
//! the keyboard and pointer protocol translators.

pub mod keyboard;
pub mod keymap;
pub mod keymaps;
pub mod keysyms;
pub mod mouse;

pub use keyboard::Keyboard;
pub use keymap::{Keymap, KEYMAP_LEN, KEYMAP_WIDTH};
pub use keymaps::KeyboardFamily;
pub use mouse::{Pointer, PointerStage, PointerState};
