//! End-to-end tests over the device-independent layers: keymap
//! construction from the family tables, shadow rotation, and the
//! pointer state machine feeding the event queue.

use wsfb::events::{ButtonMask, EventQueue, EventSink, InputEvent, KEY_PRESS, KEY_RELEASE};
use wsfb::fb::shadow::ShadowUpdate;
use wsfb::fb::Rotation;
use wsfb::input::keymap::Keymap;
use wsfb::input::keymaps::KeyboardFamily;
use wsfb::input::keysyms::*;
use wsfb::input::mouse::PointerState;
use wsfb::dev::wsio::{
    WsconsEvent, WSCONS_EVENT_MOUSE_DELTA_X, WSCONS_EVENT_MOUSE_DELTA_Y,
    WSCONS_EVENT_MOUSE_DOWN, WSCONS_EVENT_MOUSE_UP,
};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn every_family_builds_a_usable_keymap() {
    init_logs();
    for family in [
        KeyboardFamily::PcXt,
        KeyboardFamily::Usb,
        KeyboardFamily::Adb,
        KeyboardFamily::Amiga,
        KeyboardFamily::Lk201,
        KeyboardFamily::Sun,
    ] {
        let map = Keymap::from_table(family.table());
        assert!(
            map.min_code() <= map.max_code(),
            "{:?} table maps no scancodes",
            family
        );
        // every family has a Return key somewhere
        let has_return = (0..map.len()).any(|code| {
            map.syms(code)
                .map(|row| row.contains(&KS_RETURN))
                .unwrap_or(false)
        });
        assert!(has_return, "{:?} table has no Return key", family);
    }
}

#[test]
fn shifted_slots_never_duplicate_the_base() {
    for family in [
        KeyboardFamily::PcXt,
        KeyboardFamily::Usb,
        KeyboardFamily::Adb,
        KeyboardFamily::Amiga,
        KeyboardFamily::Lk201,
        KeyboardFamily::Sun,
    ] {
        let map = Keymap::from_table(family.table());
        for code in 0..map.len() {
            let row = map.syms(code).unwrap();
            if row[0] != KS_NONE && row[1] != KS_NONE {
                assert_ne!(row[0], row[1], "{:?} code {}", family, code);
            }
        }
    }
}

#[test]
fn a_full_drag_through_the_event_queue() {
    let mut state = PointerState::new();
    let mut q = EventQueue::new();

    state.record(&WsconsEvent::new(WSCONS_EVENT_MOUSE_DOWN, 0), &mut q);
    state.record(&WsconsEvent::new(WSCONS_EVENT_MOUSE_DELTA_X, 10), &mut q);
    state.record(&WsconsEvent::new(WSCONS_EVENT_MOUSE_DELTA_Y, 4), &mut q);
    state.record(&WsconsEvent::new(WSCONS_EVENT_MOUSE_UP, 0), &mut q);

    let events: Vec<_> = q.drain().collect();
    assert_eq!(
        events,
        vec![
            InputEvent::Mouse {
                buttons: ButtonMask::BUTTON_1,
                dx: 0,
                dy: 0
            },
            InputEvent::Mouse {
                buttons: ButtonMask::BUTTON_1,
                dx: 10,
                dy: 0
            },
            InputEvent::Mouse {
                buttons: ButtonMask::BUTTON_1,
                dx: 0,
                dy: -4
            },
            InputEvent::Mouse {
                buttons: ButtonMask::empty(),
                dx: 0,
                dy: 0
            },
        ]
    );
}

#[test]
fn key_flags_round_trip_through_a_custom_sink() {
    struct Latest(Option<(u32, u8)>);
    impl EventSink for Latest {
        fn key(&mut self, scancode: u32, flags: u8) {
            self.0 = Some((scancode, flags));
        }
        fn mouse(&mut self, _buttons: ButtonMask, _dx: i32, _dy: i32) {}
    }
    let mut sink = Latest(None);
    sink.key(0x1c, KEY_PRESS);
    assert_eq!(sink.0, Some((0x1c, KEY_PRESS)));
    sink.key(0x1c, KEY_RELEASE);
    assert_eq!(sink.0, Some((0x1c, KEY_RELEASE)));
}

#[test]
fn rotated_flush_lands_every_pixel_once() {
    // 6x4 8bpp logical surface with distinct pixel values
    let (w, h) = (6u32, 4u32);
    let shadow: Vec<u8> = (0..24).collect();
    for rotation in [Rotation::ROTATE_90, Rotation::ROTATE_180, Rotation::ROTATE_270] {
        let (dw, dh) = if rotation.is_portrait() { (h, w) } else { (w, h) };
        let mut fb = vec![0xFFu8; (dw * dh) as usize];
        let update = ShadowUpdate::select(rotation, 8);
        update.run(rotation, 8, &shadow, w as usize, &mut fb, dw as usize, w, h);
        let mut seen = fb.clone();
        seen.sort_unstable();
        let expected: Vec<u8> = (0..24).collect();
        assert_eq!(seen, expected, "{:?}", rotation);
    }
}
