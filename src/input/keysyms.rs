//! Keysym constants.
//!
//! Values follow the X11 keysym encoding: printable symbols carry their
//! Latin-1 code point, function and modifier keys live in the 0xffXX
//! block. Letter keysyms carry the lowercase code point; the shifted
//! slot is derived where a shifted pairing exists.

#![allow(dead_code)]

pub type Keysym = u32;

/// Empty keymap slot.
pub const KS_NONE: Keysym = 0;

// Printable symbols (Latin-1 code points)
pub const KS_SPACE: Keysym = 0x20;
pub const KS_EXCLAM: Keysym = 0x21;
pub const KS_QUOTEDBL: Keysym = 0x22;
pub const KS_NUMBERSIGN: Keysym = 0x23;
pub const KS_DOLLAR: Keysym = 0x24;
pub const KS_PERCENT: Keysym = 0x25;
pub const KS_AMPERSAND: Keysym = 0x26;
pub const KS_APOSTROPHE: Keysym = 0x27;
pub const KS_PARENLEFT: Keysym = 0x28;
pub const KS_PARENRIGHT: Keysym = 0x29;
pub const KS_ASTERISK: Keysym = 0x2a;
pub const KS_PLUS: Keysym = 0x2b;
pub const KS_COMMA: Keysym = 0x2c;
pub const KS_MINUS: Keysym = 0x2d;
pub const KS_PERIOD: Keysym = 0x2e;
pub const KS_SLASH: Keysym = 0x2f;
pub const KS_0: Keysym = 0x30;
pub const KS_1: Keysym = 0x31;
pub const KS_2: Keysym = 0x32;
pub const KS_3: Keysym = 0x33;
pub const KS_4: Keysym = 0x34;
pub const KS_5: Keysym = 0x35;
pub const KS_6: Keysym = 0x36;
pub const KS_7: Keysym = 0x37;
pub const KS_8: Keysym = 0x38;
pub const KS_9: Keysym = 0x39;
pub const KS_COLON: Keysym = 0x3a;
pub const KS_SEMICOLON: Keysym = 0x3b;
pub const KS_LESS: Keysym = 0x3c;
pub const KS_EQUAL: Keysym = 0x3d;
pub const KS_GREATER: Keysym = 0x3e;
pub const KS_QUESTION: Keysym = 0x3f;
pub const KS_AT: Keysym = 0x40;
pub const KS_BRACKETLEFT: Keysym = 0x5b;
pub const KS_BACKSLASH: Keysym = 0x5c;
pub const KS_BRACKETRIGHT: Keysym = 0x5d;
pub const KS_ASCIICIRCUM: Keysym = 0x5e;
pub const KS_UNDERSCORE: Keysym = 0x5f;
pub const KS_GRAVE: Keysym = 0x60;
pub const KS_A: Keysym = 0x61;
pub const KS_B: Keysym = 0x62;
pub const KS_C: Keysym = 0x63;
pub const KS_D: Keysym = 0x64;
pub const KS_E: Keysym = 0x65;
pub const KS_F: Keysym = 0x66;
pub const KS_G: Keysym = 0x67;
pub const KS_H: Keysym = 0x68;
pub const KS_I: Keysym = 0x69;
pub const KS_J: Keysym = 0x6a;
pub const KS_K: Keysym = 0x6b;
pub const KS_L: Keysym = 0x6c;
pub const KS_M: Keysym = 0x6d;
pub const KS_N: Keysym = 0x6e;
pub const KS_O: Keysym = 0x6f;
pub const KS_P: Keysym = 0x70;
pub const KS_Q: Keysym = 0x71;
pub const KS_R: Keysym = 0x72;
pub const KS_S: Keysym = 0x73;
pub const KS_T: Keysym = 0x74;
pub const KS_U: Keysym = 0x75;
pub const KS_V: Keysym = 0x76;
pub const KS_W: Keysym = 0x77;
pub const KS_X: Keysym = 0x78;
pub const KS_Y: Keysym = 0x79;
pub const KS_Z: Keysym = 0x7a;
pub const KS_BRACELEFT: Keysym = 0x7b;
pub const KS_BAR: Keysym = 0x7c;
pub const KS_BRACERIGHT: Keysym = 0x7d;
pub const KS_ASCIITILDE: Keysym = 0x7e;

// Function keys
pub const KS_BACKSPACE: Keysym = 0xff08;
pub const KS_TAB: Keysym = 0xff09;
pub const KS_LINEFEED: Keysym = 0xff0a;
pub const KS_RETURN: Keysym = 0xff0d;
pub const KS_PAUSE: Keysym = 0xff13;
pub const KS_SCROLL_LOCK: Keysym = 0xff14;
pub const KS_SYS_REQ: Keysym = 0xff15;
pub const KS_ESCAPE: Keysym = 0xff1b;
pub const KS_MULTI_KEY: Keysym = 0xff20;
pub const KS_HOME: Keysym = 0xff50;
pub const KS_LEFT: Keysym = 0xff51;
pub const KS_UP: Keysym = 0xff52;
pub const KS_RIGHT: Keysym = 0xff53;
pub const KS_DOWN: Keysym = 0xff54;
pub const KS_PRIOR: Keysym = 0xff55;
pub const KS_NEXT: Keysym = 0xff56;
pub const KS_END: Keysym = 0xff57;
pub const KS_SELECT: Keysym = 0xff60;
pub const KS_PRINT: Keysym = 0xff61;
pub const KS_EXECUTE: Keysym = 0xff62;
pub const KS_INSERT: Keysym = 0xff63;
pub const KS_UNDO: Keysym = 0xff65;
pub const KS_REDO: Keysym = 0xff66;
pub const KS_MENU: Keysym = 0xff67;
pub const KS_FIND: Keysym = 0xff68;
pub const KS_CANCEL: Keysym = 0xff69;
pub const KS_HELP: Keysym = 0xff6a;
pub const KS_MODE_SWITCH: Keysym = 0xff7e;
pub const KS_NUM_LOCK: Keysym = 0xff7f;

// Keypad
pub const KS_KP_ENTER: Keysym = 0xff8d;
pub const KS_KP_F1: Keysym = 0xff91;
pub const KS_KP_F2: Keysym = 0xff92;
pub const KS_KP_F3: Keysym = 0xff93;
pub const KS_KP_F4: Keysym = 0xff94;
pub const KS_KP_HOME: Keysym = 0xff95;
pub const KS_KP_LEFT: Keysym = 0xff96;
pub const KS_KP_UP: Keysym = 0xff97;
pub const KS_KP_RIGHT: Keysym = 0xff98;
pub const KS_KP_DOWN: Keysym = 0xff99;
pub const KS_KP_PRIOR: Keysym = 0xff9a;
pub const KS_KP_NEXT: Keysym = 0xff9b;
pub const KS_KP_END: Keysym = 0xff9c;
pub const KS_KP_BEGIN: Keysym = 0xff9d;
pub const KS_KP_INSERT: Keysym = 0xff9e;
pub const KS_KP_DELETE: Keysym = 0xff9f;
pub const KS_KP_MULTIPLY: Keysym = 0xffaa;
pub const KS_KP_ADD: Keysym = 0xffab;
pub const KS_KP_SEPARATOR: Keysym = 0xffac;
pub const KS_KP_SUBTRACT: Keysym = 0xffad;
pub const KS_KP_DECIMAL: Keysym = 0xffae;
pub const KS_KP_DIVIDE: Keysym = 0xffaf;
pub const KS_KP_0: Keysym = 0xffb0;
pub const KS_KP_1: Keysym = 0xffb1;
pub const KS_KP_2: Keysym = 0xffb2;
pub const KS_KP_3: Keysym = 0xffb3;
pub const KS_KP_4: Keysym = 0xffb4;
pub const KS_KP_5: Keysym = 0xffb5;
pub const KS_KP_6: Keysym = 0xffb6;
pub const KS_KP_7: Keysym = 0xffb7;
pub const KS_KP_8: Keysym = 0xffb8;
pub const KS_KP_9: Keysym = 0xffb9;
pub const KS_KP_EQUAL: Keysym = 0xffbd;

pub const KS_F1: Keysym = 0xffbe;
pub const KS_F2: Keysym = 0xffbf;
pub const KS_F3: Keysym = 0xffc0;
pub const KS_F4: Keysym = 0xffc1;
pub const KS_F5: Keysym = 0xffc2;
pub const KS_F6: Keysym = 0xffc3;
pub const KS_F7: Keysym = 0xffc4;
pub const KS_F8: Keysym = 0xffc5;
pub const KS_F9: Keysym = 0xffc6;
pub const KS_F10: Keysym = 0xffc7;
pub const KS_F11: Keysym = 0xffc8;
pub const KS_F12: Keysym = 0xffc9;
pub const KS_F13: Keysym = 0xffca;
pub const KS_F14: Keysym = 0xffcb;
pub const KS_F15: Keysym = 0xffcc;
pub const KS_F16: Keysym = 0xffcd;
pub const KS_F17: Keysym = 0xffce;
pub const KS_F18: Keysym = 0xffcf;
pub const KS_F19: Keysym = 0xffd0;
pub const KS_F20: Keysym = 0xffd1;

// Modifiers
pub const KS_SHIFT_L: Keysym = 0xffe1;
pub const KS_SHIFT_R: Keysym = 0xffe2;
pub const KS_CONTROL_L: Keysym = 0xffe3;
pub const KS_CONTROL_R: Keysym = 0xffe4;
pub const KS_CAPS_LOCK: Keysym = 0xffe5;
pub const KS_SHIFT_LOCK: Keysym = 0xffe6;
pub const KS_META_L: Keysym = 0xffe7;
pub const KS_META_R: Keysym = 0xffe8;
pub const KS_ALT_L: Keysym = 0xffe9;
pub const KS_ALT_R: Keysym = 0xffea;
pub const KS_SUPER_L: Keysym = 0xffeb;
pub const KS_SUPER_R: Keysym = 0xffec;

pub const KS_DELETE: Keysym = 0xffff;
