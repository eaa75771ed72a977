//! Per-family scancode tables.
//!
//! One flat table per keyboard hardware family, indexed by the raw
//! kernel scancode; entry 0 in each slot means the code is unassigned.
//! The kernel's keyboard type code selects the family.

use crate::error::{DriverError, Result};
use crate::input::keysyms::*;

/// Keyboard hardware families with distinct scancode spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardFamily {
    PcXt,
    Usb,
    Adb,
    Amiga,
    Lk201,
    Sun,
}

impl KeyboardFamily {
    /// Map a kernel keyboard type code to its family. AT keyboards share
    /// the XT translated-scancode space; Maple keyboards report HID
    /// usages like USB ones.
    pub fn from_wskbd_type(wstype: u32) -> Result<Self> {
        use crate::dev::wsio::*;
        match wstype {
            WSKBD_TYPE_PC_XT | WSKBD_TYPE_PC_AT => Ok(KeyboardFamily::PcXt),
            WSKBD_TYPE_USB | WSKBD_TYPE_MAPLE => Ok(KeyboardFamily::Usb),
            WSKBD_TYPE_ADB => Ok(KeyboardFamily::Adb),
            WSKBD_TYPE_AMIGA => Ok(KeyboardFamily::Amiga),
            WSKBD_TYPE_LK201 => Ok(KeyboardFamily::Lk201),
            WSKBD_TYPE_SUN | WSKBD_TYPE_SUN5 => Ok(KeyboardFamily::Sun),
            other => Err(DriverError::UnknownKeyboardType(other)),
        }
    }

    pub fn table(self) -> &'static [Keysym] {
        match self {
            KeyboardFamily::PcXt => &XT_KEYMAP,
            KeyboardFamily::Usb => &USB_KEYMAP,
            KeyboardFamily::Adb => &ADB_KEYMAP,
            KeyboardFamily::Amiga => &AMIGA_KEYMAP,
            KeyboardFamily::Lk201 => &LK201_KEYMAP,
            KeyboardFamily::Sun => &SUN_KEYMAP,
        }
    }
}

/// AT set-1 (XT translated) scancodes.
#[rustfmt::skip]
pub const XT_KEYMAP: [Keysym; 89] = [
    /* 0x00 */ KS_NONE,
    /* 0x01 */ KS_ESCAPE,
    /* 0x02 */ KS_1, KS_2, KS_3, KS_4, KS_5, KS_6, KS_7, KS_8, KS_9, KS_0,
    /* 0x0c */ KS_MINUS, KS_EQUAL, KS_BACKSPACE, KS_TAB,
    /* 0x10 */ KS_Q, KS_W, KS_E, KS_R, KS_T, KS_Y, KS_U, KS_I, KS_O, KS_P,
    /* 0x1a */ KS_BRACKETLEFT, KS_BRACKETRIGHT, KS_RETURN, KS_CONTROL_L,
    /* 0x1e */ KS_A, KS_S, KS_D, KS_F, KS_G, KS_H, KS_J, KS_K, KS_L,
    /* 0x27 */ KS_SEMICOLON, KS_APOSTROPHE, KS_GRAVE, KS_SHIFT_L, KS_BACKSLASH,
    /* 0x2c */ KS_Z, KS_X, KS_C, KS_V, KS_B, KS_N, KS_M,
    /* 0x33 */ KS_COMMA, KS_PERIOD, KS_SLASH, KS_SHIFT_R,
    /* 0x37 */ KS_KP_MULTIPLY, KS_ALT_L, KS_SPACE, KS_CAPS_LOCK,
    /* 0x3b */ KS_F1, KS_F2, KS_F3, KS_F4, KS_F5, KS_F6, KS_F7, KS_F8, KS_F9, KS_F10,
    /* 0x45 */ KS_NUM_LOCK, KS_SCROLL_LOCK,
    /* 0x47 */ KS_KP_HOME, KS_KP_UP, KS_KP_PRIOR, KS_KP_SUBTRACT,
    /* 0x4b */ KS_KP_LEFT, KS_KP_BEGIN, KS_KP_RIGHT, KS_KP_ADD,
    /* 0x4f */ KS_KP_END, KS_KP_DOWN, KS_KP_NEXT, KS_KP_INSERT, KS_KP_DELETE,
    /* 0x54 */ KS_SYS_REQ, KS_NONE, KS_LESS,
    /* 0x57 */ KS_F11, KS_F12,
];

/// USB HID usage codes (keyboard/keypad page).
pub const USB_KEYMAP: [Keysym; 232] = {
    let mut m = [KS_NONE; 232];
    let mut i = 0;
    while i < 26 {
        m[4 + i] = KS_A + i as Keysym;
        i += 1;
    }
    i = 0;
    while i < 9 {
        m[30 + i] = KS_1 + i as Keysym;
        i += 1;
    }
    m[39] = KS_0;
    m[40] = KS_RETURN;
    m[41] = KS_ESCAPE;
    m[42] = KS_BACKSPACE;
    m[43] = KS_TAB;
    m[44] = KS_SPACE;
    m[45] = KS_MINUS;
    m[46] = KS_EQUAL;
    m[47] = KS_BRACKETLEFT;
    m[48] = KS_BRACKETRIGHT;
    m[49] = KS_BACKSLASH;
    m[51] = KS_SEMICOLON;
    m[52] = KS_APOSTROPHE;
    m[53] = KS_GRAVE;
    m[54] = KS_COMMA;
    m[55] = KS_PERIOD;
    m[56] = KS_SLASH;
    m[57] = KS_CAPS_LOCK;
    i = 0;
    while i < 12 {
        m[58 + i] = KS_F1 + i as Keysym;
        i += 1;
    }
    m[70] = KS_PRINT;
    m[71] = KS_SCROLL_LOCK;
    m[72] = KS_PAUSE;
    m[73] = KS_INSERT;
    m[74] = KS_HOME;
    m[75] = KS_PRIOR;
    m[76] = KS_DELETE;
    m[77] = KS_END;
    m[78] = KS_NEXT;
    m[79] = KS_RIGHT;
    m[80] = KS_LEFT;
    m[81] = KS_DOWN;
    m[82] = KS_UP;
    m[83] = KS_NUM_LOCK;
    m[84] = KS_KP_DIVIDE;
    m[85] = KS_KP_MULTIPLY;
    m[86] = KS_KP_SUBTRACT;
    m[87] = KS_KP_ADD;
    m[88] = KS_KP_ENTER;
    i = 0;
    while i < 9 {
        m[89 + i] = KS_KP_1 + i as Keysym;
        i += 1;
    }
    m[98] = KS_KP_0;
    m[99] = KS_KP_DECIMAL;
    m[101] = KS_MENU;
    m[224] = KS_CONTROL_L;
    m[225] = KS_SHIFT_L;
    m[226] = KS_ALT_L;
    m[227] = KS_SUPER_L;
    m[228] = KS_CONTROL_R;
    m[229] = KS_SHIFT_R;
    m[230] = KS_ALT_R;
    m[231] = KS_SUPER_R;
    m
};

/// ADB raw keycodes. Command maps to Meta, Option to Alt.
pub const ADB_KEYMAP: [Keysym; 128] = {
    let mut m = [KS_NONE; 128];
    m[0] = KS_A;
    m[1] = KS_S;
    m[2] = KS_D;
    m[3] = KS_F;
    m[4] = KS_H;
    m[5] = KS_G;
    m[6] = KS_Z;
    m[7] = KS_X;
    m[8] = KS_C;
    m[9] = KS_V;
    m[11] = KS_B;
    m[12] = KS_Q;
    m[13] = KS_W;
    m[14] = KS_E;
    m[15] = KS_R;
    m[16] = KS_Y;
    m[17] = KS_T;
    m[18] = KS_1;
    m[19] = KS_2;
    m[20] = KS_3;
    m[21] = KS_4;
    m[22] = KS_6;
    m[23] = KS_5;
    m[24] = KS_EQUAL;
    m[25] = KS_9;
    m[26] = KS_7;
    m[27] = KS_MINUS;
    m[28] = KS_8;
    m[29] = KS_0;
    m[30] = KS_BRACKETRIGHT;
    m[31] = KS_O;
    m[32] = KS_U;
    m[33] = KS_BRACKETLEFT;
    m[34] = KS_I;
    m[35] = KS_P;
    m[36] = KS_RETURN;
    m[37] = KS_L;
    m[38] = KS_J;
    m[39] = KS_APOSTROPHE;
    m[40] = KS_K;
    m[41] = KS_SEMICOLON;
    m[42] = KS_BACKSLASH;
    m[43] = KS_COMMA;
    m[44] = KS_SLASH;
    m[45] = KS_N;
    m[46] = KS_M;
    m[47] = KS_PERIOD;
    m[48] = KS_TAB;
    m[49] = KS_SPACE;
    m[50] = KS_GRAVE;
    m[51] = KS_BACKSPACE;
    m[53] = KS_ESCAPE;
    m[54] = KS_CONTROL_L;
    m[55] = KS_META_L;
    m[56] = KS_SHIFT_L;
    m[57] = KS_CAPS_LOCK;
    m[58] = KS_ALT_L;
    m[59] = KS_LEFT;
    m[60] = KS_RIGHT;
    m[61] = KS_DOWN;
    m[62] = KS_UP;
    m[65] = KS_KP_DECIMAL;
    m[67] = KS_KP_MULTIPLY;
    m[69] = KS_KP_ADD;
    m[71] = KS_NUM_LOCK;
    m[75] = KS_KP_DIVIDE;
    m[76] = KS_KP_ENTER;
    m[78] = KS_KP_SUBTRACT;
    m[81] = KS_KP_EQUAL;
    m[82] = KS_KP_0;
    m[83] = KS_KP_1;
    m[84] = KS_KP_2;
    m[85] = KS_KP_3;
    m[86] = KS_KP_4;
    m[87] = KS_KP_5;
    m[88] = KS_KP_6;
    m[89] = KS_KP_7;
    m[91] = KS_KP_8;
    m[92] = KS_KP_9;
    m[96] = KS_F5;
    m[97] = KS_F6;
    m[98] = KS_F7;
    m[99] = KS_F3;
    m[100] = KS_F8;
    m[101] = KS_F9;
    m[103] = KS_F11;
    m[109] = KS_F10;
    m[111] = KS_F12;
    m[114] = KS_INSERT;
    m[115] = KS_HOME;
    m[116] = KS_PRIOR;
    m[117] = KS_DELETE;
    m[118] = KS_F4;
    m[119] = KS_END;
    m[120] = KS_F2;
    m[121] = KS_NEXT;
    m[122] = KS_F1;
    m
};

/// Amiga raw keycodes. The Amiga keys map to Meta.
pub const AMIGA_KEYMAP: [Keysym; 104] = {
    let mut m = [KS_NONE; 104];
    m[0x00] = KS_GRAVE;
    let mut i = 0;
    while i < 9 {
        m[0x01 + i] = KS_1 + i as Keysym;
        i += 1;
    }
    m[0x0a] = KS_0;
    m[0x0b] = KS_MINUS;
    m[0x0c] = KS_EQUAL;
    m[0x0d] = KS_BACKSLASH;
    m[0x0f] = KS_KP_0;
    m[0x10] = KS_Q;
    m[0x11] = KS_W;
    m[0x12] = KS_E;
    m[0x13] = KS_R;
    m[0x14] = KS_T;
    m[0x15] = KS_Y;
    m[0x16] = KS_U;
    m[0x17] = KS_I;
    m[0x18] = KS_O;
    m[0x19] = KS_P;
    m[0x1a] = KS_BRACKETLEFT;
    m[0x1b] = KS_BRACKETRIGHT;
    m[0x1d] = KS_KP_1;
    m[0x1e] = KS_KP_2;
    m[0x1f] = KS_KP_3;
    m[0x20] = KS_A;
    m[0x21] = KS_S;
    m[0x22] = KS_D;
    m[0x23] = KS_F;
    m[0x24] = KS_G;
    m[0x25] = KS_H;
    m[0x26] = KS_J;
    m[0x27] = KS_K;
    m[0x28] = KS_L;
    m[0x29] = KS_SEMICOLON;
    m[0x2a] = KS_APOSTROPHE;
    m[0x2d] = KS_KP_4;
    m[0x2e] = KS_KP_5;
    m[0x2f] = KS_KP_6;
    m[0x31] = KS_Z;
    m[0x32] = KS_X;
    m[0x33] = KS_C;
    m[0x34] = KS_V;
    m[0x35] = KS_B;
    m[0x36] = KS_N;
    m[0x37] = KS_M;
    m[0x38] = KS_COMMA;
    m[0x39] = KS_PERIOD;
    m[0x3a] = KS_SLASH;
    m[0x3c] = KS_KP_DECIMAL;
    m[0x3d] = KS_KP_7;
    m[0x3e] = KS_KP_8;
    m[0x3f] = KS_KP_9;
    m[0x40] = KS_SPACE;
    m[0x41] = KS_BACKSPACE;
    m[0x42] = KS_TAB;
    m[0x43] = KS_KP_ENTER;
    m[0x44] = KS_RETURN;
    m[0x45] = KS_ESCAPE;
    m[0x46] = KS_DELETE;
    m[0x4a] = KS_KP_SUBTRACT;
    m[0x4c] = KS_UP;
    m[0x4d] = KS_DOWN;
    m[0x4e] = KS_RIGHT;
    m[0x4f] = KS_LEFT;
    i = 0;
    while i < 10 {
        m[0x50 + i] = KS_F1 + i as Keysym;
        i += 1;
    }
    m[0x5c] = KS_KP_DIVIDE;
    m[0x5d] = KS_KP_MULTIPLY;
    m[0x5e] = KS_KP_ADD;
    m[0x5f] = KS_HELP;
    m[0x60] = KS_SHIFT_L;
    m[0x61] = KS_SHIFT_R;
    m[0x62] = KS_CAPS_LOCK;
    m[0x63] = KS_CONTROL_L;
    m[0x64] = KS_ALT_L;
    m[0x65] = KS_ALT_R;
    m[0x66] = KS_META_L;
    m[0x67] = KS_META_R;
    m
};

/// LK201/LK401 keycodes. The keyboard starts at 0x56; the editing and
/// keypad blocks sit between the function rows and the main array.
pub const LK201_KEYMAP: [Keysym; 256] = {
    let mut m = [KS_NONE; 256];
    let mut i = 0;
    while i < 5 {
        m[0x56 + i] = KS_F1 + i as Keysym;
        m[0x64 + i] = KS_F6 + i as Keysym;
        i += 1;
    }
    m[0x71] = KS_F11;
    m[0x72] = KS_F12;
    m[0x73] = KS_F13;
    m[0x74] = KS_F14;
    m[0x7c] = KS_HELP;
    m[0x7d] = KS_MENU;
    m[0x80] = KS_F17;
    m[0x81] = KS_F18;
    m[0x82] = KS_F19;
    m[0x83] = KS_F20;
    m[0x8a] = KS_FIND;
    m[0x8b] = KS_INSERT;
    m[0x8c] = KS_DELETE;
    m[0x8d] = KS_SELECT;
    m[0x8e] = KS_PRIOR;
    m[0x8f] = KS_NEXT;
    m[0x92] = KS_KP_0;
    m[0x94] = KS_KP_DECIMAL;
    m[0x95] = KS_KP_ENTER;
    m[0x96] = KS_KP_1;
    m[0x97] = KS_KP_2;
    m[0x98] = KS_KP_3;
    m[0x99] = KS_KP_4;
    m[0x9a] = KS_KP_5;
    m[0x9b] = KS_KP_6;
    m[0x9c] = KS_KP_SEPARATOR;
    m[0x9d] = KS_KP_7;
    m[0x9e] = KS_KP_8;
    m[0x9f] = KS_KP_9;
    m[0xa0] = KS_KP_SUBTRACT;
    m[0xa1] = KS_KP_F1;
    m[0xa2] = KS_KP_F2;
    m[0xa3] = KS_KP_F3;
    m[0xa4] = KS_KP_F4;
    m[0xa7] = KS_LEFT;
    m[0xa8] = KS_RIGHT;
    m[0xa9] = KS_DOWN;
    m[0xaa] = KS_UP;
    m[0xab] = KS_SHIFT_R;
    m[0xac] = KS_ALT_L;
    m[0xad] = KS_SHIFT_L;
    m[0xae] = KS_CONTROL_L;
    m[0xb0] = KS_CAPS_LOCK;
    m[0xb1] = KS_MULTI_KEY;
    m[0xbc] = KS_BACKSPACE;
    m[0xbd] = KS_RETURN;
    m[0xbe] = KS_TAB;
    m[0xbf] = KS_GRAVE;
    m[0xc0] = KS_1;
    m[0xc1] = KS_Q;
    m[0xc2] = KS_A;
    m[0xc3] = KS_Z;
    m[0xc5] = KS_2;
    m[0xc6] = KS_W;
    m[0xc7] = KS_S;
    m[0xc8] = KS_X;
    m[0xca] = KS_3;
    m[0xcb] = KS_E;
    m[0xcc] = KS_D;
    m[0xcd] = KS_C;
    m[0xcf] = KS_4;
    m[0xd0] = KS_R;
    m[0xd1] = KS_F;
    m[0xd2] = KS_V;
    m[0xd4] = KS_SPACE;
    m[0xd5] = KS_5;
    m[0xd6] = KS_T;
    m[0xd7] = KS_G;
    m[0xd8] = KS_B;
    m[0xda] = KS_6;
    m[0xdb] = KS_Y;
    m[0xdc] = KS_H;
    m[0xdd] = KS_N;
    m[0xdf] = KS_7;
    m[0xe0] = KS_U;
    m[0xe1] = KS_J;
    m[0xe2] = KS_M;
    m[0xe4] = KS_8;
    m[0xe5] = KS_I;
    m[0xe6] = KS_K;
    m[0xe7] = KS_COMMA;
    m[0xe9] = KS_9;
    m[0xea] = KS_O;
    m[0xeb] = KS_L;
    m[0xec] = KS_PERIOD;
    m[0xee] = KS_0;
    m[0xef] = KS_P;
    m[0xf1] = KS_SEMICOLON;
    m[0xf2] = KS_SLASH;
    m[0xf3] = KS_EQUAL;
    m[0xf4] = KS_BRACKETRIGHT;
    m[0xf5] = KS_BACKSLASH;
    m[0xf7] = KS_MINUS;
    m[0xf8] = KS_BRACKETLEFT;
    m[0xf9] = KS_APOSTROPHE;
    m
};

/// Sun type 4/5 keycodes.
pub const SUN_KEYMAP: [Keysym; 128] = {
    let mut m = [KS_NONE; 128];
    m[0x01] = KS_CANCEL;
    m[0x03] = KS_REDO;
    m[0x05] = KS_F1;
    m[0x06] = KS_F2;
    m[0x07] = KS_F10;
    m[0x08] = KS_F3;
    m[0x09] = KS_F11;
    m[0x0a] = KS_F4;
    m[0x0b] = KS_F12;
    m[0x0c] = KS_F5;
    m[0x0e] = KS_F6;
    m[0x10] = KS_F7;
    m[0x11] = KS_F8;
    m[0x12] = KS_F9;
    m[0x13] = KS_ALT_L;
    m[0x14] = KS_UP;
    m[0x15] = KS_PAUSE;
    m[0x16] = KS_PRINT;
    m[0x17] = KS_SCROLL_LOCK;
    m[0x18] = KS_LEFT;
    m[0x1a] = KS_UNDO;
    m[0x1b] = KS_DOWN;
    m[0x1c] = KS_RIGHT;
    m[0x1d] = KS_ESCAPE;
    let mut i = 0;
    while i < 9 {
        m[0x1e + i] = KS_1 + i as Keysym;
        i += 1;
    }
    m[0x27] = KS_0;
    m[0x28] = KS_MINUS;
    m[0x29] = KS_EQUAL;
    m[0x2a] = KS_GRAVE;
    m[0x2b] = KS_BACKSPACE;
    m[0x2c] = KS_INSERT;
    m[0x2e] = KS_KP_DIVIDE;
    m[0x2f] = KS_KP_MULTIPLY;
    m[0x32] = KS_KP_DECIMAL;
    m[0x34] = KS_HOME;
    m[0x35] = KS_TAB;
    m[0x36] = KS_Q;
    m[0x37] = KS_W;
    m[0x38] = KS_E;
    m[0x39] = KS_R;
    m[0x3a] = KS_T;
    m[0x3b] = KS_Y;
    m[0x3c] = KS_U;
    m[0x3d] = KS_I;
    m[0x3e] = KS_O;
    m[0x3f] = KS_P;
    m[0x40] = KS_BRACKETLEFT;
    m[0x41] = KS_BRACKETRIGHT;
    m[0x42] = KS_DELETE;
    m[0x43] = KS_MULTI_KEY;
    m[0x44] = KS_KP_7;
    m[0x45] = KS_KP_8;
    m[0x46] = KS_KP_9;
    m[0x47] = KS_KP_SUBTRACT;
    m[0x4c] = KS_CONTROL_L;
    m[0x4d] = KS_A;
    m[0x4e] = KS_S;
    m[0x4f] = KS_D;
    m[0x50] = KS_F;
    m[0x51] = KS_G;
    m[0x52] = KS_H;
    m[0x53] = KS_J;
    m[0x54] = KS_K;
    m[0x55] = KS_L;
    m[0x56] = KS_SEMICOLON;
    m[0x57] = KS_APOSTROPHE;
    m[0x58] = KS_BACKSLASH;
    m[0x59] = KS_RETURN;
    m[0x5a] = KS_KP_ENTER;
    m[0x5b] = KS_KP_4;
    m[0x5c] = KS_KP_5;
    m[0x5d] = KS_KP_6;
    m[0x5e] = KS_KP_0;
    m[0x5f] = KS_FIND;
    m[0x60] = KS_END;
    m[0x62] = KS_NUM_LOCK;
    m[0x63] = KS_SHIFT_L;
    m[0x64] = KS_Z;
    m[0x65] = KS_X;
    m[0x66] = KS_C;
    m[0x67] = KS_V;
    m[0x68] = KS_B;
    m[0x69] = KS_N;
    m[0x6a] = KS_M;
    m[0x6b] = KS_COMMA;
    m[0x6c] = KS_PERIOD;
    m[0x6d] = KS_SLASH;
    m[0x6e] = KS_SHIFT_R;
    m[0x6f] = KS_LINEFEED;
    m[0x70] = KS_KP_1;
    m[0x71] = KS_KP_2;
    m[0x72] = KS_KP_3;
    m[0x76] = KS_HELP;
    m[0x77] = KS_CAPS_LOCK;
    m[0x78] = KS_META_L;
    m[0x79] = KS_SPACE;
    m[0x7a] = KS_META_R;
    m[0x7b] = KS_NEXT;
    m[0x7d] = KS_KP_ADD;
    m
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev::wsio::*;

    #[test]
    fn family_selection() {
        assert_eq!(
            KeyboardFamily::from_wskbd_type(WSKBD_TYPE_PC_XT).unwrap(),
            KeyboardFamily::PcXt
        );
        assert_eq!(
            KeyboardFamily::from_wskbd_type(WSKBD_TYPE_PC_AT).unwrap(),
            KeyboardFamily::PcXt
        );
        assert_eq!(
            KeyboardFamily::from_wskbd_type(WSKBD_TYPE_MAPLE).unwrap(),
            KeyboardFamily::Usb
        );
        assert_eq!(
            KeyboardFamily::from_wskbd_type(WSKBD_TYPE_SUN5).unwrap(),
            KeyboardFamily::Sun
        );
        assert!(matches!(
            KeyboardFamily::from_wskbd_type(0xdead),
            Err(DriverError::UnknownKeyboardType(0xdead))
        ));
    }

    #[test]
    fn usb_table_spot_checks() {
        assert_eq!(USB_KEYMAP[4], KS_A);
        assert_eq!(USB_KEYMAP[29], KS_Z);
        assert_eq!(USB_KEYMAP[30], KS_1);
        assert_eq!(USB_KEYMAP[39], KS_0);
        assert_eq!(USB_KEYMAP[40], KS_RETURN);
        assert_eq!(USB_KEYMAP[69], KS_F12);
        assert_eq!(USB_KEYMAP[89], KS_KP_1);
        assert_eq!(USB_KEYMAP[231], KS_SUPER_R);
        // usages 0..=3 are error rolls, never mapped
        assert_eq!(USB_KEYMAP[0], KS_NONE);
        assert_eq!(USB_KEYMAP[3], KS_NONE);
    }

    #[test]
    fn xt_table_spot_checks() {
        assert_eq!(XT_KEYMAP[0x01], KS_ESCAPE);
        assert_eq!(XT_KEYMAP[0x10], KS_Q);
        assert_eq!(XT_KEYMAP[0x1c], KS_RETURN);
        assert_eq!(XT_KEYMAP[0x39], KS_SPACE);
        assert_eq!(XT_KEYMAP[0x58], KS_F12);
    }
}
