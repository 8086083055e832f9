/// Returns the width in bytes of the UTF-8 sequence starting with the given lead byte.
///
/// Continuation and invalid lead bytes are reported as one byte wide,
/// which keeps callers moving forward even on unexpected input.
#[inline]
pub(crate) fn utf8_char_width(b: u8) -> usize {
    match b {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}
