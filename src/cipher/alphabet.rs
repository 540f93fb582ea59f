/// Number of symbols in the alphabet
pub const ALPHABET_SIZE: u32 = 53;

/// Supported symbols in position order: `a..z`, `A..Z`, then space
/// Position `p` (1-based) is `SYMBOLS[p - 1]`
pub const SYMBOLS: [char; ALPHABET_SIZE as usize] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J',
    'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ',
];

/// Resolve a symbol to its 1-based position, or `None` if unsupported
pub fn position_of(symbol: char) -> Option<u32> {
    match symbol {
        'a'..='z' => Some(symbol as u32 - 'a' as u32 + 1),
        'A'..='Z' => Some(symbol as u32 - 'A' as u32 + 27),
        ' ' => Some(ALPHABET_SIZE),
        _ => None,
    }
}

/// Look up the symbol at a 1-based position, or `None` outside `1..=53`
pub fn symbol_at(position: u32) -> Option<char> {
    if position == 0 {
        return None;
    }
    SYMBOLS.get(position as usize - 1).copied()
}

/// Check whether a symbol belongs to the alphabet
pub fn is_supported(symbol: char) -> bool {
    position_of(symbol).is_some()
}
