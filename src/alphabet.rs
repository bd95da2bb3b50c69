pub const ALPHABET: &[u8] = "ABCDEFGHIJKLMNOPQRSTUVWXYZ".as_bytes();
pub const ALPHABET_LEN: usize = ALPHABET.len();

/// Position of `a` in the alphabet, or `None` if it isn't one of the 26 uppercase letters.
pub fn index_of(a: char) -> Option<usize> {
    match a {
        'A'..='Z' => Some((a as u8 - b'A') as usize),
        _ => None
    }
}

pub fn letter_at(idx: usize) -> char {
    ALPHABET[idx % ALPHABET_LEN] as char
}

/// Uppercases `s` and drops anything the cipher can't handle.
pub fn normalize(s: &str) -> String {
    s.to_ascii_uppercase().chars().filter(|&x| index_of(x).is_some()).collect()
}
