//! Game id generation.
//!
//! Game ids are opaque 16-character alphanumeric strings and the only
//! public handle on a game.

use rand::Rng;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of a generated game id.
pub const GAME_ID_LEN: usize = 16;

/// Generate a fresh opaque game id.
pub fn generate_game_id() -> String {
    let mut rng = rand::rng();

    let mut s = String::with_capacity(GAME_ID_LEN);
    for _ in 0..GAME_ID_LEN {
        s.push(ALPHABET[rng.random_range(0..ALPHABET.len())] as char);
    }
    s
}
