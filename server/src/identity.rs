use rand::seq::SliceRandom;
use rand::Rng;
use system::{Color, UserId};

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 9;

pub const PALETTE: [Color; 6] = [
    Color::rgb(0xe5, 0x73, 0x73),
    Color::rgb(0x64, 0xb5, 0xf6),
    Color::rgb(0x81, 0xc7, 0x84),
    Color::rgb(0xff, 0xd5, 0x4f),
    Color::rgb(0xba, 0x68, 0xc8),
    Color::rgb(0x4d, 0xb6, 0xac),
];

/// Draws random ids until `taken` rejects none of them.
pub fn generate_user_id<R, F>(rng: &mut R, taken: F) -> UserId
where
    R: Rng + ?Sized,
    F: Fn(&str) -> bool,
{
    loop {
        let id: String = (0..ID_LEN)
            .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
            .collect();
        if !taken(&id) {
            return id;
        }
        log::debug!("Generated id {} is taken, retrying", id);
    }
}

pub fn display_name(user_id: &str) -> String {
    format!("User{}", user_id.chars().take(4).collect::<String>())
}

pub fn pick_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    // PALETTE is never empty
    *PALETTE.choose(rng).unwrap_or(&PALETTE[0])
}
