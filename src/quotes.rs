use rand::Rng;
use rand::seq::SliceRandom;

pub const QUOTES: [&str; 8] = [
    "\u{201c}Let your thoughts fall like grains of sand.\u{201d}",
    "\u{201c}Stillness is where creativity begins.\u{201d}",
    "\u{201c}Draw what you feel, not what you see.\u{201d}",
    "\u{201c}Each grain is a breath, each stroke a moment.\u{201d}",
    "\u{201c}Flow with intention, not perfection.\u{201d}",
    "\u{201c}The canvas is your calm.\u{201d}",
    "\u{201c}Let go. Let flow.\u{201d}",
    "\u{201c}Balance is found in motion.\u{201d}",
];

pub fn daily_quote(rng: &mut impl Rng) -> &'static str {
    QUOTES.choose(rng).copied().unwrap_or(QUOTES[0])
}
