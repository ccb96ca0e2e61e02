pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789@#$%&";
pub const DEFAULT_TEXT: &str = "SYSTEM";

/// Ticks spent on each character before it locks in.
const TICKS_PER_CHAR: usize = 3;

/// Scramble-then-settle text effect used by the preloader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoder {
    target: Vec<char>,
    ticks: usize,
}

impl Decoder {
    pub fn new(target: &str) -> Self {
        let target = if target.is_empty() { DEFAULT_TEXT } else { target };
        Self {
            target: target.chars().collect(),
            ticks: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.ticks >= self.target.len() * TICKS_PER_CHAR
    }

    /// Renders the next frame. `pick` maps an alphabet length to a random
    /// index below it. Returns the frame and whether it is the final one.
    pub fn tick(&mut self, mut pick: impl FnMut(usize) -> usize) -> (String, bool) {
        let alphabet: Vec<char> = ALPHABET.chars().collect();
        let frame = self
            .target
            .iter()
            .enumerate()
            .map(|(i, c)| {
                if i * TICKS_PER_CHAR < self.ticks {
                    *c
                } else {
                    alphabet[pick(alphabet.len()) % alphabet.len()]
                }
            })
            .collect();
        let done = self.is_done();
        self.ticks += 1;
        (frame, done)
    }
}

/// First `typed` characters of `text`.
pub fn typewriter_prefix(text: &str, typed: usize) -> String {
    text.chars().take(typed).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_one_character_every_three_ticks() {
        let mut decoder = Decoder::new("AB");
        let frames: Vec<(String, bool)> = (0..7).map(|_| decoder.tick(|_| 36)).collect();
        // Index 36 of the alphabet is '@'.
        assert_eq!(frames[0], ("@@".to_string(), false));
        assert_eq!(frames[1], ("A@".to_string(), false));
        assert_eq!(frames[3], ("A@".to_string(), false));
        assert_eq!(frames[4], ("AB".to_string(), false));
        assert_eq!(frames[6], ("AB".to_string(), true));
    }

    #[test]
    fn empty_target_falls_back() {
        let mut decoder = Decoder::new("");
        while !decoder.is_done() {
            decoder.tick(|n| n - 1);
        }
        assert_eq!(decoder.tick(|_| 0).0, DEFAULT_TEXT);
    }

    #[test]
    fn typewriter_counts_characters() {
        assert_eq!(typewriter_prefix("El codigo", 2), "El");
        assert_eq!(typewriter_prefix("año", 2), "añ");
        assert_eq!(typewriter_prefix("hi", 10), "hi");
    }
}
