/// Variable memory: one 16-bit slot per letter A through Z, all
/// starting at zero for each run.
#[derive(Debug, Default)]
pub struct Var {
    slots: [i16; 26],
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.slots = [0; 26];
    }

    pub fn fetch(&self, letter: u8) -> i16 {
        match self.slots.get(letter.wrapping_sub(b'A') as usize) {
            Some(value) => *value,
            None => {
                debug_assert!(false, "variable letter out of range");
                0
            }
        }
    }

    pub fn store(&mut self, letter: u8, value: i16) {
        match self.slots.get_mut(letter.wrapping_sub(b'A') as usize) {
            Some(slot) => *slot = value,
            None => debug_assert!(false, "variable letter out of range"),
        }
    }
}
