use bit_vec::BitVec;

/// One bit per pixel, row-major.
pub struct Mask {
    width: u32,
    data: BitVec,
}

impl Mask {
    pub fn new(w: u32, h: u32) -> Self {
        Self {
            width: w,
            data: BitVec::from_elem(w as usize * h as usize, false),
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        x as usize + y as usize * self.width as usize
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        self.data.get(self.index(x, y)).unwrap_or(false)
    }

    pub fn set(&mut self, x: u32, y: u32) {
        let index = self.index(x, y);
        self.data.set(index, true);
    }
}
