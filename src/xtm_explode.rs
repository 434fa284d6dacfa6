// Explosion frame generator for the loss animation
// Pure: dimensions, origin and an RNG in, a finite list of frames out

use crate::xtm_color::Rgb;
use rand::Rng;

pub const MAX_FRAMES: usize = 150;
pub const BLOB_COUNT: usize = 800;
const PERSPECTIVE: f64 = 50.0;
const CORE_TICKS: usize = 8;
const BLOBS_FROM: usize = 6;
const WAVE_LEVELS: f64 = 25.0;

/// Core ramp, hottest first
pub const CORE_RAMP: [(char, Rgb); 12] = [
    ('@', Rgb(255, 255, 255)),
    ('@', Rgb(255, 245, 200)),
    ('@', Rgb(255, 230, 160)),
    ('@', Rgb(255, 207, 14)),
    ('@', Rgb(255, 177, 102)),
    ('@', Rgb(255, 140, 40)),
    ('H', Rgb(255, 100, 20)),
    ('H', Rgb(230, 60, 0)),
    ('H', Rgb(200, 20, 0)),
    ('!', Rgb(140, 0, 0)),
    ('!', Rgb(90, 0, 0)),
    ('.', Rgb(40, 0, 0)),
];

/// Shock-wave ramp, trailing edge first
pub const WAVE_RAMP: [(char, Rgb); 24] = [
    (' ', Rgb(0, 0, 0)),
    ('.', Rgb(60, 0, 20)),
    (':', Rgb(90, 0, 40)),
    ('!', Rgb(120, 0, 60)),
    ('H', Rgb(160, 0, 80)),
    ('I', Rgb(190, 0, 110)),
    ('M', Rgb(180, 0, 170)),
    ('W', Rgb(140, 0, 190)),
    ('#', Rgb(120, 0, 200)),
    ('O', Rgb(100, 0, 200)),
    ('+', Rgb(80, 0, 180)),
    ('.', Rgb(60, 0, 160)),
    ('+', Rgb(80, 0, 180)),
    ('%', Rgb(0, 0, 200)),
    ('$', Rgb(0, 80, 200)),
    ('&', Rgb(0, 140, 220)),
    ('@', Rgb(0, 200, 255)),
    ('0', Rgb(80, 220, 255)),
    ('8', Rgb(140, 240, 255)),
    ('O', Rgb(180, 255, 255)),
    ('=', Rgb(200, 255, 255)),
    ('+', Rgb(220, 255, 255)),
    ('-', Rgb(240, 255, 255)),
    ('-', Rgb(240, 255, 255)),
];

/// Debris glyphs by depth tier
pub const BLOB_TIERS: [(char, Rgb); 3] = [
    ('.', Rgb(255, 170, 170)), // far
    ('o', Rgb(100, 120, 255)), // mid
    ('@', Rgb(100, 50, 255)),  // near
];

/// One character cell of an explosion frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spark {
    Blank,     // background space
    Clear,     // transparent: leave what is underneath
    Core(u8),  // index into CORE_RAMP
    Wave(u8),  // index into WAVE_RAMP
    Blob(u8),  // index into BLOB_TIERS
}

impl Spark {
    /// Glyph and color to print; None for transparent cells
    pub fn glyph(self) -> Option<(char, Rgb)> {
        match self {
            Spark::Blank => Some((' ', Rgb(0, 0, 0))),
            Spark::Clear => None,
            Spark::Core(i) => Some(CORE_RAMP[i as usize]),
            Spark::Wave(i) => Some(WAVE_RAMP[i as usize]),
            Spark::Blob(i) => Some(BLOB_TIERS[i as usize]),
        }
    }

    /// Whether the cell shows nothing visible
    pub fn is_blank(self) -> bool {
        match self.glyph() {
            None => true,
            Some((ch, _)) => ch == ' ',
        }
    }
}

/// A rows x cols grid of sparks
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    rows: usize,
    cols: usize,
    cells: Vec<Spark>,
}

impl Frame {
    fn new(rows: usize, cols: usize) -> Self {
        Frame {
            rows,
            cols,
            cells: vec![Spark::Blank; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Spark {
        self.cells[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize, s: Spark) {
        self.cells[row * self.cols + col] = s;
    }

    /// One row of the frame
    pub fn row(&self, row: usize) -> &[Spark] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|s| s.is_blank())
    }
}

/// A debris particle: a fixed 3D direction, scaled up every tick
#[derive(Debug, Clone, Copy)]
struct Blob {
    x: f64,
    y: f64,
    z: f64,
}

impl Blob {
    fn sample<R: Rng>(rng: &mut R) -> Self {
        let (x, y, z, len) = loop {
            let x: f64 = rng.gen_range(-1.0..1.0);
            let y: f64 = rng.gen_range(-1.0..1.0);
            let z: f64 = rng.gen_range(-1.0..1.0);
            let len = (x * x + y * y + z * z).sqrt();
            if len > 1e-9 {
                break (x, y, z, len);
            }
        };
        let mut jitter = || 0.2 * rng.gen_range(-1.0..1.0);
        Blob {
            x: (x / len) * (1.3 + jitter()),
            y: (0.5 * y / len) * (1.3 + jitter()),
            z: (z / len) * (2.0 + jitter()),
        }
    }
}

/// Generate the explosion frames for a `rows` x `cols` character area with the
/// blast at (origin_row, origin_col). Stops after the first blank frame, or at
/// MAX_FRAMES.
pub fn explosion_frames<R: Rng>(rows: usize, cols: usize, origin_row: usize, origin_col: usize, rng: &mut R) -> Vec<Frame> {
    let mut frames = Vec::new();
    if rows == 0 || cols == 0 {
        return frames;
    }
    let scale = 100.0 / rows.max(cols) as f64;
    let (oy, ox) = (origin_row as f64, origin_col as f64);
    let blobs: Vec<Blob> = (0..BLOB_COUNT).map(|_| Blob::sample(rng)).collect();

    for tick in 0..MAX_FRAMES {
        let mut frame = Frame::new(rows, cols);
        let t = tick as f64;

        for row in 0..rows {
            for col in 0..cols {
                let nx = (col as f64 - ox) * scale;
                let ny = (row as f64 - oy) * scale;
                let radius = (nx * nx + 4.0 * ny * ny).sqrt();
                if tick < CORE_TICKS {
                    // tick 0 divides by zero: NaN and +inf saturate in the cast
                    let level = (radius / (t * 2.0) * 11.0) as usize;
                    let spark = if level >= CORE_RAMP.len() {
                        Spark::Clear
                    } else {
                        Spark::Core(level as u8)
                    };
                    frame.set(row, col, spark);
                } else {
                    let u: f64 = rng.gen_range(-1.0..1.0);
                    let ripple = (16.0 * (2.0 * ny + 0.01).atan2(nx + 0.01)).cos();
                    let r = radius * (0.5 + (u / 3.0) * ripple * 0.3);
                    let v = t - r + 1.0;
                    if v < 0.0 {
                        frame.set(row, col, Spark::Clear);
                    } else if v < WAVE_LEVELS {
                        let level = (v as usize).min(WAVE_RAMP.len() - 1);
                        frame.set(row, col, Spark::Wave(level as u8));
                    }
                }
            }
        }

        if tick > BLOBS_FROM {
            let grow = (tick - BLOBS_FROM) as f64 * scale;
            for b in &blobs {
                let (bx, by, bz) = (b.x * grow, b.y * grow, b.z * grow);
                if bz < 5.0 - PERSPECTIVE || bz > PERSPECTIVE {
                    continue;
                }
                let depth = PERSPECTIVE / (bz + PERSPECTIVE);
                // truncation toward zero, as a C-style integer cast
                let sx = (ox + bx * depth) as i64;
                let sy = (oy + by * depth) as i64;
                if sx < 0 || sy < 0 || sx >= cols as i64 || sy >= rows as i64 {
                    continue;
                }
                let tier = if bz > 40.0 {
                    0
                } else if bz > -20.0 {
                    1
                } else {
                    2
                };
                frame.set(sy as usize, sx as usize, Spark::Blob(tier));
            }
        }

        let done = frame.is_blank();
        frames.push(frame);
        if done {
            break;
        }
    }
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn first_frame_is_white_hot_at_origin_only() {
        let mut rng = StdRng::seed_from_u64(3);
        let frames = explosion_frames(9, 27, 4, 13, &mut rng);
        let f = &frames[0];
        // radius 0 over 0 ticks is NaN, which lands on the hottest glyph
        assert_eq!(f.get(4, 13), Spark::Core(0));
        assert_eq!(f.get(0, 0), Spark::Clear);
    }

    #[test]
    fn core_grows_over_ticks() {
        let mut rng = StdRng::seed_from_u64(3);
        let frames = explosion_frames(9, 27, 4, 13, &mut rng);
        let lit = |f: &Frame| (0..9).flat_map(|r| f.row(r).to_vec()).filter(|s| matches!(s, Spark::Core(_))).count();
        assert!(lit(&frames[1]) < lit(&frames[4]));
        // debris starts after tick 6 and may cover the core
        assert!(lit(&frames[4]) <= lit(&frames[6]));
    }

    #[test]
    fn transparent_and_space_count_as_blank() {
        assert!(Spark::Clear.is_blank());
        assert!(Spark::Blank.is_blank());
        assert!(Spark::Wave(0).is_blank());
        assert!(!Spark::Wave(1).is_blank());
        assert!(!Spark::Core(11).is_blank());
        assert!(!Spark::Blob(0).is_blank());
    }

    #[test]
    fn every_frame_matches_dimensions() {
        let mut rng = StdRng::seed_from_u64(11);
        let frames = explosion_frames(16, 90, 0, 89, &mut rng);
        assert!(!frames.is_empty() && frames.len() <= MAX_FRAMES);
        for f in &frames {
            assert_eq!((f.rows(), f.cols()), (16, 90));
        }
    }

    #[test]
    fn empty_area_has_no_frames() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(explosion_frames(0, 10, 0, 0, &mut rng).is_empty());
    }
}
