//! 64x64 low-discrepancy threshold tile.
//!
//! Built at compile time from the R2 sequence (the generalized golden ratio
//! for two dimensions). Thresholds `frac(0.5 + x/g + y/g^2)` form a rank-1
//! lattice: a low-discrepancy ordered pattern with a faint diagonal
//! structure and an even spread of values, not true blue noise.

/// 64x64 threshold tile, values 0-255.
pub const BLUE_NOISE_64: [[u8; 64]; 64] = generate_tile();

const fn generate_tile() -> [[u8; 64]; 64] {
    const SIZE: usize = 64;

    // 1/g and 1/g^2 for the plastic constant g = 1.32471795724..., in
    // 0.32 fixed point so the fractional part falls out of wrapping adds.
    const A1: u32 = 3_242_174_889; // 0.7548776662 * 2^32
    const A2: u32 = 2_447_445_414; // 0.5698402910 * 2^32
    const HALF: u32 = 1 << 31;

    let mut tile = [[0u8; SIZE]; SIZE];
    let mut y = 0;
    while y < SIZE {
        let mut x = 0;
        while x < SIZE {
            let t = HALF
                .wrapping_add((x as u32).wrapping_mul(A1))
                .wrapping_add((y as u32).wrapping_mul(A2));
            tile[y][x] = (t >> 24) as u8;
            x += 1;
        }
        y += 1;
    }
    tile
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_is_roughly_flat() {
        let mut buckets = [0usize; 8];
        for row in BLUE_NOISE_64.iter() {
            for &v in row.iter() {
                buckets[(v / 32) as usize] += 1;
            }
        }
        // 4096 samples over 8 buckets -> 512 each
        for (i, &count) in buckets.iter().enumerate() {
            assert!(
                (400..=624).contains(&count),
                "bucket {i} has {count} samples"
            );
        }
    }

    #[test]
    fn test_neighbors_differ() {
        let mut equal = 0;
        for y in 0..64 {
            for x in 0..63 {
                if BLUE_NOISE_64[y][x] == BLUE_NOISE_64[y][x + 1] {
                    equal += 1;
                }
            }
        }
        assert!(equal < 64, "{equal} horizontally adjacent duplicates");
    }
}
