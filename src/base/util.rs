pub const BOUNDING_SPACES_COUNT: usize = 2;
pub const MIN_DASHES_COUNT: usize = 2;
pub const MIN_TERM_WIDTH: usize = 60;

pub const fn count_digits(n: u64) -> usize {
    if n >= 10000000000000000000 {
        return 20;
    }
    let mut count = 1;
    let mut ceil = 10;
    while n >= ceil {
        ceil *= 10;
        count += 1;
    }
    count
}

/// Number of characters needed to print `n` in decimal, sign included.
pub const fn charlen_i64(n: i64) -> usize {
    let digits = count_digits(n.unsigned_abs());
    if n < 0 { digits + 1 } else { digits }
}
