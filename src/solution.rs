use std::io::Write;

use log::debug;

use crate::error::Result;
use crate::io::InputStream;

/// Shifts `a[i]` down by `i`. The answer is the first index whose shifted
/// value is non-positive; failing that, the minimum shifted value plus the
/// first index where it occurs.
pub fn solve(a: &[i64]) -> i64 {
    // a[i] - i can leave the i64 range; min + argmin is a[argmin] again
    let shifted = a
        .iter()
        .enumerate()
        .map(|(i, &x)| x as i128 - i as i128);

    if let Some(i) = shifted.clone().position(|x| x <= 0) {
        debug!("shifted value at {} is non-positive", i);
        return i as i64;
    }

    shifted
        .enumerate()
        .min_by_key(|&(_, x)| x)
        .map_or(0, |(i, x)| (x + i as i128) as i64)
}

/// Reads `t` test cases of the form `n a_0 .. a_{n-1}` and writes one answer per line.
pub fn run(input: &mut impl InputStream, output: &mut impl Write) -> Result<()> {
    let t: usize = input.value()?;
    for case in 0..t {
        let n: usize = input.value()?;
        let a: Vec<i64> = input.vec(n)?;
        let ans = solve(&a);
        debug!("case {}: n = {}, answer = {}", case, n, ans);
        writeln!(output, "{}", ans)?;
    }
    Ok(())
}
