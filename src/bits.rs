use crate::error::{Error, Result};

/// Most significant bit first. Non-positive inputs give `"0"`.
pub fn to_binary(a: i64) -> String {
    if a <= 0 {
        return "0".to_owned();
    }
    format!("{:b}", a)
}

pub fn from_binary(s: &str) -> Result<i64> {
    let parse_err = || Error::Parse {
        token: s.to_owned(),
    };
    s.bytes().try_fold(0i64, |num, c| {
        let bit = match c {
            b'0' => 0,
            b'1' => 1,
            _ => return Err(parse_err()),
        };
        num.checked_mul(2)
            .and_then(|x| x.checked_add(bit))
            .ok_or_else(|| parse_err())
    })
}

pub fn is_power_of_two(x: i64) -> bool {
    x > 0 && x & (x - 1) == 0
}

/// Smallest power of two `>= x`; `1` for `x <= 0`.
pub fn nearest_power_of_two(x: i64) -> Option<i64> {
    if x <= 0 {
        return Some(1);
    }
    let p = (x as u64).next_power_of_two();
    i64::try_from(p).ok()
}
