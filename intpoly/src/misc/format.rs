const SUB_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];
const SUB_MINUS: char = '₋';

const SUP_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
const SUP_MINUS: char = '¯';

fn decimal_digits(mut n: usize) -> Vec<usize> { 
    let mut res = vec![n % 10];
    while n >= 10 { 
        n /= 10;
        res.push(n % 10);
    }
    res.reverse();
    res
}

fn encode(i: isize, digits: &[char; 10], minus: char) -> String { 
    let init = if i < 0 { 
        String::from(minus)
    } else { 
        String::new()
    };

    decimal_digits(i.unsigned_abs()).into_iter().fold(init, |mut res, d| {
        res.push(digits[d]);
        res
    })
}

fn decode(s: &str, digits: &[char; 10], minus: char) -> Option<isize> { 
    let (neg, s) = match s.strip_prefix(minus) { 
        Some(rest) => (true, rest),
        None => (false, s)
    };
    if s.is_empty() { 
        return None
    }

    let abs = s.chars().try_fold(0isize, |res, c| { 
        let d = digits.iter().position(|&d| d == c)?;
        res.checked_mul(10)?.checked_add(d as isize)
    })?;

    Some(if neg { -abs } else { abs })
}

pub fn subscript(i: isize) -> String {
    encode(i, &SUB_DIGITS, SUB_MINUS)
}

pub fn superscript(i: isize) -> String { 
    encode(i, &SUP_DIGITS, SUP_MINUS)
}

pub fn parse_subscript(s: &str) -> Option<isize> { 
    decode(s, &SUB_DIGITS, SUB_MINUS)
}

pub fn parse_superscript(s: &str) -> Option<isize> { 
    decode(s, &SUP_DIGITS, SUP_MINUS)
}
