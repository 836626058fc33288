use super::BirthDate;

/// Check digit for the first nine digits of a number (Luhn, weights 2,1,2,...).
fn check_digit(digits: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (2 - i as u32 % 2))
        .map(|p| if p >= 10 { p - 9 } else { p })
        .sum();

    (100 - sum) % 10
}

/// Validate the last serial digit against `YYMMDD` + the first three serial digits.
pub(crate) fn is_valid(birth_date: &BirthDate, serial: &str) -> bool {
    let canonical = format!(
        "{:02}{:02}{:02}{}",
        birth_date.year().rem_euclid(100),
        birth_date.month(),
        birth_date.day(),
        serial
    );
    let digits: Vec<u32> = canonical.chars().filter_map(|c| c.to_digit(10)).collect();

    match digits.split_last() {
        Some((last, body)) if digits.len() == 10 => check_digit(body) == *last,
        _ => false,
    }
}
