/// Insert `separator` between every group of three digits, counted from the right
pub(super) fn group_integer_digits(digits: &str, separator: char) -> String {
    let int_digits: Vec<char> = digits.chars().collect();
    if int_digits.len() <= 3 {
        return digits.to_string();
    }

    let mut grouped: Vec<char> = Vec::with_capacity(int_digits.len() + (int_digits.len() - 1) / 3);
    for (count, digit) in int_digits.iter().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(*digit);
    }
    grouped.reverse();
    grouped.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(group_integer_digits("0", ','), "0");
        assert_eq!(group_integer_digits("999", ','), "999");
        assert_eq!(group_integer_digits("1000", ','), "1,000");
        assert_eq!(group_integer_digits("1234567", '.'), "1.234.567");
        assert_eq!(group_integer_digits("999999999", ' '), "999 999 999");
    }
}
