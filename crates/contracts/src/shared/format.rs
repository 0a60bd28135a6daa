//! Number formatting for Indian-rupee amounts and counts.
//!
//! Digit grouping follows the en-IN convention: the last three digits form a
//! group, every group before that has two digits (`12,34,567`).

/// Groups the digits of `n` the en-IN way.
///
/// # Examples
/// ```
/// use contracts::shared::format::group_indian;
/// assert_eq!(group_indian(125000), "1,25,000");
/// assert_eq!(group_indian(999), "999");
/// ```
pub fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Formats a count with en-IN grouping (`1,800`).
pub fn format_count(n: u64) -> String {
    group_indian(n)
}

/// Rupee amount rounded to whole rupees: `₹87,800`.
pub fn format_inr(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let whole = value.abs().round() as u64;
    format!("{}₹{}", sign, group_indian(whole))
}

/// Rupee amount with exactly two decimals: `₹8,500.00`.
pub fn format_inr_precise(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let paise_total = (value.abs() * 100.0).round() as u64;
    let rupees = paise_total / 100;
    let paise = paise_total % 100;
    format!("{}₹{}.{:02}", sign, group_indian(rupees), paise)
}

/// Short card form: crores, lakhs, thousands (`₹1.25L`).
pub fn format_inr_compact(value: f64) -> String {
    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    let body = if abs >= 10_000_000.0 {
        format!("{}Cr", trim_decimals(abs / 10_000_000.0))
    } else if abs >= 100_000.0 {
        format!("{}L", trim_decimals(abs / 100_000.0))
    } else if abs >= 1_000.0 {
        format!("{}k", trim_decimals(abs / 1_000.0))
    } else {
        trim_decimals(abs)
    };
    format!("{}₹{}", sign, body)
}

/// Chart axis tick in thousands: `₹45k`, `₹12.5k`.
pub fn format_inr_axis(value: f64) -> String {
    format!("₹{}k", trim_decimals(value / 1_000.0))
}

/// Two decimals at most, trailing zeros removed.
fn trim_decimals(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_indian() {
        assert_eq!(group_indian(0), "0");
        assert_eq!(group_indian(42), "42");
        assert_eq!(group_indian(1000), "1,000");
        assert_eq!(group_indian(87800), "87,800");
        assert_eq!(group_indian(125000), "1,25,000");
        assert_eq!(group_indian(1234567), "12,34,567");
        assert_eq!(group_indian(123456789), "12,34,56,789");
    }

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(25000.0), "₹25,000");
        assert_eq!(format_inr(17500.4), "₹17,500");
        assert_eq!(format_inr(-1500.0), "-₹1,500");
    }

    #[test]
    fn test_format_inr_precise() {
        assert_eq!(format_inr_precise(8500.0), "₹8,500.00");
        assert_eq!(format_inr_precise(3600.5), "₹3,600.50");
        assert_eq!(format_inr_precise(0.0), "₹0.00");
    }

    #[test]
    fn test_format_inr_compact() {
        assert_eq!(format_inr_compact(125000.0), "₹1.25L");
        assert_eq!(format_inr_compact(45000.0), "₹45k");
        assert_eq!(format_inr_compact(25_000_000.0), "₹2.5Cr");
        assert_eq!(format_inr_compact(640.0), "₹640");
    }

    #[test]
    fn test_format_inr_axis() {
        assert_eq!(format_inr_axis(45000.0), "₹45k");
        assert_eq!(format_inr_axis(12500.0), "₹12.5k");
        assert_eq!(format_inr_axis(0.0), "₹0k");
    }
}
