//! Cell coercion and label-to-key derivation.

/// Parse the longest leading decimal literal of `input`, skipping leading
/// whitespace. `"42.5 t"` yields 42.5, `"1,5"` yields 1, `"R$ 10"` yields None.
pub fn parse_leading_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let int_digits = end - int_start;

    let mut frac_digits = 0;
    if end < len && bytes[end] == b'.' {
        let mut j = end + 1;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        frac_digits = j - end - 1;
        if int_digits > 0 || frac_digits > 0 {
            end = j;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut j = end + 1;
        if j < len && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        // A dangling exponent marker is not part of the number
        if j > exp_start {
            end = j;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Parse-or-zero: absent, empty and non-numeric cells become 0, never NaN.
/// Non-finite results and negative zero are also folded to 0.
pub fn number_or_zero(cell: Option<&str>) -> f64 {
    match cell.and_then(parse_leading_float) {
        Some(v) if v.is_finite() && v != 0.0 => v,
        _ => 0.0,
    }
}

/// A cell counts as present when it exists and is not the empty string.
pub fn is_present(cell: Option<&str>) -> bool {
    cell.is_some_and(|c| !c.is_empty())
}

/// Stock labels: lowercase, spaces removed (`"Brita 0"` -> `brita0`).
pub fn stock_key(label: &str) -> String {
    label.to_lowercase().chars().filter(|c| *c != ' ').collect()
}

/// Equipment labels: lowercase, keep only `a-z` (`"Pá Carregadeira"` -> `pcarregadeira`).
pub fn equipment_key(label: &str) -> String {
    label
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(number_or_zero(Some("1250")), 1250.0);
        assert_eq!(number_or_zero(Some("42.5")), 42.5);
        assert_eq!(number_or_zero(Some("-85000")), -85000.0);
        assert_eq!(number_or_zero(Some(".5")), 0.5);
        assert_eq!(number_or_zero(Some("5.")), 5.0);
        assert_eq!(number_or_zero(Some("1e3")), 1000.0);
    }

    #[test]
    fn test_leading_prefix_is_used() {
        assert_eq!(number_or_zero(Some("  42.5 t")), 42.5);
        assert_eq!(number_or_zero(Some("1,5")), 1.0);
        assert_eq!(number_or_zero(Some("15.5%")), 15.5);
        assert_eq!(number_or_zero(Some("2e")), 2.0);
        assert_eq!(number_or_zero(Some("3e+")), 3.0);
    }

    #[test]
    fn test_garbage_coerces_to_zero() {
        for cell in ["", " ", "abc", "R$ 100", ".", "-", "+.", "e5", "Infinity", "NaN"] {
            let v = number_or_zero(Some(cell));
            assert_eq!(v, 0.0, "cell {cell:?}");
            assert!(!v.is_nan());
        }
        assert_eq!(number_or_zero(None), 0.0);
    }

    #[test]
    fn test_negative_zero_and_overflow_fold_to_zero() {
        let v = number_or_zero(Some("-0"));
        assert_eq!(v, 0.0);
        assert!(v.is_sign_positive());
        assert_eq!(number_or_zero(Some("1e999")), 0.0);
    }

    #[test]
    fn test_presence() {
        assert!(is_present(Some("0")));
        assert!(is_present(Some(" ")));
        assert!(!is_present(Some("")));
        assert!(!is_present(None));
    }

    #[test]
    fn test_keys() {
        assert_eq!(stock_key("Brita 0"), "brita0");
        assert_eq!(stock_key("Pedrisco"), "pedrisco");
        assert_eq!(stock_key("BRITA 1 "), "brita1");
        assert_eq!(equipment_key("Pá Carregadeira"), "pcarregadeira");
        assert_eq!(equipment_key("Novo Equip"), "novoequip");
        assert_eq!(equipment_key("Britador-2"), "britador");
    }
}
