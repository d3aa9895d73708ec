// ============================================================================
// CASTING - Conversión de valores arbitrarios a número, bool o string
// ============================================================================
// Semántica de Number(), String() y comparación con "true" de JavaScript
// ============================================================================

use wasm_bindgen::JsValue;

/// Valor convertible por `as_number`, `as_bool` y `as_string`
pub trait CastValue {
    /// Forma string del valor (equivalente a `String(value)`)
    fn cast_string(&self) -> String;

    /// Forma numérica del valor (equivalente a `Number(value)`)
    fn cast_number(&self) -> f64 {
        parse_number(&self.cast_string())
    }
}

macro_rules! display_cast {
    ($($t:ty),*) => {
        $(
            impl CastValue for $t {
                fn cast_string(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_cast!(str, String, char);

macro_rules! integer_cast {
    ($($t:ty),*) => {
        $(
            impl CastValue for $t {
                fn cast_string(&self) -> String {
                    self.to_string()
                }

                fn cast_number(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

integer_cast!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl CastValue for bool {
    fn cast_string(&self) -> String {
        self.to_string()
    }

    fn cast_number(&self) -> f64 {
        if *self { 1.0 } else { 0.0 }
    }
}

impl CastValue for f64 {
    fn cast_string(&self) -> String {
        number_to_string(*self)
    }

    fn cast_number(&self) -> f64 {
        *self
    }
}

impl CastValue for f32 {
    fn cast_string(&self) -> String {
        number_to_string(f64::from(*self))
    }

    fn cast_number(&self) -> f64 {
        f64::from(*self)
    }
}

impl CastValue for JsValue {
    fn cast_string(&self) -> String {
        if let Some(s) = self.as_string() {
            return s;
        }
        if let Some(n) = self.as_f64() {
            return number_to_string(n);
        }
        if let Some(b) = self.as_bool() {
            return b.to_string();
        }
        if self.is_null() {
            return "null".to_string();
        }
        if self.is_undefined() {
            return "undefined".to_string();
        }
        js_sys::Object::from(self.clone()).to_string().into()
    }

    fn cast_number(&self) -> f64 {
        match self.as_f64() {
            Some(n) => n,
            None => js_sys::Number::new(self).value_of(),
        }
    }
}

impl<T: CastValue + ?Sized> CastValue for &T {
    fn cast_string(&self) -> String {
        (**self).cast_string()
    }

    fn cast_number(&self) -> f64 {
        (**self).cast_number()
    }
}

/// Convertir a número; entradas no numéricas dan `NaN`
pub fn as_number(value: impl CastValue) -> f64 {
    value.cast_number()
}

/// `true` solo si la forma string es exactamente `"true"`
pub fn as_bool(value: impl CastValue) -> bool {
    value.cast_string() == "true"
}

pub fn as_string(value: impl CastValue) -> String {
    value.cast_string()
}

/// Parseo decimal al estilo `Number(string)`.
/// Vacío (tras trim) es 0; admite `Infinity` con signo y prefijos 0x/0o/0b.
pub fn parse_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }
    // f64::from_str acepta "inf"/"nan", Number() no
    if !s.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E')) {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

/// Representación de números como `String(n)`
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let abs = n.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let exp = format!("{:e}", n);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
            _ => exp,
        };
    }
    n.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_cast_only_accepts_exact_true() {
        assert!(as_bool("true"));
        assert!(as_bool(true));
        assert!(!as_bool("false"));
        assert!(!as_bool(""));
        assert!(!as_bool("1"));
        assert!(!as_bool("TRUE"));
        assert!(!as_bool(" true"));
        assert!(!as_bool(1));
    }

    #[test]
    fn number_cast() {
        assert_eq!(as_number("42"), 42.0);
        assert!(as_number("abc").is_nan());
        assert_eq!(as_number(""), 0.0);
        assert_eq!(as_number("  7.5\n"), 7.5);
        assert_eq!(as_number("-3"), -3.0);
        assert_eq!(as_number(".5"), 0.5);
        assert_eq!(as_number("1e3"), 1000.0);
        assert_eq!(as_number("0x1F"), 31.0);
        assert_eq!(as_number("0b101"), 5.0);
        assert!(as_number("0x").is_nan());
        assert!(as_number("12px").is_nan());
        assert!(as_number("inf").is_nan());
        assert!(as_number("NaN").is_nan());
        assert_eq!(as_number("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(as_number(true), 1.0);
        assert_eq!(as_number(17_u8), 17.0);
    }

    #[test]
    fn string_cast() {
        assert_eq!(as_string(42), "42");
        assert_eq!(as_string(42.0), "42");
        assert_eq!(as_string(1.5), "1.5");
        assert_eq!(as_string(-0.0), "0");
        assert_eq!(as_string(f64::NAN), "NaN");
        assert_eq!(as_string(f64::INFINITY), "Infinity");
        assert_eq!(as_string(1e21), "1e+21");
        assert_eq!(as_string(1.5e-7), "1.5e-7");
        assert_eq!(as_string(false), "false");
        assert_eq!(as_string("hola"), "hola");
        assert_eq!(as_string(&String::from("x")), "x");
    }
}
