use std::fmt;

/// Significant digits used when printing numbers.
const PRECISION: i32 = 6;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Value {
    Null,
    Number(f64),
    Str(String),
    Boolean(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValueKind {
    Null,
    Number,
    Str,
    Boolean,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Number(_) => ValueKind::Number,
            Self::Str(_) => ValueKind::Str,
            Self::Boolean(_) => ValueKind::Boolean,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Number => "number",
            Self::Str => "string",
            Self::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("(null)"),
            Self::Number(v) => f.write_str(&format_number(*v)),
            Self::Str(s) => write!(f, "\"{s}\""),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

/// Formats like `%g`: fixed notation for exponents in `-4..PRECISION`,
/// scientific otherwise, trailing zeros removed.
fn format_number(v: f64) -> String {
    if v.is_nan() {
        return "nan".into();
    }
    if v.is_infinite() {
        return if v < 0.0 { "-inf" } else { "inf" }.into();
    }

    let sci = format!("{:.*e}", (PRECISION - 1) as usize, v);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= PRECISION {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.abs())
    } else {
        let fixed = format!("{:.*}", (PRECISION - 1 - exp) as usize, v);
        trim_fraction(&fixed).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod test {
    use super::{Value, ValueKind};

    fn show(v: f64) -> String {
        Value::Number(v).to_string()
    }

    #[test]
    fn print_numbers() {
        assert_eq!(show(14.0), "14");
        assert_eq!(show(-6.0), "-6");
        assert_eq!(show(0.5), "0.5");
        assert_eq!(show(0.1 + 0.2), "0.3");
        assert_eq!(show(1.0 / 3.0), "0.333333");
        assert_eq!(show(100000.0), "100000");
        assert_eq!(show(1234567.0), "1.23457e+06");
        assert_eq!(show(1e21), "1e+21");
        assert_eq!(show(0.0001), "0.0001");
        assert_eq!(show(0.00001), "1e-05");
        assert_eq!(show(0.0), "0");
        assert_eq!(show(-0.0), "-0");
        assert_eq!(show(f64::INFINITY), "inf");
        assert_eq!(show(f64::NAN), "nan");
    }

    #[test]
    fn print_other_values() {
        assert_eq!(Value::Str("a b".into()).to_string(), "\"a b\"");
        assert_eq!(Value::Str("say \"hi\"".into()).to_string(), "\"say \"hi\"\"");
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::Boolean(false).to_string(), "false");
        assert_eq!(Value::Null.to_string(), "(null)");
    }

    #[test]
    fn kind_names() {
        assert_eq!(Value::Number(1.0).kind().to_string(), "number");
        assert_eq!(Value::Str(String::new()).kind().to_string(), "string");
        assert_eq!(Value::Boolean(true).kind().to_string(), "boolean");
        assert_eq!(ValueKind::Null.to_string(), "null");
    }
}
