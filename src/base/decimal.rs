/// Fixed-point number with up to three decimal places, used for summed
/// measures such as record types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Decimal(i128);

const SCALE: i128 = 1000;
const FRACTION_DIGITS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid number '{0}'")]
pub struct ParseDecimalError(String);

impl Decimal {
    pub const fn from_int(n: i64) -> Self {
        Self(n as i128 * SCALE)
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / SCALE as f64
    }
}

impl From<i64> for Decimal {
    fn from(n: i64) -> Self {
        Self::from_int(n)
    }
}

impl std::fmt::Display for Decimal {
    /// Formats without trailing zeros in the fraction, e.g. `4`, `-0.25`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let abs = self.0.unsigned_abs();
        let scale = SCALE as u128;
        if self.0 < 0 {
            f.write_str("-")?;
        }
        write!(f, "{}", abs / scale)?;
        let frac = abs % scale;
        if frac > 0 {
            let digits = format!("{:0width$}", frac, width = FRACTION_DIGITS);
            write!(f, ".{}", digits.trim_end_matches('0'))?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Decimal {
    type Err = ParseDecimalError;

    /// Parses an optionally signed decimal such as `12`, `-1.5` or `.25`.
    /// Decimal places beyond the third are discarded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseDecimalError(s.to_string());
        let t = s.trim();
        let (negative, t) = match t.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, t.strip_prefix('+').unwrap_or(t)),
        };
        let (int, frac) = t.split_once('.').unwrap_or((t, ""));
        let all_digits = |x: &str| x.bytes().all(|b| b.is_ascii_digit());
        if (int.is_empty() && frac.is_empty()) || !all_digits(int) || !all_digits(frac) {
            return Err(err());
        }

        let mut units = match int {
            "" => 0,
            _ => int
                .parse::<i128>()
                .ok()
                .and_then(|n| n.checked_mul(SCALE))
                .ok_or_else(err)?,
        };
        let mut place = SCALE / 10;
        for b in frac.bytes().take(FRACTION_DIGITS) {
            units = units
                .checked_add((b - b'0') as i128 * place)
                .ok_or_else(err)?;
            place /= 10;
        }
        Ok(Self(if negative { -units } else { units }))
    }
}

impl TryFrom<&str> for Decimal {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Decimal(0), "0")]
    #[case(Decimal(4000), "4")]
    #[case(Decimal(1500), "1.5")]
    #[case(Decimal(-250), "-0.25")]
    #[case(Decimal(1), "0.001")]
    #[case(Decimal::from_int(i64::MAX), "9223372036854775807")]
    fn test_to_string(#[case] d: Decimal, #[case] want: &str) {
        assert_eq!(d.to_string(), want)
    }

    #[rstest]
    #[case("0", Decimal(0))]
    #[case("4", Decimal(4000))]
    #[case(" 1.0 ", Decimal(1000))]
    #[case("+1.5", Decimal(1500))]
    #[case("-.25", Decimal(-250))]
    #[case("2.", Decimal(2000))]
    #[case("0.12345", Decimal(123))]
    #[case("9223372036854775808", Decimal(9223372036854775808000))]
    fn test_from_str(#[case] s: &str, #[case] want: Decimal) {
        assert_eq!(s.parse::<Decimal>(), Ok(want))
    }

    #[rstest]
    #[case("")]
    #[case("-")]
    #[case(".")]
    #[case("1.2.3")]
    #[case("1e3")]
    #[case("--1")]
    #[case("one")]
    #[case("1 000")]
    #[case("999999999999999999999999999999999999999")]
    fn test_from_str_failing(#[case] s: &str) {
        assert_eq!(s.parse::<Decimal>(), Err(ParseDecimalError(s.to_string())))
    }

    #[test]
    fn test_checked_add() {
        let big = "100000000000000000000000000000000000".parse::<Decimal>().unwrap();
        assert_eq!(big.checked_add(big), None);
        assert_eq!(
            Decimal::from_int(i64::MAX).checked_add(Decimal::from_int(1)),
            Some("9223372036854775808".parse().unwrap())
        );
    }
}
