use crate::base;

pub struct Barchart {
    charset: base::Charset,
    bars: Vec<(String, i64)>,
    label_charlen: usize,
    max_abs_val: i64,
    max_barlen: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub term_width: usize,
    /// `(label, value)` per bar, drawn in order.
    pub bars: Vec<(String, i64)>,
}

impl Config {
    pub fn to_barchart(&self) -> Barchart {
        let label_charlen = self
            .bars
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or_default();
        let max_abs_val = self
            .bars
            .iter()
            .map(|(_, v)| v.abs())
            .max()
            .unwrap_or_default();
        let max_val_charlen = self
            .bars
            .iter()
            .map(|&(_, v)| base::util::charlen_i64(v))
            .max()
            .unwrap_or_default();
        let max_barlen = self
            .term_width
            .max(base::util::MIN_TERM_WIDTH)
            .saturating_sub(
                label_charlen
                    + base::util::BOUNDING_SPACES_COUNT
                    + 1 // vertical divider just before bar
                    + max_val_charlen,
            );

        Barchart {
            charset: self.charset.clone(),
            bars: self.bars.clone(),
            label_charlen,
            max_abs_val,
            max_barlen,
        }
    }
}

impl Barchart {
    fn barlen(&self, val: i64) -> usize {
        if self.max_abs_val == 0 {
            return 0;
        }
        let x = (val.abs() as f64) / (self.max_abs_val as f64) * (self.max_barlen as f64);
        self.max_barlen.min(x.round() as usize)
    }

    fn draw(&self, w: &mut impl std::fmt::Write, label: &str, val: i64) -> std::fmt::Result {
        write!(
            w,
            "{:<width$} {}",
            label,
            self.charset.chart_axis,
            width = self.label_charlen
        )?;
        let barlen = self.barlen(val);
        if barlen > 0 {
            let mut bars = self.charset.chart_bar.to_string().repeat(barlen);
            if self.charset.color {
                bars = match val < 0 {
                    true => colored::Colorize::red(bars.as_str()).to_string(),
                    false => colored::Colorize::green(bars.as_str()).to_string(),
                };
            }
            w.write_str(&bars)?;
            w.write_char(' ')?;
        }
        writeln!(w, "{}", val)
    }
}

impl std::fmt::Display for Barchart {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (label, val) in self.bars.iter() {
            self.draw(f, label, *val)?;
        }
        Ok(())
    }
}
