use super::survey::{VALUE_MAX, VALUE_MIN};

/// Linear mapping from an ordinal value domain onto a horizontal pixel span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    /// Scale over the legal survey range `[VALUE_MIN, VALUE_MAX]`.
    #[must_use]
    pub const fn survey() -> Self {
        Self {
            domain_start: VALUE_MIN as f64,
            domain_end: VALUE_MAX as f64,
        }
    }

    /// Fraction of the domain covered by `value`; `0.0` at the start, `1.0` at the end.
    #[must_use]
    pub fn fraction(self, value: f64) -> f64 {
        (value - self.domain_start) / (self.domain_end - self.domain_start)
    }

    /// Projects `value` onto the span starting at `span_start` with width `span_width`.
    #[must_use]
    pub fn domain_to_span(self, value: f64, span_start: f64, span_width: f64) -> f64 {
        span_start + self.fraction(value) * span_width
    }
}
