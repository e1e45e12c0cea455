//! Scroll, counter and theme math behind the page chrome. DOM wiring lives in
//! `web::page`.

/// Scroll depth past which the navbar darkens.
pub const NAVBAR_SHADE_AFTER: f64 = 50.0;
/// Space kept above a section when jumping to an anchor (fixed navbar).
pub const ANCHOR_OFFSET: f64 = 80.0;
/// Bottom margin shrinking the viewport for section reveals.
pub const REVEAL_MARGIN: f64 = 50.0;
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Fraction of a counter that must be on screen before counting starts.
pub const COUNTER_THRESHOLD: f64 = 0.5;

/// Percentage of the page scrolled, `0..=100`. A page that cannot scroll
/// reports 0.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, client_height: f64) -> f64 {
    let range = scroll_height - client_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_y / range * 100.0).clamp(0.0, 100.0)
}

pub fn navbar_background(scroll_y: f64) -> &'static str {
    if scroll_y > NAVBAR_SHADE_AFTER {
        "rgba(10, 22, 40, 0.95)"
    } else {
        "rgba(10, 22, 40, 0.9)"
    }
}

/// Fraction of an element (`top..bottom`, viewport coordinates) inside
/// `0..viewport_bottom`.
pub fn visible_fraction(top: f64, bottom: f64, viewport_bottom: f64) -> f64 {
    let height = bottom - top;
    if height <= 0.0 {
        return 0.0;
    }
    let shown = bottom.min(viewport_bottom) - top.max(0.0);
    (shown / height).clamp(0.0, 1.0)
}

/// Visible fraction of a section, with the viewport shrunk by the reveal margin.
pub fn reveal_ratio(top: f64, bottom: f64, viewport_height: f64) -> f64 {
    visible_fraction(top, bottom, viewport_height - REVEAL_MARGIN)
}

/// Whether a section should fade in given its bounding box.
pub fn should_reveal(top: f64, bottom: f64, viewport_height: f64) -> bool {
    reveal_ratio(top, bottom, viewport_height) >= REVEAL_THRESHOLD
}

/// Whether a counter is far enough on screen to start counting.
pub fn counter_in_view(top: f64, bottom: f64, viewport_height: f64) -> bool {
    visible_fraction(top, bottom, viewport_height) >= COUNTER_THRESHOLD
}

/// Leading number of `s`, the way `parseFloat` reads it: surrounding junk
/// such as a `+` or `%` suffix is ignored. `None` when no digits lead.
pub fn parse_leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }
    s[..end].parse().ok()
}

pub fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

/// Count-up animation for one metric.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    pub target: f64,
    pub start_ms: f64,
    pub duration_ms: f64,
}

impl CounterAnimation {
    pub const DURATION_MS: f64 = 2000.0;

    pub fn new(target: f64, start_ms: f64) -> Self {
        Self {
            target,
            start_ms,
            duration_ms: Self::DURATION_MS,
        }
    }

    fn is_decimal(&self) -> bool {
        self.target % 1.0 != 0.0
    }

    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn is_done(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Text to show at `now_ms`. Decimal targets keep one digit, whole
    /// targets are floored; once done the exact target is shown.
    pub fn display_at(&self, now_ms: f64) -> String {
        let progress = self.progress(now_ms);
        let decimal = self.is_decimal();
        if progress >= 1.0 {
            return if decimal {
                format!("{:.1}", self.target)
            } else {
                format!("{}", self.target)
            };
        }
        let current = ease_out_quad(progress) * self.target;
        if decimal {
            format!("{:.1}", current)
        } else {
            format!("{}", current.floor())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn body_class(self) -> &'static str {
        match self {
            Theme::Dark => "dark-mode",
            Theme::Light => "light-mode",
        }
    }

    /// Font Awesome icon class for the toggle button.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "fa-moon",
            Theme::Light => "fa-sun",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_percentage_and_safe_on_short_pages() {
        assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(1000.0, 2000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(10.0, 800.0, 800.0), 0.0);
    }

    #[test]
    fn navbar_darkens_past_threshold() {
        assert_eq!(navbar_background(50.0), "rgba(10, 22, 40, 0.9)");
        assert_eq!(navbar_background(51.0), "rgba(10, 22, 40, 0.95)");
    }

    #[test]
    fn reveal_needs_a_tenth_above_the_margin() {
        // viewport 1000 -> effective bottom 950
        assert!(!should_reveal(960.0, 1160.0, 1000.0));
        assert!(!should_reveal(945.0, 1045.0, 1000.0));
        assert!(should_reveal(940.0, 1040.0, 1000.0));
        assert!(should_reveal(-500.0, 200.0, 1000.0));
        assert!(!should_reveal(-500.0, -10.0, 1000.0));
    }

    #[test]
    fn reveal_ratio_applies_bottom_margin() {
        // 100px box, 50px above the 950px effective bottom
        assert_eq!(reveal_ratio(900.0, 1000.0, 1000.0), 0.5);
        assert_eq!(reveal_ratio(0.0, 100.0, 1000.0), 1.0);
        assert_eq!(reveal_ratio(960.0, 1060.0, 1000.0), 0.0);
    }

    #[test]
    fn counters_start_at_exactly_half_visible() {
        // 100px box with its top 50px above the viewport bottom
        assert_eq!(visible_fraction(750.0, 850.0, 800.0), 0.5);
        assert!(counter_in_view(750.0, 850.0, 800.0));
        assert!(!counter_in_view(751.0, 851.0, 800.0));
        // half scrolled off the top also counts
        assert!(counter_in_view(-50.0, 50.0, 800.0));
        assert!(!counter_in_view(-51.0, 49.0, 800.0));
    }

    #[test]
    fn leading_number_reads_like_parse_float() {
        assert_eq!(parse_leading_number("120"), Some(120.0));
        assert_eq!(parse_leading_number(" 99.9+"), Some(99.9));
        assert_eq!(parse_leading_number("50%"), Some(50.0));
        assert_eq!(parse_leading_number(".5x"), Some(0.5));
        assert_eq!(parse_leading_number("3."), Some(3.0));
        assert_eq!(parse_leading_number("-4"), Some(-4.0));
        assert_eq!(parse_leading_number("1e3k"), Some(1000.0));
        assert_eq!(parse_leading_number("2e"), Some(2.0));
        assert_eq!(parse_leading_number("abc"), None);
        assert_eq!(parse_leading_number(""), None);
        assert_eq!(parse_leading_number("."), None);
        assert_eq!(parse_leading_number("+"), None);
    }

    #[test]
    fn counter_eases_and_lands_on_target() {
        let c = CounterAnimation::new(120.0, 1000.0);
        assert_eq!(c.display_at(1000.0), "0");
        // t = 0.5 -> eased 0.75
        assert_eq!(c.display_at(2000.0), "90");
        assert_eq!(c.display_at(3000.0), "120");
        assert!(c.is_done(3500.0));
    }

    #[test]
    fn decimal_counter_keeps_one_digit() {
        let c = CounterAnimation::new(99.9, 0.0);
        assert_eq!(c.display_at(0.0), "0.0");
        assert_eq!(c.display_at(5000.0), "99.9");
    }

    #[test]
    fn theme_round_trip() {
        let t = Theme::default();
        assert_eq!(t.icon(), "fa-moon");
        assert_eq!(t.toggle().body_class(), "light-mode");
        assert_eq!(t.toggle().toggle(), Theme::Dark);
    }
}
