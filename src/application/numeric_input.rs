//! 数字输入框
//!
//! - 输入时只接受（可选小数的）数字文本；解析后在范围内才提交
//! - 失焦时越界值钳制到边界并提交；空值或非法值回退到上次提交的值

use regex::Regex;
use std::sync::LazyLock;

static UNSIGNED_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d*\.?\d*$").expect("static pattern"));

static SIGNED_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d*\.?\d*$").expect("static pattern"));

/// 受控数字输入
#[derive(Debug, Clone, PartialEq)]
pub struct NumericInput {
    text: String,
    committed: Option<f64>,
    min: Option<f64>,
    max: Option<f64>,
}

impl NumericInput {
    pub fn new(value: Option<f64>) -> Self {
        Self {
            text: format_value(value),
            committed: value,
            min: None,
            max: None,
        }
    }

    pub fn with_bounds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// 当前显示文本
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 最近一次提交的值
    pub fn value(&self) -> Option<f64> {
        self.committed
    }

    /// 外部修改了绑定值
    pub fn set_value(&mut self, value: Option<f64>) {
        self.committed = value;
        self.text = format_value(value);
    }

    /// 处理一次输入；返回需要通知外部的新值
    pub fn on_input(&mut self, raw: &str) -> Option<f64> {
        if !self.pattern().is_match(raw) {
            return None;
        }
        self.text = raw.to_string();

        let value = parse_finite(raw)?;
        if !self.in_range(value) {
            return None;
        }
        self.committed = Some(value);
        Some(value)
    }

    /// 处理失焦；越界时钳制并返回新值
    pub fn on_blur(&mut self) -> Option<f64> {
        let Some(value) = parse_finite(&self.text) else {
            self.text = format_value(self.committed);
            return None;
        };

        let clamped = self.clamp(value);
        self.text = format_value(Some(clamped));
        if clamped != value {
            self.committed = Some(clamped);
            return Some(clamped);
        }
        None
    }

    fn pattern(&self) -> &'static Regex {
        match self.min {
            Some(min) if min >= 0.0 => &UNSIGNED_DECIMAL,
            _ => &SIGNED_DECIMAL,
        }
    }

    fn in_range(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }

    fn clamp(&self, value: f64) -> f64 {
        let value = self.min.map_or(value, |min| value.max(min));
        self.max.map_or(value, |max| value.min(max))
    }
}

fn parse_finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn format_value(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounded(min: f64, max: f64) -> NumericInput {
        NumericInput::new(Some(min)).with_bounds(Some(min), Some(max))
    }

    #[test]
    fn test_out_of_range_deferred_until_blur() {
        let mut input = bounded(0.0, 10.0);

        assert_eq!(input.on_input("12.5"), None);
        assert_eq!(input.text(), "12.5");
        assert_eq!(input.value(), Some(0.0));

        assert_eq!(input.on_blur(), Some(10.0));
        assert_eq!(input.text(), "10");
        assert_eq!(input.value(), Some(10.0));
    }

    #[test]
    fn test_in_range_commits_immediately() {
        let mut input = bounded(0.0, 10.0);
        assert_eq!(input.on_input("7.5"), Some(7.5));
        assert_eq!(input.on_blur(), None);
        assert_eq!(input.text(), "7.5");
    }

    #[test]
    fn test_rejects_non_numeric_text() {
        let mut input = bounded(0.0, 10.0);
        input.on_input("3");
        assert_eq!(input.on_input("3a"), None);
        assert_eq!(input.on_input("1.2.3"), None);
        assert_eq!(input.on_input("-1"), None);
        assert_eq!(input.text(), "3");
    }

    #[test]
    fn test_invalid_blur_reverts_to_committed() {
        let mut input = bounded(0.0, 10.0);
        input.on_input("4");
        input.on_input("");
        assert_eq!(input.on_blur(), None);
        assert_eq!(input.text(), "4");

        input.on_input(".");
        assert_eq!(input.on_blur(), None);
        assert_eq!(input.text(), "4");
    }

    #[test]
    fn test_below_min_clamps_up() {
        let mut input = NumericInput::new(Some(5.0)).with_bounds(Some(1.0), None);
        assert_eq!(input.on_input("0.5"), None);
        assert_eq!(input.on_blur(), Some(1.0));
        assert_eq!(input.text(), "1");
    }

    #[test]
    fn test_negative_allowed_without_non_negative_min() {
        let mut input = NumericInput::new(None).with_bounds(Some(-10.0), Some(10.0));
        assert_eq!(input.on_input("-"), None);
        assert_eq!(input.on_input("-3"), Some(-3.0));
    }

    #[test]
    fn test_trailing_dot_normalized_on_blur() {
        let mut input = NumericInput::new(None);
        assert_eq!(input.on_input("8."), Some(8.0));
        assert_eq!(input.on_blur(), None);
        assert_eq!(input.text(), "8");
    }

    #[test]
    fn test_emitted_values_always_within_bounds() {
        let bounds = [(0.0, 10.0), (1.0, 1.5), (2.0, 100.0), (0.0, 0.0)];
        let typed = [
            "", "0", "0.5", "1", "1.25", "10", "10.01", "12.5", "99", "150", ".", "3.", ".75",
        ];

        for (min, max) in bounds {
            for text in typed {
                let mut input = bounded(min, max);
                let mut emitted = Vec::new();
                emitted.extend(input.on_input(text));
                emitted.extend(input.on_blur());
                for value in emitted {
                    assert!(
                        (min..=max).contains(&value),
                        "{} emitted {} outside [{}, {}]",
                        text,
                        value,
                        min,
                        max
                    );
                }
            }
        }
    }
}
