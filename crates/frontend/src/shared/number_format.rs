//! Salary formatting for job cards

/// Multiplier applied before display. Salaries are shown as delivered by the
/// server; the factor is kept so a unit conversion has one place to live.
pub const SALARY_SCALE: f64 = 1.0;

/// Currency sign shown before each salary bound
pub const CURRENCY_SIGN: &str = "\u{20B9}";

/// Formats an amount with exactly two decimals and no grouping
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_salary;
/// assert_eq!(format_salary(850000.0), "850000.00");
/// ```
pub fn format_salary(amount: f64) -> String {
    format!("{:.2}", amount * SALARY_SCALE)
}

/// Formats a salary range, e.g. "₹ 850000.00 - ₹ 1200000.00 LPA"
///
/// A missing bound is shown as zero.
pub fn format_salary_range(min: Option<f64>, max: Option<f64>) -> String {
    format!(
        "{sign} {} - {sign} {} LPA",
        format_salary(min.unwrap_or(0.0)),
        format_salary(max.unwrap_or(0.0)),
        sign = CURRENCY_SIGN
    )
}
