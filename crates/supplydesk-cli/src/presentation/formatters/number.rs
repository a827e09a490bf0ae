pub fn one_decimal(value: f64) -> String {
    format!("{:.1}", value)
}

pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}
