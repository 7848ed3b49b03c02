pub(crate) fn experience_level_label(code: &str) -> Option<&'static str> {
    match code {
        "EN" => Some("Entry-level"),
        "MI" => Some("Mid-level"),
        "SE" => Some("Senior"),
        "EX" => Some("Executive"),
        _ => None,
    }
}

pub(crate) fn company_size_label(code: &str) -> Option<&'static str> {
    match code {
        "S" => Some("Small"),
        "M" => Some("Medium"),
        "L" => Some("Large"),
        _ => None,
    }
}
