use crate::shared::icons::icon;
use leptos::prelude::*;

fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Counter value (None = loading/error)
    #[prop(into)]
    value: Signal<Option<i64>>,
    /// Optional BEM modifier for the card, e.g. "pending"
    #[prop(optional, into)]
    modifier: Option<String>,
) -> impl IntoView {
    let card_class = match modifier {
        Some(m) => format!("stat-card stat-card--{}", m),
        None => "stat-card".to_string(),
    };

    view! {
        <div class=card_class>
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__body">
                <span class="stat-card__label">{label}</span>
                <span class="stat-card__value">
                    {move || match value.get() {
                        Some(v) => format_thousands(v),
                        None => "—".to_string(),
                    }}
                </span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(42), "42");
        assert_eq!(format_thousands(1234), "1\u{00a0}234");
        assert_eq!(format_thousands(-1234567), "-1\u{00a0}234\u{00a0}567");
    }
}
