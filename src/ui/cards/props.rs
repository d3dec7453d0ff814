//! Props for the card gallery.
//!
//! Cards are pure render-side data: a display name plus an optional
//! action, which is either a text label or a number series. There is no
//! card state and no transitions.

/// What a card's action row shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    Label(String),
    Series(Vec<i64>),
}

impl CardAction {
    pub fn text(&self) -> String {
        match self {
            CardAction::Label(label) => label.clone(),
            CardAction::Series(numbers) => numbers
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardProps {
    pub name: String,
    pub action: Option<CardAction>,
}

impl CardProps {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            action: None,
        }
    }

    pub fn with_label(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            action: Some(CardAction::Label(label.into())),
        }
    }

    pub fn with_series(name: impl Into<String>, series: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            action: Some(CardAction::Series(series)),
        }
    }
}

/// The fixed demo set: one card per props shape.
pub fn demo_cards() -> Vec<CardProps> {
    vec![
        CardProps::with_label("MacBook", "More about"),
        CardProps::with_series("Hp", vec![1, 2, 3]),
        CardProps::new("Asus"),
    ]
}

#[cfg(test)]
mod tests {
    use super::{demo_cards, CardAction, CardProps};

    #[test]
    fn label_text_is_verbatim() {
        let action = CardAction::Label("More about".to_string());
        assert_eq!(action.text(), "More about");
    }

    #[test]
    fn series_text_joins_numbers() {
        let action = CardAction::Series(vec![1, 2, 3]);
        assert_eq!(action.text(), "1, 2, 3");
    }

    #[test]
    fn demo_set_covers_all_props_shapes() {
        let cards = demo_cards();
        assert_eq!(cards.len(), 3);
        assert!(matches!(cards[0].action, Some(CardAction::Label(_))));
        assert!(matches!(cards[1].action, Some(CardAction::Series(_))));
        assert_eq!(cards[2], CardProps::new("Asus"));
    }
}
