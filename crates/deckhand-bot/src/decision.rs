use core::fmt;

/// One reply to a decision request, rendered on the wire as
/// `ACTION <card>`, `BUY <card>`, or `END_TURN`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Action(String),
    Buy(String),
    EndTurn,
}

impl Decision {
    pub fn action(card: impl Into<String>) -> Self {
        Self::Action(card.into())
    }

    pub fn buy(card: impl Into<String>) -> Self {
        Self::Buy(card.into())
    }

    pub fn bought_card(&self) -> Option<&str> {
        match self {
            Self::Buy(card) => Some(card),
            _ => None,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Action(card) => write!(f, "ACTION {card}"),
            Self::Buy(card) => write!(f, "BUY {card}"),
            Self::EndTurn => f.write_str("END_TURN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Decision;

    #[test]
    fn renders_wire_strings() {
        assert_eq!(Decision::action("chapel").to_string(), "ACTION chapel");
        assert_eq!(Decision::buy("province").to_string(), "BUY province");
        assert_eq!(Decision::EndTurn.to_string(), "END_TURN");
    }

    #[test]
    fn bought_card_only_for_buys() {
        assert_eq!(Decision::buy("gold").bought_card(), Some("gold"));
        assert_eq!(Decision::action("gold").bought_card(), None);
        assert_eq!(Decision::EndTurn.bought_card(), None);
    }
}
