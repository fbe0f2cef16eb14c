//! Item cards held in a player's hand.

/// Catalog identifier of an item card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub u16);

/// Where a card may be played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ItemScope {
    /// Only during a battle.
    Battle,
    /// Only on the board between moves.
    Board,
}

/// A single item card. Two cards are the same card when every field matches.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemCard {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub scope: ItemScope,
}

impl ItemCard {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        description: impl Into<String>,
        scope: ItemScope,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            scope,
        }
    }

    pub fn skip_monster() -> Self {
        Self::new(
            ItemId(4),
            "Skip Monster (In Battle)",
            "Skip a Monster. Battle Only",
            ItemScope::Battle,
        )
    }

    pub fn summon_monster() -> Self {
        Self::new(
            ItemId(5),
            "Summon Monster (On Board)",
            "Spawn a Monster on a tile. Board Only",
            ItemScope::Board,
        )
    }

    pub fn player_turn_skip() -> Self {
        Self::new(
            ItemId(6),
            "Player Turn Skip (On Board)",
            "Skip a Target Players turn. Board Only",
            ItemScope::Board,
        )
    }

    /// The hand dealt to the first seat when a game starts.
    pub fn starting_hand() -> Vec<Self> {
        vec![
            Self::skip_monster(),
            Self::summon_monster(),
            Self::player_turn_skip(),
        ]
    }
}
