//! Trade side and cash-flow direction

use crate::token::TokenCategory;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Instruction side (buy or sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Report direction from the instructing entity's cash-flow view.
    ///
    /// A sell brings money in, a buy sends it out.
    pub fn flow(&self) -> FlowDirection {
        match self {
            Side::Sell => FlowDirection::Incoming,
            Side::Buy => FlowDirection::Outgoing,
        }
    }

    /// Single-letter code used on instruction tickets
    pub fn code(&self) -> &'static str {
        match self {
            Side::Buy => "B",
            Side::Sell => "S",
        }
    }
}

impl TokenCategory for Side {
    const CATEGORY: &'static str = "direction";

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "B" | "BUY" => Some(Side::Buy),
            "S" | "SELL" => Some(Side::Sell),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Settlement cash-flow direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowDirection {
    Incoming,
    Outgoing,
}

impl fmt::Display for FlowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowDirection::Incoming => write!(f, "incoming"),
            FlowDirection::Outgoing => write!(f, "outgoing"),
        }
    }
}
