use crate::model::{Language, RouteOption};

/// What a switch requires from the presentation layer. Switching route
/// options rebuilds the map as well as the cards; switching languages
/// deliberately leaves the map alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Switch {
    NoOp,
    Cards,
    CardsAndMap,
}

impl Switch {
    pub fn rerenders_cards(self) -> bool {
        !matches!(self, Switch::NoOp)
    }

    pub fn rebuilds_map(self) -> bool {
        matches!(self, Switch::CardsAndMap)
    }
}

/// Currently selected route option and language. Constructed per consumer,
/// never a process-wide singleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    active_option: RouteOption,
    active_language: Language,
}

impl ViewState {
    pub fn new(option: RouteOption, language: Language) -> Self {
        Self {
            active_option: option,
            active_language: language,
        }
    }

    pub fn active_option(&self) -> RouteOption {
        self.active_option
    }

    pub fn active_language(&self) -> Language {
        self.active_language
    }

    /// Activate a route option. A no-op result doubles as the re-entrancy
    /// guard against redundant map teardown on rapid repeat switches.
    pub fn switch_option(&mut self, option: RouteOption) -> Switch {
        if self.active_option == option {
            return Switch::NoOp;
        }

        self.active_option = option;
        Switch::CardsAndMap
    }

    pub fn switch_language(&mut self, language: Language) -> Switch {
        if self.active_language == language {
            return Switch::NoOp;
        }

        self.active_language = language;
        Switch::Cards
    }
}
