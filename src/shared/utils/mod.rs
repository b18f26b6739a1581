pub mod debounce;
pub mod recent_searches;
pub mod reveal;
pub mod search_panel;
pub mod storage;
pub mod timer;
pub mod validation;

pub use debounce::{Debouncer, Ticket};
pub use recent_searches::RecentSearches;
pub use reveal::{RevealMachine, RevealPhase};
pub use search_panel::{NavKey, PanelAction, PanelView, SearchPanel};
