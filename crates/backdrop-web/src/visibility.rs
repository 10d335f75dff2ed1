// Which content panel is visible for a given section.

use crate::constants::PANEL_ID_PREFIX;
use backdrop_core::Section;

/// Element id of the panel for `section`. `Home` has none.
pub fn panel_id(section: Section) -> Option<String> {
    (section != Section::Home).then(|| format!("{}{}", PANEL_ID_PREFIX, section.id()))
}

/// Every panel id paired with whether it should show once `arrived` is current.
pub fn panel_states(arrived: Section) -> impl Iterator<Item = (String, bool)> {
    Section::ALL
        .into_iter()
        .filter_map(move |s| panel_id(s).map(|id| (id, s == arrived)))
}
