//! Section navigation and scroll-derived UI state.

use crate::config::SCROLL_TOP_THRESHOLD_PX;

/// Page sections, in document order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Lab,
    Experiences,
    Contact,
}

/// Sections listed in the navigation bar. Contact has its own call-to-action.
pub const NAV_ITEMS: [Section; 5] = [
    Section::Home,
    Section::About,
    Section::Projects,
    Section::Lab,
    Section::Experiences,
];

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Lab,
        Section::Experiences,
        Section::Contact,
    ];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Lab => "lab",
            Section::Experiences => "experiences",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Lab => "Lab",
            Section::Experiences => "Experiences",
            Section::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }
}

/// Navigation bar state: highlighted section and the mobile drop-down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub active: Section,
    pub menu_open: bool,
}

impl NavState {
    /// Highlights `section` and collapses the mobile menu.
    pub fn navigate(&mut self, section: Section) {
        self.active = section;
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }
}

/// Whether the scroll-to-top control is visible at this vertical offset.
pub fn show_scroll_to_top(offset: f64) -> bool {
    offset > SCROLL_TOP_THRESHOLD_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold() {
        assert!(!show_scroll_to_top(0.0));
        assert!(!show_scroll_to_top(399.0));
        assert!(!show_scroll_to_top(400.0));
        assert!(show_scroll_to_top(401.0));
    }

    #[test]
    fn test_default_section_is_home() {
        assert_eq!(NavState::default().active, Section::Home);
        assert!(!NavState::default().menu_open);
    }

    #[test]
    fn test_navigate_closes_menu() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        assert!(nav.menu_open);

        nav.navigate(Section::Projects);
        assert!(nav.is_active(Section::Projects));
        assert!(!nav.menu_open);
    }

    #[test]
    fn test_section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("blog"), None);
    }

    #[test]
    fn test_contact_not_in_nav_items() {
        assert!(!NAV_ITEMS.contains(&Section::Contact));
    }
}
