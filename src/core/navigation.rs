//! View selection.
//!
//! The only session state outside the answer store: which view is showing
//! and, for section views, which section.

/// Top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Organization profile form
    #[default]
    CompanyInfo,
    /// Welcome and guidance
    Dashboard,
    /// Questions of one section
    Section,
    /// Compiled document gallery
    Documents,
    /// Background on ISO 9001:2015
    IsoInfo,
}

impl View {
    /// Sidebar title.
    pub const fn title(self) -> &'static str {
        match self {
            Self::CompanyInfo => "Company Information",
            Self::Dashboard => "Dashboard / Home",
            Self::Section => "QMS Section",
            Self::Documents => "View Generated Documents",
            Self::IsoInfo => "About ISO 9001:2015",
        }
    }
}

/// Current view plus the selected section, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    view: View,
    section_id: Option<String>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch view. The section id is kept only for [`View::Section`].
    pub fn navigate(&mut self, view: View, section_id: Option<&str>) {
        self.view = view;
        self.section_id = match view {
            View::Section => section_id.map(str::to_string),
            _ => None,
        };
    }

    /// Open a section view.
    pub fn open_section(&mut self, section_id: &str) {
        self.navigate(View::Section, Some(section_id));
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn section_id(&self) -> Option<&str> {
        self.section_id.as_deref()
    }
}
