use serde::{Deserialize, Serialize};

/// The closed grammar of UI primitives
///
/// Every node in a capture carries exactly one of these 23 roles. Capture
/// producers classify real page structure onto the nearest primitive, and
/// consumers can pattern-match exhaustively: the set is fixed, so no
/// component in this crate carries a wildcard arm for it. Rejecting an
/// unknown wire string is the validator's job, through [`Role::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Page,
    Header,
    Footer,
    Nav,
    Main,
    Sidebar,
    Section,
    Card,
    List,
    ListItem,
    Table,
    Form,
    Input,
    Select,
    Checkbox,
    Button,
    Link,
    Image,
    Video,
    Heading,
    Text,
    Icon,
    Modal,
}

impl Role {
    /// Every role, in canonical order (also the legend order)
    pub const ALL: [Role; 23] = [
        Role::Page,
        Role::Header,
        Role::Footer,
        Role::Nav,
        Role::Main,
        Role::Sidebar,
        Role::Section,
        Role::Card,
        Role::List,
        Role::ListItem,
        Role::Table,
        Role::Form,
        Role::Input,
        Role::Select,
        Role::Checkbox,
        Role::Button,
        Role::Link,
        Role::Image,
        Role::Video,
        Role::Heading,
        Role::Text,
        Role::Icon,
        Role::Modal,
    ];

    /// Wire name of this role (`LIST_ITEM`, `BUTTON`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Page => "PAGE",
            Role::Header => "HEADER",
            Role::Footer => "FOOTER",
            Role::Nav => "NAV",
            Role::Main => "MAIN",
            Role::Sidebar => "SIDEBAR",
            Role::Section => "SECTION",
            Role::Card => "CARD",
            Role::List => "LIST",
            Role::ListItem => "LIST_ITEM",
            Role::Table => "TABLE",
            Role::Form => "FORM",
            Role::Input => "INPUT",
            Role::Select => "SELECT",
            Role::Checkbox => "CHECKBOX",
            Role::Button => "BUTTON",
            Role::Link => "LINK",
            Role::Image => "IMAGE",
            Role::Video => "VIDEO",
            Role::Heading => "HEADING",
            Role::Text => "TEXT",
            Role::Icon => "ICON",
            Role::Modal => "MODAL",
        }
    }

    /// Fixed 3-4 character abbreviation used in wireframe labels
    ///
    /// Abbreviations are unique across the grammar and stable across
    /// releases; rendered output and downstream tooling both key off them.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Role::Page => "PAGE",
            Role::Header => "HDR",
            Role::Footer => "FTR",
            Role::Nav => "NAV",
            Role::Main => "MAIN",
            Role::Sidebar => "SIDE",
            Role::Section => "SECT",
            Role::Card => "CARD",
            Role::List => "LIST",
            Role::ListItem => "ITEM",
            Role::Table => "TBL",
            Role::Form => "FORM",
            Role::Input => "INP",
            Role::Select => "SEL",
            Role::Checkbox => "CHK",
            Role::Button => "BTN",
            Role::Link => "LNK",
            Role::Image => "IMG",
            Role::Video => "VID",
            Role::Heading => "HDG",
            Role::Text => "TXT",
            Role::Icon => "ICO",
            Role::Modal => "MDL",
        }
    }

    /// Parse a wire name; `None` when the string is outside the grammar
    pub fn parse(raw: &str) -> Option<Role> {
        Role::ALL.iter().copied().find(|role| role.as_str() == raw)
    }
}
