//! Static catalog of the regulation documents the assistant can answer about.
//!
//! DESIGN
//! ======
//! The catalog is closed: a `Document` can only be one of the compiled-in
//! variants, so "active document is always in the catalog" holds by
//! construction. The string id is the path segment used by the proxy.

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

/// One of the three regulation texts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Document {
    #[default]
    DnhDcr,
    GujaratDcr,
    DiuDcr,
}

impl Document {
    /// Catalog order, as shown in the sidebar.
    pub const ALL: [Document; 3] = [Document::DnhDcr, Document::GujaratDcr, Document::DiuDcr];

    /// Identifier used to scope proxy requests (`pdf1`..`pdf3`).
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::DnhDcr => "pdf1",
            Self::GujaratDcr => "pdf2",
            Self::DiuDcr => "pdf3",
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DnhDcr => "DNH DCR",
            Self::GujaratDcr => "Gujarat DCR",
            Self::DiuDcr => "Diu DCR",
        }
    }

    /// Resolve a document from its identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|doc| doc.id() == id)
    }
}
