use super::*;

#[test]
fn default_document_is_first_in_catalog() {
    assert_eq!(Document::default(), Document::ALL[0]);
    assert_eq!(Document::default().id(), "pdf1");
}

#[test]
fn catalog_ids_and_names() {
    let pairs: Vec<_> = Document::ALL.iter().map(|d| (d.id(), d.name())).collect();
    assert_eq!(
        pairs,
        vec![("pdf1", "DNH DCR"), ("pdf2", "Gujarat DCR"), ("pdf3", "Diu DCR")]
    );
}

#[test]
fn from_id_resolves_every_catalog_entry() {
    for doc in Document::ALL {
        assert_eq!(Document::from_id(doc.id()), Some(doc));
    }
}

#[test]
fn from_id_rejects_unknown_ids() {
    assert_eq!(Document::from_id("pdf4"), None);
    assert_eq!(Document::from_id(""), None);
    assert_eq!(Document::from_id("PDF1"), None);
}
