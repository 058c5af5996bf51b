//! PDF composition utilities.
//!
//! Merging is purely structural: pages and everything they reference are
//! deep-copied into the first document's page tree. Content streams are
//! carried over unchanged, so every page renders exactly as it did in its
//! standalone document.

mod error;

pub use error::ComposerError;

use lopdf::{Document, Object, ObjectId};
use std::collections::HashMap;

/// Tracks source-to-target object ids while copying between documents.
struct ObjectCopier<'a> {
    source_doc: &'a Document,
    target_doc: &'a mut Document,
    id_map: HashMap<ObjectId, ObjectId>,
}

impl<'a> ObjectCopier<'a> {
    fn new(source_doc: &'a Document, target_doc: &'a mut Document) -> Self {
        Self {
            source_doc,
            target_doc,
            id_map: HashMap::new(),
        }
    }

    /// Deep copies an object and everything it references. Each source
    /// object is copied at most once.
    fn copy_object(&mut self, source_id: ObjectId) -> Result<ObjectId, lopdf::Error> {
        if let Some(target_id) = self.id_map.get(&source_id) {
            return Ok(*target_id);
        }

        // Reserve the id before recursing so reference cycles terminate.
        let new_id = self.target_doc.add_object(Object::Null);
        self.id_map.insert(source_id, new_id);

        let obj = self.source_doc.get_object(source_id)?.clone();
        let new_obj = self.remap_references(obj)?;
        match self.target_doc.objects.get_mut(&new_id) {
            Some(target_obj) => *target_obj = new_obj,
            None => return Err(lopdf::Error::ObjectNotFound(new_id)),
        }
        Ok(new_id)
    }

    /// Copies a page without following its `/Parent` link, which would
    /// otherwise drag the whole source page tree along.
    fn copy_page(&mut self, page_id: ObjectId) -> Result<ObjectId, lopdf::Error> {
        let mut page = self.source_doc.get_dictionary(page_id)?.clone();
        page.remove(b"Parent");

        let new_id = self.target_doc.add_object(Object::Null);
        self.id_map.insert(page_id, new_id);
        let new_obj = self.remap_references(Object::Dictionary(page))?;
        match self.target_doc.objects.get_mut(&new_id) {
            Some(target_obj) => *target_obj = new_obj,
            None => return Err(lopdf::Error::ObjectNotFound(new_id)),
        }
        Ok(new_id)
    }

    fn remap_references(&mut self, obj: Object) -> Result<Object, lopdf::Error> {
        match obj {
            Object::Reference(id) => Ok(Object::Reference(self.copy_object(id)?)),
            Object::Array(arr) => {
                let new_arr = arr
                    .into_iter()
                    .map(|o| self.remap_references(o))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Object::Array(new_arr))
            }
            Object::Dictionary(mut dict) => {
                for (_, value) in dict.iter_mut() {
                    *value = self.remap_references(value.clone())?;
                }
                Ok(Object::Dictionary(dict))
            }
            Object::Stream(mut stream) => {
                for (_, value) in stream.dict.iter_mut() {
                    *value = self.remap_references(value.clone())?;
                }
                Ok(Object::Stream(stream))
            }
            _ => Ok(obj),
        }
    }
}

/// Appends every page of `source`, in order, to the end of `target`.
pub fn merge_documents(target: &mut Document, source: &Document) -> Result<(), ComposerError> {
    let source_pages = source.get_pages();
    if source_pages.is_empty() {
        return Ok(());
    }

    let root_id = target.trailer.get(b"Root")?.as_reference()?;
    let pages_id = target.get_dictionary(root_id)?.get(b"Pages")?.as_reference()?;

    // get_pages is keyed by page number, so iteration is already in order
    let mut copier = ObjectCopier::new(source, target);
    let mut copied = Vec::with_capacity(source_pages.len());
    for page_id in source_pages.values() {
        copied.push(copier.copy_page(*page_id)?);
    }

    for page_id in &copied {
        if let Ok(Object::Dictionary(page_dict)) = target.get_object_mut(*page_id) {
            page_dict.set("Parent", Object::Reference(pages_id));
        }
    }

    let pages_dict = target.get_object_mut(pages_id)?.as_dict_mut()?;
    let mut kids = pages_dict.get(b"Kids")?.as_array()?.clone();
    let original_count = pages_dict.get(b"Count")?.as_i64()?;
    kids.extend(copied.iter().map(|id| Object::Reference(*id)));
    pages_dict.set("Kids", Object::Array(kids));
    pages_dict.set("Count", original_count + copied.len() as i64);

    Ok(())
}

/// Concatenates serialized PDFs, in input order, into one PDF.
///
/// A single input is returned unchanged. The merged document keeps the
/// first input's metadata.
pub fn merge_pdfs<B: AsRef<[u8]>>(parts: &[B]) -> Result<Vec<u8>, ComposerError> {
    let (first, rest) = parts.split_first().ok_or(ComposerError::NoDocuments)?;
    if rest.is_empty() {
        return Ok(first.as_ref().to_vec());
    }

    let mut target = Document::load_mem(first.as_ref())?;
    for part in rest {
        let source = Document::load_mem(part.as_ref())?;
        merge_documents(&mut target, &source)?;
    }
    log::debug!(
        "Merged {} document(s) into {} page(s)",
        parts.len(),
        target.get_pages().len()
    );

    let mut buffer = Vec::new();
    target.save_to(&mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Stream, StringFormat};

    /// A document whose pages each show "<prefix> <n>".
    fn create_dummy_pdf(num_pages: u32, text_prefix: &str) -> Document {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut page_ids = vec![];
        for i in 1..=num_pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![100.into(), 700.into()]),
                    Operation::new(
                        "Tj",
                        vec![Object::String(
                            format!("{} {}", text_prefix, i).into_bytes(),
                            StringFormat::Literal,
                        )],
                    ),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            page_ids.push(page_id.into());
        }

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids,
            "Count" => num_pages as i64,
        };
        doc.objects.insert(pages_id, pages_dict.into());

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        doc
    }

    fn to_bytes(mut doc: Document) -> Vec<u8> {
        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        buffer
    }

    fn page_text(doc: &Document, number: u32) -> String {
        let pages = doc.get_pages();
        let content = doc.get_page_content(pages[&number]).unwrap();
        String::from_utf8_lossy(&content).into_owned()
    }

    #[test]
    fn test_merge_documents_appends_in_order() {
        let mut target_doc = create_dummy_pdf(2, "Target Page");
        let source_doc = create_dummy_pdf(3, "Source Page");

        merge_documents(&mut target_doc, &source_doc).unwrap();

        assert_eq!(target_doc.get_pages().len(), 5);
        assert!(page_text(&target_doc, 2).contains("Target Page 2"));
        assert!(page_text(&target_doc, 3).contains("Source Page 1"));
        assert!(page_text(&target_doc, 5).contains("Source Page 3"));
    }

    #[test]
    fn test_copied_pages_join_the_target_tree() {
        let mut target_doc = create_dummy_pdf(1, "A");
        let source_doc = create_dummy_pdf(2, "B");
        merge_documents(&mut target_doc, &source_doc).unwrap();

        let root = target_doc.trailer.get(b"Root").unwrap().as_reference().unwrap();
        let pages_id = target_doc
            .get_dictionary(root)
            .unwrap()
            .get(b"Pages")
            .unwrap()
            .as_reference()
            .unwrap();
        for page_id in target_doc.get_pages().values() {
            let parent = target_doc
                .get_dictionary(*page_id)
                .unwrap()
                .get(b"Parent")
                .unwrap()
                .as_reference()
                .unwrap();
            assert_eq!(parent, pages_id);
        }
        // one shared font/resources pair copied, not one per page
        let fonts = target_doc
            .objects
            .values()
            .filter(|o| {
                o.as_dict()
                    .and_then(|d| d.get(b"Type"))
                    .and_then(|t| t.as_name())
                    .is_ok_and(|n| n == b"Font")
            })
            .count();
        assert_eq!(fonts, 2);
    }

    #[test]
    fn test_merge_pdfs_sums_page_counts() {
        let a = to_bytes(create_dummy_pdf(1, "CV"));
        let b = to_bytes(create_dummy_pdf(2, "Letter"));
        let merged = merge_pdfs(&[a, b]).unwrap();

        let doc = Document::load_mem(&merged).unwrap();
        assert_eq!(doc.get_pages().len(), 3);
        assert!(page_text(&doc, 1).contains("CV 1"));
        assert!(page_text(&doc, 3).contains("Letter 2"));
    }

    #[test]
    fn test_merge_single_document_is_a_copy() {
        let a = to_bytes(create_dummy_pdf(2, "Only"));
        assert_eq!(merge_pdfs(&[a.clone()]).unwrap(), a);
    }

    #[test]
    fn test_merge_nothing_is_an_error() {
        let empty: [Vec<u8>; 0] = [];
        assert!(matches!(merge_pdfs(&empty), Err(ComposerError::NoDocuments)));
    }

    #[test]
    fn test_merge_rejects_garbage() {
        let a = to_bytes(create_dummy_pdf(1, "Ok"));
        let result = merge_pdfs(&[a, b"garbage".to_vec()]);
        assert!(matches!(result, Err(ComposerError::Pdf(_))));
    }
}
