use crate::base14::{Base14Source, HELVETICA};
use crate::table::FontTable;
use folio_traits::{FontError, FontSource};
use once_cell::sync::{Lazy, OnceCell};
use std::sync::Arc;

/// Loads a [`FontTable`] on first use and shares it afterwards.
///
/// A failed load is not cached; the next call retries.
#[derive(Debug)]
pub struct FontCache {
    source: Arc<dyn FontSource>,
    family: String,
    table: OnceCell<Arc<FontTable>>,
}

impl FontCache {
    pub fn new(source: Arc<dyn FontSource>, family: impl Into<String>) -> Self {
        Self {
            source,
            family: family.into(),
            table: OnceCell::new(),
        }
    }

    /// The compiled-in Helvetica family.
    pub fn builtin() -> Self {
        Self::new(Arc::new(Base14Source::new()), HELVETICA)
    }

    pub fn get(&self) -> Result<Arc<FontTable>, FontError> {
        self.table
            .get_or_try_init(|| {
                log::debug!(
                    "Loading font family '{}' from {}",
                    self.family,
                    self.source.name()
                );
                FontTable::load(self.source.as_ref(), &self.family).map(Arc::new)
            })
            .cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.table.get().is_some()
    }
}

static FONTS: Lazy<FontCache> = Lazy::new(FontCache::builtin);

/// The process-wide font table used by layout and rendering.
pub fn fonts() -> Result<Arc<FontTable>, FontError> {
    FONTS.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_style::FontVariant;
    use folio_traits::FaceMetrics;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct EmptySource;

    impl FontSource for EmptySource {
        fn face(&self, family: &str, _variant: FontVariant) -> Result<FaceMetrics, FontError> {
            Err(FontError::MissingFamily(family.to_string()))
        }

        fn families(&self) -> Vec<String> {
            Vec::new()
        }

        fn name(&self) -> &'static str {
            "EmptySource"
        }
    }

    #[derive(Debug, Default)]
    struct CountingSource {
        inner: Base14Source,
        calls: AtomicUsize,
    }

    impl FontSource for CountingSource {
        fn face(&self, family: &str, variant: FontVariant) -> Result<FaceMetrics, FontError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.face(family, variant)
        }

        fn families(&self) -> Vec<String> {
            self.inner.families()
        }

        fn name(&self) -> &'static str {
            "CountingSource"
        }
    }

    #[test]
    fn missing_family_is_fatal_and_not_cached() {
        let cache = FontCache::new(Arc::new(EmptySource), HELVETICA);
        assert_eq!(
            cache.get().unwrap_err(),
            FontError::MissingFamily(HELVETICA.to_string())
        );
        assert!(!cache.is_loaded());
    }

    #[test]
    fn table_loads_once() {
        let source = Arc::new(CountingSource::default());
        let cache = FontCache::new(source.clone(), HELVETICA);
        let a = cache.get().unwrap();
        let b = cache.get().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(source.calls.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn concurrent_first_callers_share_one_load() {
        let source = Arc::new(CountingSource::default());
        let cache = FontCache::new(source.clone(), HELVETICA);
        let tables: Vec<Arc<FontTable>> = std::thread::scope(|scope| {
            let workers: Vec<_> = (0..8).map(|_| scope.spawn(|| cache.get().unwrap())).collect();
            workers.into_iter().map(|w| w.join().unwrap()).collect()
        });
        assert_eq!(source.calls.load(Ordering::SeqCst), 4);
        assert!(tables.iter().all(|t| Arc::ptr_eq(t, &tables[0])));
    }

    #[test]
    fn global_table_is_helvetica() {
        let table = fonts().unwrap();
        assert_eq!(table.family(), HELVETICA);
    }
}
