//! Scale fitting.
//!
//! Finds the largest typographic scale whose rendering stays within a page
//! budget, by bisection over an injectable [`ScaleOracle`]. The search
//! assumes page count never decreases as scale grows.

mod cancel;
mod error;
mod oracle;
mod options;
mod search;

pub use cancel::CancelToken;
pub use error::FitError;
pub use oracle::{Rendition, RenderOracle, ScaleOracle};
pub use options::FitOptions;
pub use search::{fit, fit_with_cancel, FittedArtifact, Trial};

use folio_layout::LayoutDocument;
use folio_render_core::DocumentRenderer;

/// Fits `build` against a real renderer.
pub fn fit_document<R, B>(renderer: &R, build: B, opts: &FitOptions) -> Result<FittedArtifact, FitError>
where
    R: DocumentRenderer + ?Sized,
    B: Fn(f64) -> LayoutDocument,
{
    fit(&RenderOracle::new(renderer, build), opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_layout::{Block, Insets, PageSetup, TextStyle};
    use folio_render_lopdf::LopdfRenderer;
    use folio_types::Color;

    fn lines(scale: f64) -> LayoutDocument {
        let style = TextStyle::regular(10.0 * scale as f32, Color::BLACK);
        let blocks = (0..40)
            .map(|i| Block::text(format!("Entry {i}"), style))
            .collect();
        LayoutDocument::new(PageSetup::a4(Insets::uniform(40.0))).with_blocks(blocks)
    }

    #[test]
    fn fits_a_real_rendering_to_one_page() {
        let renderer = LopdfRenderer::with_global_fonts().unwrap();
        let artifact = fit_document(&renderer, lines, &FitOptions::default()).unwrap();
        assert_eq!(renderer.count_pages(&artifact.bytes).unwrap(), 1);
        assert!(artifact.scale > 1.3 && artifact.scale <= 1.6, "scale {}", artifact.scale);
        assert!(
            artifact
                .trials
                .iter()
                .any(|p| p.pages > 1 && p.scale > artifact.scale),
            "search never overshot"
        );
    }
}
