mod common;

use common::fixtures::*;
use common::{init_logger, GeneratedPdf, TestResult};
use folio::{
    build_cv_document, build_letter_document, fit_one_page, make_colors, merge_documents,
    FitOptions, Lang, LayoutHint, TemplateId,
};
use folio_layout::{walk_blocks, Block, FlagKind, Glyph};

#[test]
fn long_profile_ats_cv_fits_one_page() -> TestResult {
    init_logger();
    let model = sample_cv();
    assert_eq!(model.profile.chars().count(), 500);
    let colors = make_colors("#2563eb");

    let artifact = fit_one_page(
        |scale| build_cv_document(TemplateId::Ats, &model, Lang::Fr, &colors, LayoutHint::Auto, scale),
        &FitOptions::default(),
    )?;
    assert!((0.8..=1.6).contains(&artifact.scale), "scale {}", artifact.scale);
    assert!(!artifact.fell_back);

    let pdf = GeneratedPdf::from_artifact(artifact)?;
    assert_pdf_page_count!(pdf, 1);
    assert_pdf_contains_text!(pdf, "Kubernetes");
    Ok(())
}

#[test]
fn very_dense_cv_shrinks_to_one_page() -> TestResult {
    init_logger();
    let model = dense_cv();
    let colors = make_colors("#2563eb");

    let artifact = fit_one_page(
        |scale| build_cv_document(TemplateId::Ats, &model, Lang::Fr, &colors, LayoutHint::Auto, scale),
        &FitOptions::default(),
    )?;
    assert!(artifact.scale >= 0.8 && artifact.scale < 1.0, "scale {}", artifact.scale);

    let pdf = GeneratedPdf::from_artifact(artifact)?;
    assert_pdf_page_count!(pdf, 1);
    Ok(())
}

#[test]
fn modern_cv_and_letter_merge_to_two_pages() -> TestResult {
    init_logger();
    let model = sample_cv();
    let letter = sample_letter();
    let colors = make_colors("#2563eb");
    let opts = FitOptions::default();

    let cv = fit_one_page(
        |scale| build_cv_document(TemplateId::Modern, &model, Lang::En, &colors, LayoutHint::Auto, scale),
        &opts,
    )?;
    let lm = fit_one_page(
        |scale| build_letter_document(&letter, &colors, LayoutHint::Auto, scale),
        &opts,
    )?;
    assert_eq!((cv.pages, lm.pages), (1, 1));

    let merged = GeneratedPdf::from_bytes(merge_documents(&[cv.bytes, lm.bytes])?)?;
    assert_pdf_page_count!(merged, 2);
    assert_pdf_contains_text!(merged, "Initech");
    Ok(())
}

#[test]
fn dark_brand_clamps_at_zero() {
    let colors = make_colors("#101010");
    let dark = colors.brand_dark();
    assert_eq!((dark.r, dark.g, dark.b), (0, 0, 0));
    assert_eq!(colors.brand().to_hex(), "#101010");
}

#[test]
fn profile_is_identical_in_ats_and_pro_max() {
    let model = sample_cv();
    let colors = make_colors("#2563eb");
    let profile = |template| {
        build_cv_document(template, &model, Lang::Fr, &colors, LayoutHint::Auto, 1.0)
            .text_fragments()
            .into_iter()
            .find(|t| t.starts_with("Platform engineer"))
            .map(String::from)
    };
    let ats = profile(TemplateId::Ats);
    assert_eq!(ats.as_deref(), Some(model.profile.as_str()));
    assert_eq!(ats, profile(TemplateId::ProMax));
}

#[test]
fn language_line_renders_two_rated_rows() -> TestResult {
    let model = folio::CvDocModel {
        lang_line: "Français (Natif), Anglais (Courant)".into(),
        ..Default::default()
    };
    let doc = build_cv_document(
        TemplateId::Modern,
        &model,
        Lang::Fr,
        &make_colors("#2563eb"),
        LayoutHint::Auto,
        1.0,
    );
    let texts = doc.text_fragments();
    assert!(texts.contains(&"Français"));
    assert!(texts.contains(&"Anglais"));

    let flags: Vec<Glyph> = doc
        .glyphs()
        .into_iter()
        .filter(|g| matches!(g, Glyph::Flag(_)))
        .collect();
    assert_eq!(flags, vec![Glyph::Flag(FlagKind::Fr), Glyph::Flag(FlagKind::En)]);

    let mut ratings = Vec::new();
    walk_blocks(&doc.blocks, &mut |block| {
        if let Block::Rating(rating) = block {
            ratings.push((rating.filled, rating.total));
        }
    });
    assert_eq!(ratings, vec![(5, 5), (4, 5)]);

    let pdf = common::render_cv(TemplateId::Modern, &model, 1.0)?;
    assert_pdf_page_count!(pdf, 1);
    Ok(())
}
