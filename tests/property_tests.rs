mod common;

use common::fixtures::*;
use common::{init_logger, render_cv, GeneratedPdf, TestResult};
use folio::{
    build_cv_document, build_letter_document, count_pages, darken, fit_one_page, make_colors,
    merge_documents, normalize_hex, render_document, CvDocModel, FitOptions, Lang, LayoutHint,
    TemplateId,
};
use folio_layout::SectionKind;

#[test]
fn rendering_is_byte_deterministic() -> TestResult {
    let model = sample_cv();
    for template in TemplateId::ALL {
        let a = render_cv(template, &model, 1.0)?;
        let b = render_cv(template, &model, 1.0)?;
        assert_eq!(a.bytes, b.bytes, "{template} output differs between runs");
    }
    Ok(())
}

#[test]
fn every_template_prints_the_same_words() -> TestResult {
    init_logger();
    let model = sample_cv();
    let words = [
        "Kubernetes",
        "runbooks",
        "Terraform",
        "Grafana",
        "Mentoring",
        "Climbing",
        "Photography",
        "Anglais",
        "Acme",
        "Globex",
    ];
    for template in TemplateId::ALL {
        let pdf = render_cv(template, &model, 1.0)?;
        for word in words {
            assert_pdf_contains_text!(pdf, word);
        }
        assert_pdf_has_font!(pdf, "Helvetica");
    }
    Ok(())
}

#[test]
fn fitting_never_leaves_a_better_scale_untested() -> TestResult {
    init_logger();
    let colors = make_colors("#7c3aed");
    for model in [sample_cv(), dense_cv()] {
        for template in [TemplateId::Classic, TemplateId::Tech, TemplateId::ProMax] {
            let opts = FitOptions::default();
            let artifact = fit_one_page(
                |scale| build_cv_document(template, &model, Lang::En, &colors, LayoutHint::Auto, scale),
                &opts,
            )?;
            assert!(artifact.scale >= opts.min && artifact.scale <= opts.max);
            if !artifact.fell_back {
                assert!(count_pages(&artifact.bytes)? <= 1);
                for trial in &artifact.trials {
                    if trial.scale > artifact.scale + 0.01 {
                        assert!(trial.pages > 1, "{template}: {trial:?} also fits");
                    }
                }
            }
        }
    }
    Ok(())
}

#[test]
fn page_count_grows_with_scale() -> TestResult {
    let model = dense_cv();
    for template in [TemplateId::Ats, TemplateId::Classic, TemplateId::Elegant] {
        let mut previous = 0;
        for scale in [0.8, 1.0, 1.2, 1.4, 1.6] {
            let pages = render_cv(template, &model, scale)?.page_count();
            assert!(pages >= previous, "{template} at {scale}: {pages} < {previous}");
            previous = pages;
        }
        assert!(previous > 1, "{template} never overflowed");
    }
    Ok(())
}

#[test]
fn merged_page_count_is_the_sum() -> TestResult {
    let colors = make_colors("#2563eb");
    let long = render_document(&build_cv_document(
        TemplateId::Classic,
        &dense_cv(),
        Lang::Fr,
        &colors,
        LayoutHint::Spacious,
        1.6,
    ))?;
    let short = render_document(&build_letter_document(
        &sample_letter(),
        &colors,
        LayoutHint::Auto,
        1.0,
    ))?;
    let (a, b) = (count_pages(&long)?, count_pages(&short)?);
    assert!(a > 1);

    let merged = merge_documents(&[long.as_slice(), short.as_slice()])?;
    assert_eq!(count_pages(&merged)?, a + b);

    let twice = merge_documents(&[merged.as_slice(), short.as_slice()])?;
    assert_eq!(count_pages(&twice)?, a + 2 * b);
    Ok(())
}

#[test]
fn merging_nothing_is_an_error() {
    let empty: [&[u8]; 0] = [];
    assert!(merge_documents(&empty).is_err());
}

#[test]
fn color_derivation_stays_in_bounds() {
    let inputs = ["#000", "fff", "#2563EB", "#101010", "abcdef", "#7f7f7f", "nope", ""];
    for input in inputs {
        let normalized = normalize_hex(input);
        assert_eq!(normalize_hex(&normalized), normalized);
        assert_eq!(normalized.len(), 7);
        for amount in [-300, -40, 0, 40, 300] {
            let dark = darken(&normalized, amount);
            assert_eq!(normalize_hex(&dark), dark, "darken({normalized}, {amount})");
        }
    }
    assert_eq!(darken("#ffffff", -40), "#ffffff");
    assert_eq!(darken("#123456", 300), "#000000");
}

#[test]
fn degenerate_model_renders_everywhere() -> TestResult {
    let model = CvDocModel {
        name: "Solo".into(),
        profile: "Only a profile.".into(),
        ..Default::default()
    };
    for template in TemplateId::ALL {
        let doc = build_cv_document(
            template,
            &model,
            Lang::Fr,
            &make_colors("#2563eb"),
            LayoutHint::Auto,
            1.0,
        );
        let sections = doc.sections();
        for absent in [
            SectionKind::Experience,
            SectionKind::Interests,
            SectionKind::Certifications,
            SectionKind::Languages,
        ] {
            assert!(!sections.contains(&absent), "{template} has {absent:?}");
        }
        assert!(sections.contains(&SectionKind::Profile));

        let pdf = GeneratedPdf::from_bytes(render_document(&doc)?)?;
        assert_pdf_page_count!(pdf, 1);
        assert_pdf_contains_text!(pdf, "Solo");
    }
    Ok(())
}
