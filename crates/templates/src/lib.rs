//! The template registry.
//!
//! [`build_cv_document`] dispatches a [`TemplateId`] to its renderer and
//! [`build_letter_document`] lays out the cover letter. Both are pure: the
//! same inputs always produce the same [`LayoutDocument`].
//!
//! Every renderer emits each model string as its own text run, unchanged, so
//! switching templates never drops or rewrites content.

mod catalogue;
mod cv;
mod hint;
mod id;
mod kit;
mod labels;
mod letter;
mod volume;

pub use catalogue::{catalogue, TemplateMeta};
pub use hint::{LayoutHint, MAX_EFFECTIVE_SCALE, MIN_EFFECTIVE_SCALE};
pub use id::{TemplateError, TemplateId};
pub use labels::Labels;
pub use letter::build_letter_document;
pub use volume::{ats_typography, content_volume, prepare, truncate_profile, AtsTypography};

use folio_layout::LayoutDocument;
use folio_model::{CvDocModel, Lang};
use folio_style::PdfColors;

/// Lays out a CV with the given template at `scale` (before the hint is applied).
pub fn build_cv_document(
    id: TemplateId,
    model: &CvDocModel,
    lang: Lang,
    colors: &PdfColors,
    hint: LayoutHint,
    scale: f64,
) -> LayoutDocument {
    let prepared = prepare(model);
    let ctx = cv::Context {
        model: &*prepared.model,
        labels: Labels::for_lang(lang),
        colors: *colors,
        scale: hint.apply(scale),
        volume: prepared.volume,
    };
    cv::render(id, &ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_layout::{walk_blocks, Block, FlagKind, Glyph, SectionKind};
    use folio_model::{ExperienceEntry, SkillCategory, Skills};
    use folio_style::make_colors;
    use std::collections::BTreeSet;

    fn model() -> CvDocModel {
        let mut skills = Skills::new();
        skills.extend(SkillCategory::Cloud, ["AWS", "Azure"].map(String::from));
        skills.extend(SkillCategory::Tools, ["Terraform", "Git"].map(String::from));
        skills.push(SkillCategory::Soft, "Pédagogie");
        CvDocModel {
            name: "Jane Doe".into(),
            title: "Ingénieure cloud".into(),
            contact_line: "jane@example.com | 06 12 34 56 78 | Lyon".into(),
            profile: "Ingénieure passionnée par l'automatisation et la fiabilité.".into(),
            skills,
            xp: vec![
                ExperienceEntry {
                    company: "Acme".into(),
                    city: Some("Paris".into()),
                    role: "SRE".into(),
                    dates: "2021 - 2024".into(),
                    bullets: vec!["Migration vers Kubernetes".into(), "Astreintes".into()],
                },
                ExperienceEntry {
                    company: "Globex".into(),
                    city: None,
                    role: "Administratrice systèmes".into(),
                    dates: "2018 - 2021".into(),
                    bullets: vec!["Supervision".into()],
                },
            ],
            education: vec!["Master informatique, Lyon 1".into()],
            certs: "AWS Solutions Architect\nCKA".into(),
            lang_line: "Français (Natif), Anglais (Courant)".into(),
            hobbies: vec!["Escalade".into(), "Photographie".into()],
        }
    }

    fn render(id: TemplateId, model: &CvDocModel) -> LayoutDocument {
        build_cv_document(id, model, Lang::Fr, &make_colors("#2563eb"), LayoutHint::Auto, 1.0)
    }

    fn model_fragments(model: &CvDocModel) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        out.insert(model.profile.clone());
        out.extend(model.skills.all().cloned());
        for entry in &model.xp {
            out.extend(entry.bullets.iter().cloned());
            out.insert(entry.role.clone());
            out.insert(entry.company.clone());
            out.insert(entry.dates.clone());
        }
        out.extend(model.education.iter().cloned());
        out.extend(model.cert_lines().into_iter().map(String::from));
        out.extend(model.hobbies.iter().cloned());
        out.extend(model.languages().into_iter().map(|l| l.name));
        out.extend(model.contact_items().into_iter().map(String::from));
        out.insert(model.name.clone());
        out.insert(model.title.clone());
        out
    }

    #[test]
    fn every_template_keeps_every_fragment() {
        let model = model();
        let expected = model_fragments(&model);
        for id in TemplateId::ALL {
            let doc = render(id, &model);
            let found: BTreeSet<String> = doc
                .text_fragments()
                .into_iter()
                .filter(|t| expected.contains(*t))
                .map(String::from)
                .collect();
            assert_eq!(found, expected, "template {id} lost content");
        }
    }

    #[test]
    fn profile_text_is_identical_across_templates() {
        let model = model();
        let profile = |id| {
            render(id, &model)
                .text_fragments()
                .into_iter()
                .find(|t| t.contains("automatisation"))
                .map(String::from)
        };
        assert_eq!(profile(TemplateId::Ats), Some(model.profile.clone()));
        assert_eq!(profile(TemplateId::Ats), profile(TemplateId::ProMax));
    }

    #[test]
    fn degenerate_model_omits_empty_sections() {
        let model = CvDocModel {
            name: "Solo".into(),
            ..Default::default()
        };
        for id in TemplateId::ALL {
            let sections = render(id, &model).sections();
            for kind in [
                SectionKind::Experience,
                SectionKind::Interests,
                SectionKind::Languages,
                SectionKind::Certifications,
                SectionKind::Skills,
                SectionKind::Profile,
            ] {
                assert!(!sections.contains(&kind), "{id} rendered an empty {kind:?}");
            }
        }
    }

    #[test]
    fn empty_model_still_renders() {
        for id in TemplateId::ALL {
            let doc = render(id, &CvDocModel::default());
            assert_eq!(doc.info.title, "Curriculum vitae");
            assert!(doc.text_fragments().iter().all(|t| !t.is_empty()));
        }
    }

    #[test]
    fn language_rows_carry_flags_and_ratings() {
        let model = CvDocModel {
            lang_line: "Français (Natif), Anglais (Courant)".into(),
            ..Default::default()
        };
        for id in TemplateId::ALL {
            let doc = render(id, &model);
            let flags: Vec<_> = doc
                .glyphs()
                .into_iter()
                .filter_map(|g| match g {
                    Glyph::Flag(kind) => Some(kind),
                    _ => None,
                })
                .collect();
            assert_eq!(flags, vec![FlagKind::Fr, FlagKind::En], "{id}");

            let mut ratings = Vec::new();
            walk_blocks(&doc.blocks, &mut |block| {
                if let Block::Rating(r) = block {
                    ratings.push((r.filled, r.total));
                }
            });
            assert_eq!(ratings, vec![(5, 5), (4, 5)], "{id}");
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let model = model();
        for id in TemplateId::ALL {
            assert_eq!(render(id, &model), render(id, &model));
        }
    }

    #[test]
    fn hint_changes_type_sizes() {
        let model = model();
        let size = |hint| {
            let doc = build_cv_document(
                TemplateId::Classic,
                &model,
                Lang::En,
                &make_colors("#2563eb"),
                hint,
                1.0,
            );
            let mut size = 0.0f32;
            walk_blocks(&doc.blocks, &mut |block| {
                if let Block::Paragraph(p) = block
                    && let Some(run) = p.runs.iter().find(|r| r.text == model.profile)
                {
                    size = run.style.size;
                }
            });
            size
        };
        assert!(size(LayoutHint::Tight) < size(LayoutHint::Spacious));
        assert!(size(LayoutHint::Auto) < size(LayoutHint::Tight));
    }

    #[test]
    fn english_labels_follow_lang() {
        let doc = build_cv_document(
            TemplateId::Ats,
            &model(),
            Lang::En,
            &make_colors("#2563eb"),
            LayoutHint::Tight,
            1.0,
        );
        let texts = doc.text_fragments();
        assert!(texts.contains(&"PROFESSIONAL EXPERIENCE"));
    }
}
