use folio::{
    normalize_cv, normalize_letter, FontVariant, PipelineBuilder, PipelineError, TrueTypeSource,
};
use serde_json::Value;
use std::env;
use std::fs;
use std::path::Path;

fn read_json(path: &str) -> Result<Value, PipelineError> {
    let source = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&source)?)
}

/// Removes `--font <value>` from `args`.
fn take_font_option(args: &mut Vec<String>) -> Result<Option<String>, PipelineError> {
    let Some(at) = args.iter().position(|a| a == "--font") else {
        return Ok(None);
    };
    if at + 1 >= args.len() {
        return Err(PipelineError::Config("--font needs a value".into()));
    }
    let value = args.remove(at + 1);
    args.remove(at);
    Ok(Some(value))
}

/// A `.ttf` file, or the name of an installed family.
fn font_source(spec: &str) -> Result<(TrueTypeSource, String), PipelineError> {
    let font_error = |e: folio::FontError| PipelineError::Config(e.to_string());
    let path = Path::new(spec);
    if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("ttf")) {
        let family = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| spec.to_string());
        let source = TrueTypeSource::new(family.as_str())
            .with_face_file(FontVariant::Regular, path)
            .map_err(font_error)?;
        return Ok((source, family));
    }
    #[cfg(feature = "system-fonts")]
    {
        let source = TrueTypeSource::system(spec).map_err(font_error)?;
        return Ok((source, spec.to_string()));
    }
    #[cfg(not(feature = "system-fonts"))]
    Err(PipelineError::Config(format!(
        "'{spec}' is not a .ttf file and system fonts are disabled"
    )))
}

/// Positional arguments after `--font` has been taken out.
#[derive(Debug, PartialEq)]
struct Invocation {
    template: String,
    cv_path: String,
    output_path: String,
    /// `None` when absent or given as `-`.
    letter_path: Option<String>,
    brand: Option<String>,
    font: Option<String>,
}

impl Invocation {
    fn parse(mut args: Vec<String>) -> Result<Option<Self>, PipelineError> {
        let font = take_font_option(&mut args)?;
        if !(4..=6).contains(&args.len()) {
            return Ok(None);
        }
        let mut rest = args.into_iter().skip(1);
        let mut next = || rest.next().unwrap_or_default();
        let (template, cv_path, output_path) = (next(), next(), next());
        let letter_path = Some(next()).filter(|p| !p.is_empty() && p != "-");
        let brand = Some(next()).filter(|b| !b.is_empty());
        Ok(Some(Self {
            template,
            cv_path,
            output_path,
            letter_path,
            brand,
            font,
        }))
    }
}

fn usage(program: &str) -> ! {
    eprintln!("Renders a CV, optionally followed by a cover letter, into one PDF.");
    eprintln!();
    eprintln!(
        "Usage: {program} [--font <family|file.ttf>] <template> <path/to/cv.json> <path/to/output.pdf> [path/to/letter.json|-] [brand]"
    );
    eprintln!();
    eprintln!("Templates: ats, classic, modern, minimalist, creative, elegant, tech, pro_max");
    eprintln!("Pass '-' as the letter to set a brand color without a cover letter.");
    std::process::exit(1);
}

/// Fits a CV (and optionally a cover letter) and writes one PDF.
fn main() -> Result<(), PipelineError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().cloned().unwrap_or_else(|| "folio".into());
    let Some(run) = Invocation::parse(args)? else {
        usage(&program);
    };

    let cv = normalize_cv(&read_json(&run.cv_path)?)?;
    let letter = match &run.letter_path {
        Some(path) => Some(normalize_letter(&read_json(path)?)?),
        None => None,
    };

    let mut builder = PipelineBuilder::new()
        .with_template_name(&run.template)?
        .with_lang(letter.as_ref().map(|l| l.lang).unwrap_or_default());
    if let Some(brand) = &run.brand {
        builder = builder.with_brand(brand.as_str());
    }
    if let Some(spec) = &run.font {
        let (source, family) = font_source(spec)?;
        builder = builder.with_font_source(source, family);
    }
    let pipeline = builder.build()?;

    let bundle = pipeline.generate_to_file(&cv, letter.as_ref(), &run.output_path)?;
    println!(
        "Wrote {} ({} page(s), CV scale {:.3})",
        run.output_path, bundle.pages, bundle.cv_scale
    );
    Ok(())
}
