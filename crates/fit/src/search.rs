use crate::cancel::CancelToken;
use crate::error::FitError;
use crate::options::FitOptions;
use crate::oracle::{Rendition, ScaleOracle};

/// Intervals narrower than this end the search.
const RESOLUTION: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trial {
    pub scale: f64,
    pub pages: usize,
}

/// The accepted rendering. Immutable once returned.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedArtifact {
    pub bytes: Vec<u8>,
    pub scale: f64,
    pub pages: usize,
    /// True when nothing fit and the minimum scale was accepted anyway.
    pub fell_back: bool,
    /// Every oracle call, in order.
    pub trials: Vec<Trial>,
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

struct Search<'a, O: ScaleOracle + ?Sized> {
    oracle: &'a O,
    cancel: &'a CancelToken,
    trials: Vec<Trial>,
}

impl<O: ScaleOracle + ?Sized> Search<'_, O> {
    fn trial(&mut self, scale: f64) -> Result<Rendition, FitError> {
        self.cancel.check()?;
        let rendition = self.oracle.trial(scale)?;
        log::debug!("Trial at scale {:.3}: {} page(s)", scale, rendition.pages);
        self.trials.push(Trial {
            scale,
            pages: rendition.pages,
        });
        Ok(rendition)
    }
}

/// Bisection for the largest scale within `opts.max_pages`.
///
/// Never fails for "could not fit": if no trial satisfies the page budget the
/// rendering at `opts.min` is returned with `fell_back` set.
pub fn fit<O: ScaleOracle + ?Sized>(oracle: &O, opts: &FitOptions) -> Result<FittedArtifact, FitError> {
    fit_with_cancel(oracle, opts, &CancelToken::new())
}

pub fn fit_with_cancel<O: ScaleOracle + ?Sized>(
    oracle: &O,
    opts: &FitOptions,
    cancel: &CancelToken,
) -> Result<FittedArtifact, FitError> {
    opts.validate()?;
    let mut search = Search {
        oracle,
        cancel,
        trials: Vec::new(),
    };
    let mut best: Option<(f64, Rendition)> = None;
    let mut low = opts.min;
    let mut high = opts.max;

    let initial = opts.initial.clamp(opts.min, opts.max);
    let first = search.trial(initial)?;
    if first.pages > opts.max_pages {
        high = initial;
    } else {
        best = Some((initial, first));
        low = initial;
    }

    for _ in 0..opts.iterations {
        if high - low < RESOLUTION {
            break;
        }
        let mid = round3((low + high) / 2.0);
        let rendition = search.trial(mid)?;
        if rendition.pages > opts.max_pages {
            high = mid - RESOLUTION;
        } else {
            best = Some((mid, rendition));
            low = mid + RESOLUTION;
        }
    }

    let (scale, rendition, fell_back) = match best {
        Some((scale, rendition)) => (scale, rendition, false),
        None => {
            let rendition = search.trial(opts.min)?;
            log::warn!(
                "No scale fit within {} page(s); falling back to {:.3} ({} page(s))",
                opts.max_pages,
                opts.min,
                rendition.pages
            );
            (opts.min, rendition, true)
        }
    };

    log::debug!(
        "Fitted at scale {:.3} after {} trial(s)",
        scale,
        search.trials.len()
    );
    Ok(FittedArtifact {
        bytes: rendition.bytes,
        scale,
        pages: rendition.pages,
        fell_back,
        trials: search.trials,
    })
}
