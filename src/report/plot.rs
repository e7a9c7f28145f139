use std::{
    collections::HashMap,
    fs,
    ops::Range,
    path::{Path, PathBuf},
    sync::{LazyLock, Mutex, PoisonError},
};

use log::{debug, warn};
use plotters::{
    prelude::*,
    style::{FontStyle, register_font},
};

use crate::error::{ScError, ScResult};

pub const CAPTION: &str = "Correlation Between News Sentiment and Stock Movement";
pub const X_DESC: &str = "Daily Sentiment";
pub const Y_DESC: &str = "Daily Stock Return";

const FONT_FAMILY: &str = "sans-serif";
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static FONT_CACHE: LazyLock<Mutex<FontCache>> = LazyLock::new(|| Mutex::new(FontCache::default()));

#[derive(Default)]
struct FontCache {
    /// Font file currently registered under `FONT_FAMILY`.
    active: Option<PathBuf>,
    /// Requested font path mapped to the file it resolved to, `None` when no font was usable.
    resolved: HashMap<Option<PathBuf>, Option<PathBuf>>,
}

pub struct PlotOptions<'a> {
    pub width: u32,
    pub height: u32,
    pub font_path: Option<&'a Path>,
}

/// Draws `(sentiment, return)` points as a PNG scatter plot at `path`.
pub fn draw_scatter(path: &Path, points: &[(f64, f64)], options: &PlotOptions) -> ScResult<()> {
    let labelled = register_plot_font(options.font_path);

    let root = BitMapBackend::new(path, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let x_range = axis_range(points.iter().map(|(x, _)| *x));
    let y_range = axis_range(points.iter().map(|(_, y)| *y));

    let mut builder = ChartBuilder::on(&root);
    builder.margin(20);
    if labelled {
        builder
            .caption(CAPTION, (FONT_FAMILY, 22))
            .x_label_area_size(50)
            .y_label_area_size(70);
    }

    let mut chart = builder
        .build_cartesian_2d(x_range, y_range)
        .map_err(plot_error)?;

    if labelled {
        chart
            .configure_mesh()
            .x_desc(X_DESC)
            .y_desc(Y_DESC)
            .draw()
            .map_err(plot_error)?;
    }

    chart
        .draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, BLUE.mix(0.6).filled())),
        )
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    debug!("Plotted {} points to {}", points.len(), path.to_string_lossy());

    Ok(())
}

fn axis_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
        (min.min(v), max.max(v))
    });

    if !min.is_finite() || !max.is_finite() {
        return -1.0..1.0;
    }

    let span = max - min;
    let pad = if span > 0.0 {
        span * 0.05
    } else if min != 0.0 {
        min.abs() * 0.1
    } else {
        0.1
    };

    (min - pad)..(max + pad)
}

/// Registers the configured font, or the first usable system font, returning
/// whether plot text can be drawn.
fn register_plot_font(font_path: Option<&Path>) -> bool {
    let mut cache = FONT_CACHE.lock().unwrap_or_else(PoisonError::into_inner);
    let request = font_path.map(Path::to_path_buf);

    if let Some(resolved) = cache.resolved.get(&request).cloned() {
        return resolved.is_some_and(|file| cache.activate(&file));
    }

    let candidates = request
        .clone()
        .into_iter()
        .chain(SYSTEM_FONTS.iter().map(PathBuf::from));

    let mut resolved = None;
    for candidate in candidates {
        if cache.activate(&candidate) {
            resolved = Some(candidate);
            break;
        }
    }

    if resolved.is_none() {
        warn!("No usable TrueType font found, the plot is drawn without text");
    }

    let labelled = resolved.is_some();
    cache.resolved.insert(request, resolved);

    labelled
}

impl FontCache {
    fn activate(&mut self, file: &Path) -> bool {
        if self.active.as_deref() == Some(file) {
            return true;
        }

        let Ok(bytes) = fs::read(file) else {
            return false;
        };

        // plotters keeps registered fonts for the life of the process
        let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        if register_font(FONT_FAMILY, FontStyle::Normal, bytes).is_err() {
            return false;
        }

        debug!("Using font {}", file.to_string_lossy());
        self.active = Some(file.to_path_buf());

        true
    }
}

fn plot_error(err: impl std::error::Error) -> ScError {
    ScError::PlotError(err.to_string())
}
