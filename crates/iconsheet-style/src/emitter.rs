//! Themed icon stylesheet emission.
//!
//! A build maps the source tree, resolves which icons each theme shares with
//! another theme, and writes one style rule per shared icon with the icon's
//! SVG inlined as a data URL. Icons unique to a theme are only reported in
//! the debug dumps.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use iconsheet_core::file::{append_text, read_text, recreate_dir, write_json_pretty};
use iconsheet_core::icon_map::{IconMap, IconMapper, IconName};
use iconsheet_core::logging::{PerfSpan, targets};
use iconsheet_core::resolve::{IntersectionMap, intersect, unique};
use serde::Serialize;

use crate::encode::svg_data_url;
use crate::options::{EmitOptions, OutputLayout, StyleVariant};
use crate::rules::{StyleRule, ThemeSheet};
use crate::selector::icon_class;
use crate::Result;

/// Subdirectory of the destination holding the stylesheets.
pub const CSS_DIR: &str = "css";

/// Stem of the index file (per-theme layout) or the combined file.
pub const INDEX_STEM: &str = "icons";

/// Debug dump of the full icon map.
pub const ICON_MAP_JSON: &str = "iconMap.json";

/// Debug dump of the shared icon sets.
pub const INTERSECTION_JSON: &str = "intersectIconMap.json";

/// Debug dump of the theme-unique icon sets.
pub const UNIQUE_JSON: &str = "uniqueIconMap.json";

/// Summary of a finished build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Themes that received a stylesheet, in order.
    pub themes: Vec<String>,
    /// Every file written, in write order.
    pub files: Vec<PathBuf>,
    /// Total number of icon rules emitted.
    pub rules: usize,
}

/// Writes themed icon stylesheets.
#[derive(Debug, Clone, Default)]
pub struct StyleEmitter {
    options: EmitOptions,
}

impl StyleEmitter {
    /// Create an emitter.
    pub fn new(options: EmitOptions) -> Self {
        Self { options }
    }

    /// The emitter's options.
    pub fn options(&self) -> &EmitOptions {
        &self.options
    }

    /// Build stylesheets for the icons under `src_dir` into `dest_dir`.
    ///
    /// The destination is emptied first. Any filesystem failure aborts the
    /// build; files written before the failure are left in place.
    ///
    /// # Errors
    ///
    /// Returns an empty-argument error when either directory is empty, and
    /// a file error for any failed read, write or directory operation.
    pub fn build(&self, src_dir: impl AsRef<Path>, dest_dir: impl AsRef<Path>) -> Result<BuildReport> {
        let src_dir = src_dir.as_ref();
        let dest_dir = dest_dir.as_ref();
        if src_dir.as_os_str().is_empty() {
            return Err(iconsheet_core::Error::empty_argument("srcDir").into());
        }
        if dest_dir.as_os_str().is_empty() {
            return Err(iconsheet_core::Error::empty_argument("destDir").into());
        }

        tracing::info!(
            target: targets::EMIT,
            src = %src_dir.display(),
            dest = %dest_dir.display(),
            variant = self.options.variant.as_str(),
            layout = self.options.layout.as_str(),
            format = self.options.format.as_str(),
            "building icon styles"
        );

        recreate_dir(dest_dir, &[CSS_DIR])?;

        let map = {
            let _perf = PerfSpan::new("map");
            self.mapper().map(src_dir)?
        };

        let (intersection, uniques) = {
            let _perf = PerfSpan::new("resolve");
            let intersection = intersect(&map);
            let uniques = unique(&map, &intersection)?;
            (intersection, uniques)
        };

        let mut report = BuildReport::default();

        if self.options.debug {
            let _perf = PerfSpan::new("debug");
            report.files.push(dump(dest_dir, ICON_MAP_JSON, &map)?);
            report.files.push(dump(dest_dir, INTERSECTION_JSON, &intersection)?);
            report.files.push(dump(dest_dir, UNIQUE_JSON, &uniques)?);
        }

        let sheets = {
            let _perf = PerfSpan::new("encode");
            self.theme_sheets(src_dir, &map, &intersection)?
        };

        {
            let _perf = PerfSpan::new("write");
            self.write_sheets(&dest_dir.join(CSS_DIR), &sheets, &mut report)?;
        }

        tracing::info!(
            target: targets::EMIT,
            themes = report.themes.len(),
            rules = report.rules,
            files = report.files.len(),
            "icon styles written"
        );

        Ok(report)
    }

    /// Sheets for every mapped theme holding a rule per shared icon.
    ///
    /// Each icon is read from `<src_dir>/<theme>/<icon>`.
    pub fn theme_sheets(
        &self,
        src_dir: &Path,
        map: &IconMap,
        intersection: &IntersectionMap,
    ) -> Result<Vec<ThemeSheet>> {
        let empty = BTreeSet::new();
        map.themes()
            .map(|theme| {
                let icons = intersection.get(theme).unwrap_or(&empty);
                self.theme_sheet(src_dir, theme, icons)
            })
            .collect()
    }

    /// Sheet for one theme with a rule per listed icon.
    pub fn theme_sheet(
        &self,
        src_dir: &Path,
        theme: &str,
        icons: &BTreeSet<IconName>,
    ) -> Result<ThemeSheet> {
        let mut sheet = ThemeSheet::new(theme, self.options.scope.selector(theme));
        let theme_dir = src_dir.join(theme);
        for icon in icons {
            let svg = read_text(theme_dir.join(icon))?;
            sheet.add_rule(self.icon_rule(icon, &svg_data_url(&svg)));
        }
        tracing::debug!(target: targets::EMIT, theme, rules = sheet.len(), "theme sheet ready");
        Ok(sheet)
    }

    /// Unscoped rule showing `data_url` for an icon.
    pub fn icon_rule(&self, icon: &str, data_url: &str) -> StyleRule {
        let rule = StyleRule::new(icon_class(icon));
        match self.options.variant {
            StyleVariant::Background => rule
                .declare("background", format!("url(\"{data_url}\") no-repeat 50% 50%"))
                .declare("background-size", "cover"),
            StyleVariant::Mask => rule
                .declare("mask-image", format!("url(\"{data_url}\")"))
                .declare("mask-repeat", "no-repeat")
                .declare("mask-position", "50% 50%")
                .declare("mask-size", "cover"),
        }
    }

    fn mapper(&self) -> IconMapper {
        let mapper = IconMapper::new().pattern(self.options.icon_pattern.clone());
        match self.options.include_themes {
            Some(ref themes) => mapper.include_themes(themes.iter().cloned()),
            None => mapper,
        }
    }

    fn write_sheets(
        &self,
        css_dir: &Path,
        sheets: &[ThemeSheet],
        report: &mut BuildReport,
    ) -> Result<()> {
        let format = self.options.format;
        let index = css_dir.join(format!("{INDEX_STEM}.{}", format.extension()));

        for sheet in sheets {
            let rendered = sheet.render(format);
            match self.options.layout {
                OutputLayout::PerTheme => {
                    let path = css_dir.join(format.theme_file_name(&sheet.theme));
                    append_text(&path, &rendered)?;
                    append_text(&index, format.import_line(&sheet.theme))?;
                    report.files.push(path);
                }
                OutputLayout::Combined => append_text(&index, &rendered)?,
            }
            report.themes.push(sheet.theme.clone());
            report.rules += sheet.len();
        }

        if index.exists() {
            report.files.push(index);
        }
        Ok(())
    }
}

fn dump<T: Serialize>(dest_dir: &Path, name: &str, value: &T) -> Result<PathBuf> {
    let path = dest_dir.join(name);
    write_json_pretty(&path, value)?;
    tracing::debug!(target: targets::EMIT, path = %path.display(), "wrote debug map");
    Ok(path)
}

/// Build stylesheets with the given options.
pub fn build_icon_style(
    src_dir: impl AsRef<Path>,
    dest_dir: impl AsRef<Path>,
    options: EmitOptions,
) -> Result<BuildReport> {
    StyleEmitter::new(options).build(src_dir, dest_dir)
}
