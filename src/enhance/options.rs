use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumString, IntoEnumIterator};

use super::stage::PipelineStage;

/// Summary lengths the pipeline accepts, as a percentage of the input.
pub const SUMMARY_PERCENTAGES: [u8; 4] = [5, 20, 35, 50];

pub const DEFAULT_SUMMARY_PERCENTAGE: u8 = 20;

/// Snap a continuous slider value to the nearest accepted summary length.
///
/// A candidate replaces the current best only when strictly closer, so the
/// smaller percentage wins an exact tie.
pub fn closest_summary_percentage(value: f64) -> u8 {
    SUMMARY_PERCENTAGES
        .iter()
        .copied()
        .reduce(|best, candidate| {
            if (f64::from(candidate) - value).abs() < (f64::from(best) - value).abs() {
                candidate
            } else {
                best
            }
        })
        .unwrap_or(DEFAULT_SUMMARY_PERCENTAGE)
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TranslationStyle {
    Literal,
    #[default]
    Natural,
    Formal,
}

impl TranslationStyle {
    /// Extra instruction line appended to the translation step.
    pub fn guidance(self) -> &'static str {
        match self {
            Self::Literal => "Provide word-for-word translation",
            Self::Natural => "Create fluent, readable English",
            Self::Formal => "Use formal, academic language",
        }
    }
}

/// Which enhancement stages to request and how to parameterise them.
///
/// Field names follow the JSON the enhancement backend accepts. Any subset
/// of stages is valid, including none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementOptions {
    #[serde(default)]
    pub enable_spelling_correction: bool,
    #[serde(default)]
    pub enable_structuring: bool,
    #[serde(default)]
    pub enable_summarization: bool,
    /// Always one of [`SUMMARY_PERCENTAGES`].
    #[serde(
        default = "default_summary_length",
        deserialize_with = "deserialize_summary_length"
    )]
    pub summary_length: u8,
    #[serde(default)]
    pub enable_translation: bool,
    #[serde(default)]
    pub translation_style: TranslationStyle,
    #[serde(default)]
    pub track_changes: bool,
}

fn default_summary_length() -> u8 {
    DEFAULT_SUMMARY_PERCENTAGE
}

fn deserialize_summary_length<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    Ok(closest_summary_percentage(raw))
}

impl Default for EnhancementOptions {
    fn default() -> Self {
        Self {
            enable_spelling_correction: false,
            enable_structuring: false,
            enable_summarization: false,
            summary_length: default_summary_length(),
            enable_translation: false,
            translation_style: TranslationStyle::default(),
            track_changes: false,
        }
    }
}

impl EnhancementOptions {
    pub fn with_spelling_correction(mut self) -> Self {
        self.enable_spelling_correction = true;
        self
    }

    pub fn with_structuring(mut self) -> Self {
        self.enable_structuring = true;
        self
    }

    /// Enable summarization; `percentage` is snapped to an accepted length.
    pub fn with_summary(mut self, percentage: f64) -> Self {
        self.enable_summarization = true;
        self.summary_length = closest_summary_percentage(percentage);
        self
    }

    pub fn with_translation(mut self, style: TranslationStyle) -> Self {
        self.enable_translation = true;
        self.translation_style = style;
        self
    }

    pub fn with_track_changes(mut self) -> Self {
        self.track_changes = true;
        self
    }

    pub fn is_enabled(&self, stage: PipelineStage) -> bool {
        match stage {
            PipelineStage::SpellingCorrection => self.enable_spelling_correction,
            PipelineStage::Restructuring => self.enable_structuring,
            PipelineStage::Summarization => self.enable_summarization,
            PipelineStage::Translation => self.enable_translation,
        }
    }

    /// Enabled stages in execution order.
    pub fn enabled_stages(&self) -> impl Iterator<Item = PipelineStage> + '_ {
        PipelineStage::iter().filter(|stage| self.is_enabled(*stage))
    }

    /// True when no stage is enabled.
    pub fn is_empty(&self) -> bool {
        self.enabled_stages().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snaps_to_nearest_percentage() {
        assert_eq!(closest_summary_percentage(23.0), 20);
        assert_eq!(closest_summary_percentage(28.0), 35);
        assert_eq!(closest_summary_percentage(0.0), 5);
        assert_eq!(closest_summary_percentage(100.0), 50);
        assert_eq!(closest_summary_percentage(44.0), 50);
    }

    #[test]
    fn exact_tie_keeps_earlier_percentage() {
        assert_eq!(closest_summary_percentage(12.5), 5);
        assert_eq!(closest_summary_percentage(27.5), 20);
        assert_eq!(closest_summary_percentage(42.5), 35);
    }

    #[test]
    fn accepted_values_snap_to_themselves() {
        for pct in SUMMARY_PERCENTAGES {
            assert_eq!(closest_summary_percentage(f64::from(pct)), pct);
        }
    }

    #[test]
    fn default_enables_nothing() {
        let options = EnhancementOptions::default();
        assert!(options.is_empty());
        assert_eq!(options.summary_length, 20);
        assert_eq!(options.translation_style, TranslationStyle::Natural);
    }

    #[test]
    fn enabled_stages_follow_fixed_order() {
        let options = EnhancementOptions::default()
            .with_translation(TranslationStyle::Formal)
            .with_spelling_correction()
            .with_summary(35.0);
        let stages: Vec<_> = options.enabled_stages().collect();
        assert_eq!(
            stages,
            vec![
                PipelineStage::SpellingCorrection,
                PipelineStage::Summarization,
                PipelineStage::Translation,
            ]
        );
    }

    #[test]
    fn deserializes_frontend_payload() {
        let json = r#"{
            "scanningMode": "advanced",
            "enableSpellingCorrection": true,
            "enableStructuring": false,
            "enableSummarization": true,
            "summaryLength": 28,
            "enableTranslation": true,
            "translationStyle": "literal",
            "trackChanges": true
        }"#;
        let options: EnhancementOptions = serde_json::from_str(json).unwrap();
        assert!(options.enable_spelling_correction);
        assert!(!options.enable_structuring);
        assert_eq!(options.summary_length, 35);
        assert_eq!(options.translation_style, TranslationStyle::Literal);
        assert!(options.track_changes);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let options: EnhancementOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, EnhancementOptions::default());
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(EnhancementOptions::default().with_structuring()).unwrap();
        assert_eq!(json["enableStructuring"], true);
        assert_eq!(json["summaryLength"], 20);
        assert_eq!(json["translationStyle"], "natural");
    }

    #[test]
    fn translation_style_parses_case_insensitively() {
        assert_eq!(
            "Formal".parse::<TranslationStyle>().unwrap(),
            TranslationStyle::Formal
        );
        assert!("poetic".parse::<TranslationStyle>().is_err());
        assert_eq!(TranslationStyle::Literal.to_string(), "literal");
    }
}
