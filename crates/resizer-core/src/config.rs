//! Validated resize configuration.
//!
//! A [`ResizeConfig`] is an immutable value: every `with_*` method consumes
//! the receiver and returns a new config, failing with
//! [`ConfigError::InvalidValue`] the moment a bad value is supplied. Per-call
//! overrides are expressed as a [`ConfigOverrides`] record and merged into a
//! copy with [`ResizeConfig::merge_overrides`].
//!
//! # Defaults
//!
//! | field  | default |
//! |--------|---------|
//! | format | PNG     |
//! | mode   | cover   |
//! | width  | 300     |
//! | height | 200     |
//!
//! # Example
//!
//! ```ignore
//! use resizer_core::config::{ConfigOverrides, ResizeConfig, ResizeMode};
//!
//! let config = ResizeConfig::default().with_width(640)?.with_mode(ResizeMode::Shrink);
//! let square = config.merge_overrides(&ConfigOverrides::new().height(640))?;
//! assert_eq!((square.width(), square.height()), (640, 640));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default target width in pixels.
pub const DEFAULT_WIDTH: u32 = 300;

/// Default target height in pixels.
pub const DEFAULT_HEIGHT: u32 = 200;

const DIMENSION_EXPECTED: &str = "an integer > 0";

/// Errors raised while building a configuration or computing a plan from it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A field failed its validity predicate.
    #[error("Invalid {field} `{value}` passed; must be {expected}")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    /// The configuration cannot produce a representable plan.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl ConfigError {
    pub(crate) fn invalid_value(
        field: &'static str,
        value: impl fmt::Display,
        expected: &'static str,
    ) -> Self {
        ConfigError::InvalidValue {
            field,
            value: value.to_string(),
            expected,
        }
    }
}

/// Output encoding of the resized image.
///
/// Deserialization goes through [`FromStr`], so it accepts the same aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ImageFormat {
    #[default]
    Png,
    Jpeg,
    Gif,
}

impl ImageFormat {
    /// Every supported format, in declaration order.
    pub const ALL: [ImageFormat; 3] = [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::Gif];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Gif => "gif",
        }
    }

    /// MIME type of the encoded output.
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Gif => "image/gif",
        }
    }

    /// Conventional file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Gif => "gif",
        }
    }

    pub(crate) fn to_image_format(self) -> image::ImageFormat {
        match self {
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Gif => image::ImageFormat::Gif,
        }
    }

    /// Map a format detected by the `image` crate, `None` if unsupported.
    pub(crate) fn from_image_format(format: image::ImageFormat) -> Option<Self> {
        match format {
            image::ImageFormat::Png => Some(ImageFormat::Png),
            image::ImageFormat::Jpeg => Some(ImageFormat::Jpeg),
            image::ImageFormat::Gif => Some(ImageFormat::Gif),
            _ => None,
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ImageFormat {
    type Err = ConfigError;

    /// Accepts `png`, `jpeg`, `jpg`, `gif` and their `image/*` MIME types,
    /// ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let name = normalized.strip_prefix("image/").unwrap_or(&normalized);
        match name {
            "png" => Ok(ImageFormat::Png),
            "jpeg" | "jpg" => Ok(ImageFormat::Jpeg),
            "gif" => Ok(ImageFormat::Gif),
            _ => Err(ConfigError::invalid_value(
                "format",
                s,
                "one of: png, jpeg, gif",
            )),
        }
    }
}

impl TryFrom<String> for ImageFormat {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// How the source is fitted to the target box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ResizeMode {
    /// Fill the target exactly, cropping the source to the target aspect ratio.
    #[default]
    Cover,
    /// Keep the source aspect ratio without cropping; the output size follows
    /// from the axis that drives the scale.
    Shrink,
    /// Force the exact target size, distorting the aspect ratio.
    Stretch,
}

impl ResizeMode {
    /// Every supported mode, in declaration order.
    pub const ALL: [ResizeMode; 3] = [ResizeMode::Cover, ResizeMode::Shrink, ResizeMode::Stretch];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            ResizeMode::Cover => "cover",
            ResizeMode::Shrink => "shrink",
            ResizeMode::Stretch => "stretch",
        }
    }
}

impl fmt::Display for ResizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResizeMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cover" => Ok(ResizeMode::Cover),
            "shrink" => Ok(ResizeMode::Shrink),
            "stretch" => Ok(ResizeMode::Stretch),
            _ => Err(ConfigError::invalid_value(
                "mode",
                s,
                "one of: cover, shrink, stretch",
            )),
        }
    }
}

impl TryFrom<String> for ResizeMode {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Immutable, validated resize parameters.
///
/// Width and height are always > 0; the only way to change a field is a
/// `with_*` method or [`merge_overrides`](Self::merge_overrides), both of
/// which return a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ConfigOverrides")]
pub struct ResizeConfig {
    format: ImageFormat,
    mode: ResizeMode,
    width: u32,
    height: u32,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            format: ImageFormat::Png,
            mode: ResizeMode::Cover,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl ResizeConfig {
    /// Build a config from explicit values.
    pub fn new(
        format: ImageFormat,
        mode: ResizeMode,
        width: u32,
        height: u32,
    ) -> Result<Self, ConfigError> {
        Self::default()
            .with_format(format)
            .with_mode(mode)
            .with_width(i64::from(width))?
            .with_height(i64::from(height))
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn mode(&self) -> ResizeMode {
        self.mode
    }

    /// Target width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Target height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn with_format(self, format: ImageFormat) -> Self {
        Self { format, ..self }
    }

    /// Set the format from its textual name or MIME type.
    pub fn with_format_str(self, format: &str) -> Result<Self, ConfigError> {
        Ok(self.with_format(format.parse()?))
    }

    pub fn with_mode(self, mode: ResizeMode) -> Self {
        Self { mode, ..self }
    }

    /// Set the mode from its textual name.
    pub fn with_mode_str(self, mode: &str) -> Result<Self, ConfigError> {
        Ok(self.with_mode(mode.parse()?))
    }

    /// Set the target width. Zero, negative and out-of-range values are rejected.
    pub fn with_width(self, width: i64) -> Result<Self, ConfigError> {
        let width = validate_dimension("width", width)?;
        Ok(Self { width, ..self })
    }

    /// Set the target width from text. Non-integer input is rejected.
    pub fn with_width_str(self, width: &str) -> Result<Self, ConfigError> {
        let width = parse_dimension("width", width)?;
        Ok(Self { width, ..self })
    }

    /// Set the target height. Zero, negative and out-of-range values are rejected.
    pub fn with_height(self, height: i64) -> Result<Self, ConfigError> {
        let height = validate_dimension("height", height)?;
        Ok(Self { height, ..self })
    }

    /// Set the target height from text. Non-integer input is rejected.
    pub fn with_height_str(self, height: &str) -> Result<Self, ConfigError> {
        let height = parse_dimension("height", height)?;
        Ok(Self { height, ..self })
    }

    /// Return a copy with every field present in `overrides` replaced.
    ///
    /// Present fields go through the same validation as the matching `with_*`
    /// method. The receiver is never modified.
    pub fn merge_overrides(&self, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let mut merged = *self;
        if let Some(format) = overrides.format {
            merged = merged.with_format(format);
        }
        if let Some(mode) = overrides.mode {
            merged = merged.with_mode(mode);
        }
        if let Some(width) = overrides.width {
            merged = merged.with_width(width)?;
        }
        if let Some(height) = overrides.height {
            merged = merged.with_height(height)?;
        }
        Ok(merged)
    }
}

impl TryFrom<ConfigOverrides> for ResizeConfig {
    type Error = ConfigError;

    fn try_from(overrides: ConfigOverrides) -> Result<Self, Self::Error> {
        ResizeConfig::default().merge_overrides(&overrides)
    }
}

/// A partial configuration: `None` fields keep the base config's value.
///
/// Dimensions are held as `i64` so that negative input coming from a loosely
/// typed caller reaches validation and is reported as
/// [`ConfigError::InvalidValue`] instead of failing to deserialize. They may
/// also be given as integral floats (JavaScript numbers) or numeric strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    pub format: Option<ImageFormat>,
    pub mode: Option<ResizeMode>,
    #[serde(deserialize_with = "dimension::width")]
    pub width: Option<i64>,
    #[serde(deserialize_with = "dimension::height")]
    pub height: Option<i64>,
}

impl ConfigOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(mut self, format: ImageFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn mode(mut self, mode: ResizeMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn width(mut self, width: i64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: i64) -> Self {
        self.height = Some(height);
        self
    }

    /// True when no field is overridden.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Parse string key/value pairs such as query parameters.
    ///
    /// Recognised keys are `format`, `mode`, `width` and `height`, matched
    /// case-insensitively. Values are validated as they are read; an unknown
    /// key is rejected as an invalid `key`.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut overrides = Self::default();
        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref().trim().to_ascii_lowercase().as_str() {
                "format" => overrides.format = Some(value.parse()?),
                "mode" => overrides.mode = Some(value.parse()?),
                "width" => overrides.width = Some(parse_dimension("width", value)?.into()),
                "height" => overrides.height = Some(parse_dimension("height", value)?.into()),
                _ => {
                    return Err(ConfigError::invalid_value(
                        "key",
                        key.as_ref(),
                        "one of: format, mode, width, height",
                    ))
                }
            }
        }
        Ok(overrides)
    }
}

fn validate_dimension(field: &'static str, value: i64) -> Result<u32, ConfigError> {
    u32::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| ConfigError::invalid_value(field, value, DIMENSION_EXPECTED))
}

fn parse_dimension(field: &'static str, raw: &str) -> Result<u32, ConfigError> {
    let value = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| ConfigError::invalid_value(field, raw, DIMENSION_EXPECTED))?;
    validate_dimension(field, value)
}

/// Lenient readers for `width`/`height`: any whole number, as an integer,
/// float or string. Range checks happen on merge.
mod dimension {
    use std::fmt;

    use serde::de::{self, Deserializer, Visitor};

    use super::{ConfigError, DIMENSION_EXPECTED};

    pub(super) fn width<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
        d.deserialize_any(DimensionVisitor { field: "width" })
    }

    pub(super) fn height<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
        d.deserialize_any(DimensionVisitor { field: "height" })
    }

    struct DimensionVisitor {
        field: &'static str,
    }

    impl DimensionVisitor {
        fn invalid<E: de::Error>(&self, value: impl fmt::Display) -> E {
            E::custom(ConfigError::invalid_value(self.field, value, DIMENSION_EXPECTED))
        }
    }

    impl<'de> Visitor<'de> for DimensionVisitor {
        type Value = Option<i64>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{} as a whole number", self.field)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            i64::try_from(v).map(Some).map_err(|_| self.invalid(v))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
                Ok(Some(v as i64))
            } else {
                Err(self.invalid(v))
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            v.trim().parse::<i64>().map(Some).map_err(|_| self.invalid(v))
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
            Err(self.invalid(v))
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
            d.deserialize_any(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(result: Result<ResizeConfig, ConfigError>, expected_field: &str) {
        match result {
            Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("Expected InvalidValue for {expected_field}, got: {other:?}"),
        }
    }

    #[test]
    fn test_defaults() {
        let config = ResizeConfig::default();
        assert_eq!(config.format(), ImageFormat::Png);
        assert_eq!(config.mode(), ResizeMode::Cover);
        assert_eq!(config.width(), 300);
        assert_eq!(config.height(), 200);
    }

    #[test]
    fn test_new_validates_dimensions() {
        let config = ResizeConfig::new(ImageFormat::Gif, ResizeMode::Stretch, 64, 32).unwrap();
        assert_eq!(config.format(), ImageFormat::Gif);
        assert_eq!(config.mode(), ResizeMode::Stretch);
        assert_eq!((config.width(), config.height()), (64, 32));

        assert_invalid(
            ResizeConfig::new(ImageFormat::Png, ResizeMode::Cover, 0, 32),
            "width",
        );
        assert_invalid(
            ResizeConfig::new(ImageFormat::Png, ResizeMode::Cover, 32, 0),
            "height",
        );
    }

    #[test]
    fn test_zero_width_rejected() {
        assert_invalid(ResizeConfig::default().with_width(0), "width");
    }

    #[test]
    fn test_negative_dimensions_rejected() {
        assert_invalid(ResizeConfig::default().with_width(-5), "width");
        assert_invalid(ResizeConfig::default().with_height(-1), "height");
    }

    #[test]
    fn test_oversized_dimension_rejected() {
        assert_invalid(
            ResizeConfig::default().with_width(i64::from(u32::MAX) + 1),
            "width",
        );
        let max = ResizeConfig::default()
            .with_height(i64::from(u32::MAX))
            .unwrap();
        assert_eq!(max.height(), u32::MAX);
    }

    #[test]
    fn test_non_integer_text_rejected() {
        assert_invalid(ResizeConfig::default().with_width_str("12.5"), "width");
        assert_invalid(ResizeConfig::default().with_height_str("tall"), "height");
        assert_invalid(ResizeConfig::default().with_height_str(""), "height");

        let config = ResizeConfig::default().with_width_str(" 640 ").unwrap();
        assert_eq!(config.width(), 640);
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let err = "zoom".parse::<ResizeMode>().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "mode", .. }));
        assert_eq!(
            err.to_string(),
            "Invalid mode `zoom` passed; must be one of: cover, shrink, stretch"
        );
        assert_invalid(ResizeConfig::default().with_mode_str("zoom"), "mode");
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("cover".parse::<ResizeMode>().unwrap(), ResizeMode::Cover);
        assert_eq!(" Shrink ".parse::<ResizeMode>().unwrap(), ResizeMode::Shrink);
        assert_eq!("STRETCH".parse::<ResizeMode>().unwrap(), ResizeMode::Stretch);

        for mode in ResizeMode::ALL {
            assert_eq!(mode.to_string().parse::<ResizeMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("png".parse::<ImageFormat>().unwrap(), ImageFormat::Png);
        assert_eq!("JPG".parse::<ImageFormat>().unwrap(), ImageFormat::Jpeg);
        assert_eq!("image/jpeg".parse::<ImageFormat>().unwrap(), ImageFormat::Jpeg);
        assert_eq!("image/gif".parse::<ImageFormat>().unwrap(), ImageFormat::Gif);

        let err = "webp".parse::<ImageFormat>().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "format", .. }));
        assert_invalid(ResizeConfig::default().with_format_str("bmp"), "format");
    }

    #[test]
    fn test_format_metadata() {
        assert_eq!(ImageFormat::Jpeg.mime_type(), "image/jpeg");
        assert_eq!(ImageFormat::Jpeg.extension(), "jpg");
        assert_eq!(ImageFormat::Gif.to_string(), "gif");
        for format in ImageFormat::ALL {
            assert_eq!(format.mime_type().parse::<ImageFormat>().unwrap(), format);
            assert_eq!(
                ImageFormat::from_image_format(format.to_image_format()),
                Some(format)
            );
        }
        assert_eq!(ImageFormat::from_image_format(image::ImageFormat::Bmp), None);
    }

    #[test]
    fn test_with_methods_do_not_touch_original() {
        let base = ResizeConfig::default();
        let changed = base
            .with_format(ImageFormat::Jpeg)
            .with_width(1024)
            .unwrap();

        assert_eq!(base, ResizeConfig::default());
        assert_eq!(changed.format(), ImageFormat::Jpeg);
        assert_eq!(changed.width(), 1024);
        assert_eq!(changed.height(), 200);
    }

    #[test]
    fn test_failed_setter_leaves_value_unchanged() {
        let base = ResizeConfig::default().with_width(50).unwrap();
        assert!(base.with_width(0).is_err());
        assert_eq!(base.width(), 50);
    }

    #[test]
    fn test_merge_overrides_replaces_present_fields_only() {
        let base = ResizeConfig::new(ImageFormat::Gif, ResizeMode::Shrink, 800, 600).unwrap();
        let overrides = ConfigOverrides::new().mode(ResizeMode::Stretch).height(100);

        let merged = base.merge_overrides(&overrides).unwrap();

        assert_eq!(merged.format(), ImageFormat::Gif);
        assert_eq!(merged.mode(), ResizeMode::Stretch);
        assert_eq!(merged.width(), 800);
        assert_eq!(merged.height(), 100);
        assert_eq!(base.height(), 600);
    }

    #[test]
    fn test_merge_empty_overrides_is_identity() {
        let base = ResizeConfig::new(ImageFormat::Jpeg, ResizeMode::Cover, 10, 20).unwrap();
        assert!(ConfigOverrides::new().is_empty());
        assert_eq!(base.merge_overrides(&ConfigOverrides::new()).unwrap(), base);
    }

    #[test]
    fn test_merge_overrides_validates() {
        let base = ResizeConfig::default();
        assert_invalid(base.merge_overrides(&ConfigOverrides::new().width(0)), "width");
        assert_invalid(base.merge_overrides(&ConfigOverrides::new().height(-3)), "height");
    }

    #[test]
    fn test_from_pairs() {
        let overrides = ConfigOverrides::from_pairs([
            ("format", "jpg"),
            ("Mode", "shrink"),
            ("width", "120"),
            ("height", "80"),
        ])
        .unwrap();

        assert_eq!(overrides.format, Some(ImageFormat::Jpeg));
        assert_eq!(overrides.mode, Some(ResizeMode::Shrink));
        assert_eq!(overrides.width, Some(120));
        assert_eq!(overrides.height, Some(80));
    }

    #[test]
    fn test_from_pairs_rejects_bad_input() {
        let err = ConfigOverrides::from_pairs([("mode", "zoom")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "mode", .. }));

        let err = ConfigOverrides::from_pairs([("width", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "width", .. }));

        let err = ConfigOverrides::from_pairs([("quality", "90")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "key", .. }));
    }

    #[test]
    fn test_deserialize_config_from_json() {
        let config: ResizeConfig =
            serde_json::from_str(r#"{"mode":"stretch","format":"jpg","width":50}"#).unwrap();
        assert_eq!(config.mode(), ResizeMode::Stretch);
        assert_eq!(config.format(), ImageFormat::Jpeg);
        assert_eq!(config.width(), 50);
        assert_eq!(config.height(), DEFAULT_HEIGHT);
    }

    #[test]
    fn test_deserialize_config_rejects_invalid_values() {
        let zero = serde_json::from_str::<ResizeConfig>(r#"{"width":0}"#);
        assert!(zero.is_err());

        let mode = serde_json::from_str::<ResizeConfig>(r#"{"mode":"zoom"}"#);
        assert!(mode.is_err());

        let unknown = serde_json::from_str::<ResizeConfig>(r#"{"depth":8}"#);
        assert!(unknown.is_err());
    }

    #[test]
    fn test_deserialize_accepts_parse_aliases() {
        let config: ResizeConfig =
            serde_json::from_str(r#"{"format":"JPG","mode":"Cover"}"#).unwrap();
        assert_eq!(config.format(), ImageFormat::Jpeg);
        assert_eq!(config.mode(), ResizeMode::Cover);

        let config: ResizeConfig =
            serde_json::from_str(r#"{"format":"image/png","mode":" STRETCH "}"#).unwrap();
        assert_eq!(config.format(), ImageFormat::Png);
        assert_eq!(config.mode(), ResizeMode::Stretch);

        let format: ImageFormat = serde_json::from_str(r#""jpg""#).unwrap();
        assert_eq!(format, ImageFormat::Jpeg);
    }

    #[test]
    fn test_deserialize_errors_match_parse_errors() {
        let err = serde_json::from_str::<ResizeConfig>(r#"{"mode":"zoom"}"#).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Invalid mode `zoom` passed; must be one of: cover, shrink, stretch"));

        let err = serde_json::from_str::<ConfigOverrides>(r#"{"format":"webp"}"#).unwrap_err();
        assert!(err.to_string().starts_with("Invalid format `webp` passed"));

        let err = serde_json::from_str::<ConfigOverrides>(r#"{"width":12.5}"#).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Invalid width `12.5` passed; must be an integer > 0"));

        let err = serde_json::from_str::<ResizeConfig>(r#"{"height":-4}"#).unwrap_err();
        assert!(err.to_string().starts_with("Invalid height `-4` passed"));
    }

    #[test]
    fn test_deserialize_lenient_dimensions() {
        let overrides: ConfigOverrides =
            serde_json::from_str(r#"{"width":640.0,"height":"480"}"#).unwrap();
        assert_eq!(overrides.width, Some(640));
        assert_eq!(overrides.height, Some(480));

        let overrides: ConfigOverrides = serde_json::from_str(r#"{"width":null}"#).unwrap();
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_serialize_config() {
        let config = ResizeConfig::new(ImageFormat::Gif, ResizeMode::Shrink, 7, 9).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r#"{"format":"gif","mode":"shrink","width":7,"height":9}"#
        );

        let back: ResizeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
