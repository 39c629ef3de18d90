use auspex::aspects::{AspectKind, OrbTable};
use auspex::ephemeris::GeoLocation;
use auspex::scoring::RuleWeights;
use auspex::ScanSettings;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Relative locations tried when no config path is given
pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["configs/auspex.toml", "../../configs/auspex.toml"];

/// Widest orb the config accepts, in degrees
pub const MAX_ORB: f64 = 30.0;

/// Largest magnitude a single rule weight may have
pub const MAX_WEIGHT: i32 = 100;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuspexSettings {
    pub weights: RuleWeights,
    pub orbs: OrbTable,
    pub scan: ScanSettings,
    pub default_location: GeoLocation,
    pub ephemeris_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct EphemerisToml {
    #[serde(default)]
    path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct RootConfigToml {
    #[serde(default)]
    weights: RuleWeights,
    #[serde(default)]
    orbs: OrbTable,
    #[serde(default)]
    scan: ScanSettings,
    #[serde(default)]
    location: Option<GeoLocation>,
    #[serde(default)]
    ephemeris: EphemerisToml,
}

/// Try the common relative paths for `configs/auspex.toml`.
///
/// Returns `None` when none of them can be read.
pub fn read_config_toml_text() -> Option<(PathBuf, String)> {
    DEFAULT_CONFIG_PATHS.iter().find_map(|p| {
        fs::read_to_string(p)
            .ok()
            .map(|text| (PathBuf::from(p), text))
    })
}

pub fn parse_settings(text: &str) -> anyhow::Result<AuspexSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse auspex config: {e}"))?;
    let RootConfigToml {
        weights,
        orbs,
        scan,
        location,
        ephemeris,
    } = root;

    let settings = AuspexSettings {
        weights,
        orbs,
        scan,
        default_location: location.unwrap_or_default(),
        ephemeris_path: ephemeris.path,
    };
    validate_settings(&settings)?;
    Ok(settings)
}

pub fn validate_settings(settings: &AuspexSettings) -> anyhow::Result<()> {
    let scan = &settings.scan;
    if scan.max_span_days < 1 {
        anyhow::bail!("scan.max_span_days must be at least 1");
    }
    if scan.top_n < 1 {
        anyhow::bail!("scan.top_n must be at least 1");
    }
    if !(0.0..24.0).contains(&scan.reference_hour) {
        anyhow::bail!(
            "scan.reference_hour must be within [0, 24), got {}",
            scan.reference_hour
        );
    }
    for (key, weight) in settings.weights.entries() {
        if !(-MAX_WEIGHT..=MAX_WEIGHT).contains(&weight) {
            anyhow::bail!(
                "weights.{} must be within [-{}, {}], got {}",
                key,
                MAX_WEIGHT,
                MAX_WEIGHT,
                weight
            );
        }
    }
    for kind in AspectKind::ALL {
        let orb = settings.orbs.orb(kind);
        if !(0.0..=MAX_ORB).contains(&orb) {
            anyhow::bail!(
                "orbs.{} must be within [0, {}], got {}",
                kind.name().to_lowercase(),
                MAX_ORB,
                orb
            );
        }
    }
    let loc = &settings.default_location;
    if !(-90.0..=90.0).contains(&loc.lat) || !(-180.0..=180.0).contains(&loc.lon) {
        anyhow::bail!("location ({}, {}) is out of range", loc.lat, loc.lon);
    }
    Ok(())
}

/// Load settings from `path`, or from the default locations.
///
/// An explicit path must exist. Without one, a missing file means
/// built-in defaults.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<AuspexSettings> {
    let (source, text) = match path {
        Some(p) => {
            let text = fs::read_to_string(p).map_err(|e| {
                anyhow::anyhow!("Could not read config {}: {e}", p.display())
            })?;
            (p.to_path_buf(), text)
        }
        None => match read_config_toml_text() {
            Some(found) => found,
            None => {
                log::debug!(
                    "No config found at {:?}, using defaults",
                    DEFAULT_CONFIG_PATHS
                );
                return Ok(AuspexSettings::default());
            }
        },
    };

    log::info!("Loading config from {}", source.display());
    parse_settings(&text)
        .map_err(|e| anyhow::anyhow!("{}: {e}", source.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_is_default() {
        let settings = parse_settings("").unwrap();
        assert_eq!(settings, AuspexSettings::default());
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let settings = parse_settings(
            r#"
            [weights]
            moon_waxing = 20
            via_combusta = -30

            [orbs]
            trine = 5.0

            [scan]
            top_n = 5
            "#,
        )
        .unwrap();

        assert_eq!(settings.weights.moon_waxing, 20);
        assert_eq!(settings.weights.via_combusta, -30);
        assert_eq!(settings.weights.moon_waning, -10);
        assert_eq!(settings.orbs.trine, 5.0);
        assert_eq!(settings.orbs.conjunction, 8.0);
        assert_eq!(settings.scan.top_n, 5);
        assert_eq!(settings.scan.max_span_days, 60);
    }

    #[test]
    fn test_location_and_ephemeris_path() {
        let settings = parse_settings(
            r#"
            [location]
            lat = 40.4168
            lon = -3.7038

            [ephemeris]
            path = "/opt/ephe"
            "#,
        )
        .unwrap();

        assert_eq!(settings.default_location.lat, 40.4168);
        assert_eq!(settings.ephemeris_path, Some(PathBuf::from("/opt/ephe")));
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(parse_settings("[scan]\nmax_span_days = 0").is_err());
        assert!(parse_settings("[scan]\ntop_n = 0").is_err());
        assert!(parse_settings("[scan]\nreference_hour = 24.0").is_err());
        assert!(parse_settings("[orbs]\nsquare = 31.0").is_err());
        assert!(parse_settings("[orbs]\nsextile = -1.0").is_err());
        assert!(parse_settings("[location]\nlat = 91.0\nlon = 0.0").is_err());
    }

    #[test]
    fn test_rejects_unknown_sections_and_bad_toml() {
        assert!(parse_settings("[wieghts]\nmoon_waxing = 1").is_err());
        assert!(parse_settings("[scan\n").is_err());
    }

    #[test]
    fn test_rejects_misspelled_keys_inside_sections() {
        assert!(parse_settings("[weights]\nmoon_waxng = 40\n").is_err());
        assert!(parse_settings("[orbs]\ntrin = 5.0\n").is_err());
        assert!(parse_settings("[scan]\ntop = 5\n").is_err());
        assert!(parse_settings("[location]\nlat = 1.0\nlon = 2.0\nalt = 3.0\n").is_err());
        assert!(parse_settings("[ephemeris]\ndir = \"/opt/ephe\"\n").is_err());
    }

    #[test]
    fn test_rejects_out_of_range_weights() {
        assert!(parse_settings("[weights]\nmoon_waxing = 2147483647\n").is_err());
        assert!(parse_settings("[weights]\nvia_combusta = -101\n").is_err());
        let settings = parse_settings("[weights]\nvia_combusta = -100\n").unwrap();
        assert_eq!(settings.weights.via_combusta, -100);
    }

    #[test]
    fn test_load_from_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[scan]\nmax_span_days = 30\nreference_hour = 6.5").unwrap();

        let settings = load_settings(Some(file.path())).unwrap();
        assert_eq!(settings.scan.max_span_days, 30);
        assert_eq!(settings.scan.reference_hour, 6.5);
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("auspex.toml");
        let err = load_settings(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("auspex.toml"));
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[scan]\ntop_n = \"many\"").unwrap();

        let err = load_settings(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }
}
