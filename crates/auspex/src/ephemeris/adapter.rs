use crate::ephemeris::provider::{EphemerisError, EphemerisProvider};
use crate::ephemeris::types::{Body, RawPosition};
use std::env;
use std::path::{Path, PathBuf};
use swisseph::swe::{calc_ut, set_ephe_path};

/// Default location of the Swiss Ephemeris data files
pub const DEFAULT_EPHEMERIS_PATH: &str = "/usr/local/share/swisseph";

/// FLG_SWIEPH: use Swiss Ephemeris files
const FLG_SWIEPH: u32 = 2;
/// FLG_SPEED: also compute speeds, needed for retrograde detection
const FLG_SPEED: u32 = 256;

/// Swiss Ephemeris body code
fn body_code(body: Body) -> u32 {
    match body {
        Body::Sun => 0,
        Body::Moon => 1,
        Body::Mercury => 2,
        Body::Venus => 3,
        Body::Mars => 4,
        Body::Jupiter => 5,
        Body::Saturn => 6,
        Body::Uranus => 7,
        Body::Neptune => 8,
    }
}

/// Whether the flags returned by `calc_ut` report Swiss file data.
///
/// Without the files the library falls back to the Moshier model.
fn uses_swiss_files(returned_flags: i32) -> bool {
    returned_flags as u32 & FLG_SWIEPH != 0
}

/// Swiss Ephemeris adapter implementation
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
    flags: u32,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path.
    ///
    /// Falls back to `SWISS_EPHEMERIS_PATH`, then to [`DEFAULT_EPHEMERIS_PATH`].
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.unwrap_or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_EPHEMERIS_PATH))
        });

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }

        let path_str = path.to_string_lossy();
        if path_str.contains('\0') {
            return Err(EphemerisError::FileNotFound {
                path: path_str.replace('\0', "\\0"),
                message: "Ephemeris path contains a NUL byte".to_string(),
            });
        }
        set_ephe_path(&path_str);
        log::debug!("Using Swiss Ephemeris data at {}", path.display());

        Ok(Self {
            ephemeris_path: path,
            flags: FLG_SWIEPH | FLG_SPEED,
        })
    }

    pub fn ephemeris_path(&self) -> &Path {
        &self.ephemeris_path
    }
}

impl EphemerisProvider for SwissEphemerisAdapter {
    fn lookup(&self, jd: f64, body: Body) -> Result<RawPosition, EphemerisError> {
        let result = calc_ut(jd, body_code(body), self.flags).map_err(|e| {
            EphemerisError::CalculationFailed {
                body,
                jd,
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;

        if !uses_swiss_files(result.code) {
            log::debug!(
                "{} at JD {} computed without Swiss files (flags {:#x}), check {}",
                body,
                jd,
                result.code,
                self.ephemeris_path.display()
            );
        }

        let out = result.out;
        Ok(RawPosition {
            lon: out[0].rem_euclid(360.0),
            speed_lon: out[3],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_path_is_reported() {
        let missing = PathBuf::from("/nonexistent/auspex/ephemeris");
        match SwissEphemerisAdapter::new(Some(missing)) {
            Err(EphemerisError::FileNotFound { path, .. }) => {
                assert!(path.contains("nonexistent"));
            }
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("adapter accepted a missing path"),
        }
    }

    #[test]
    fn test_moshier_fallback_is_detected() {
        assert!(uses_swiss_files((FLG_SWIEPH | FLG_SPEED) as i32));
        // FLG_MOSEPH = 4
        assert!(!uses_swiss_files((4 | FLG_SPEED) as i32));
    }

    #[test]
    fn test_existing_path_is_kept() {
        let dir = std::env::temp_dir();
        let adapter = SwissEphemerisAdapter::new(Some(dir.clone())).unwrap();
        assert_eq!(adapter.ephemeris_path(), dir.as_path());
    }

    #[test]
    fn test_body_codes_follow_swiss_numbering() {
        let codes: Vec<u32> = Body::ALL.iter().map(|b| body_code(*b)).collect();
        assert_eq!(codes, vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
