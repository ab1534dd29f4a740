use anyhow::{ensure, Result};
use std::path::{Path, PathBuf};

/// The sidecar files making up one shapefile dataset.
///
/// A shapefile is really a family of files sharing a stem: `.shp` holds the
/// geometry, `.shx` the record index, `.dbf` the attribute table and `.prj`
/// an optional projection description.
#[derive(Clone, Debug, PartialEq)]
pub struct Companions {
	pub shp: PathBuf,
	pub shx: PathBuf,
	pub dbf: PathBuf,
	pub prj: PathBuf,
}

impl Companions {
	/// Derives all companion paths from a dataset stem.
	///
	/// A trailing `.shp` extension on the stem is ignored, so both
	/// `data/lakes` and `data/lakes.shp` name the same dataset. Dots inside
	/// the stem itself are left alone.
	pub fn from_stem(stem: &Path) -> Companions {
		let text = stem.to_string_lossy();
		let stem = text.strip_suffix(".shp").unwrap_or(&text);
		Companions {
			shp: with_suffix(stem, ".shp"),
			shx: with_suffix(stem, ".shx"),
			dbf: with_suffix(stem, ".dbf"),
			prj: with_suffix(stem, ".prj"),
		}
	}

	/// Checks that the mandatory companions exist on disk.
	///
	/// The `.prj` sidecar is optional and not checked; datasets without one
	/// fall back to geographic WGS84 coordinates.
	pub fn check(&self) -> Result<()> {
		let mut missing = Vec::new();
		for path in [&self.shp, &self.shx, &self.dbf] {
			if !path.is_file() {
				missing.push(path.to_string_lossy().to_string());
			}
		}
		ensure!(
			missing.is_empty(),
			"missing shapefile companions: {}",
			missing.join(", ")
		);
		Ok(())
	}
}

fn with_suffix(stem: &str, suffix: &str) -> PathBuf {
	let mut text = String::with_capacity(stem.len() + suffix.len());
	text.push_str(stem);
	text.push_str(suffix);
	PathBuf::from(text)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn derives_companions_from_stem() {
		let companions = Companions::from_stem(Path::new("data/lakes"));
		assert_eq!(companions.shp, PathBuf::from("data/lakes.shp"));
		assert_eq!(companions.shx, PathBuf::from("data/lakes.shx"));
		assert_eq!(companions.dbf, PathBuf::from("data/lakes.dbf"));
		assert_eq!(companions.prj, PathBuf::from("data/lakes.prj"));
	}

	#[test]
	fn trailing_shp_extension_is_ignored() {
		assert_eq!(
			Companions::from_stem(Path::new("data/lakes.shp")),
			Companions::from_stem(Path::new("data/lakes"))
		);
	}

	#[test]
	fn dots_in_the_stem_are_preserved() {
		let companions = Companions::from_stem(Path::new("v1.2/my.data"));
		assert_eq!(companions.shp, PathBuf::from("v1.2/my.data.shp"));
		assert_eq!(companions.dbf, PathBuf::from("v1.2/my.data.dbf"));
	}

	#[test]
	fn check_names_every_missing_companion() {
		let dir = tempfile::tempdir().unwrap();
		let stem = dir.path().join("lakes");
		std::fs::write(stem.with_extension("shp"), b"").unwrap();

		let error = Companions::from_stem(&stem).check().unwrap_err();
		let message = error.to_string();
		assert!(message.contains("lakes.shx"));
		assert!(message.contains("lakes.dbf"));
		assert!(!message.contains("lakes.shp,") && !message.ends_with("lakes.shp"));
	}

	#[test]
	fn check_passes_when_all_present() {
		let dir = tempfile::tempdir().unwrap();
		let stem = dir.path().join("lakes");
		for extension in ["shp", "shx", "dbf"] {
			std::fs::write(stem.with_extension(extension), b"").unwrap();
		}
		Companions::from_stem(&stem).check().unwrap();
	}
}
