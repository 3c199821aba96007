//! # File I/O Module
//!
//! Project file operations:
//! - **Atomic saves**: write to a `.tmp` sibling, sync, then rename over the target
//! - **Version validation**: reject files written by an incompatible schema
//!
//! ## Example
//!
//! ```rust,no_run
//! use beam_core::calculations::beam::BeamConfig;
//! use beam_core::file_io::{load_project, save_project};
//! use beam_core::materials::MaterialLibrary;
//! use beam_core::project::Project;
//! use beam_core::sections::SectionProfile;
//! use std::path::Path;
//!
//! let steel = MaterialLibrary::builtin().lookup("Structural Steel (ASTM A36)")?.clone();
//! let project = Project::new(
//!     "Engineer",
//!     "25-001",
//!     "Client",
//!     BeamConfig::cantilever(3.0),
//!     SectionProfile::Square { side: 0.1 },
//!     steel,
//! );
//!
//! save_project(&project, Path::new("cantilever.json"))?;
//! let loaded = load_project(Path::new("cantilever.json"))?;
//! assert_eq!(loaded.beam, project.beam);
//! # Ok::<(), beam_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;

use crate::errors::{CalcError, CalcResult};
use crate::project::{Project, SCHEMA_VERSION};

/// Temporary sibling used during an atomic save
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Save a project to a file with atomic write semantics.
///
/// The save process:
/// 1. Serialize project to pretty JSON
/// 2. Write to a temporary file next to the target
/// 3. Sync to disk (fsync)
/// 4. Rename over the target (atomic on most filesystems)
pub fn save_project(project: &Project, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(project).map_err(|e| CalcError::serialization(e.to_string()))?;

    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    drop(tmp_file);

    fs::rename(&tmp_path, path).map_err(|e| {
        // Clean up temp file if rename fails
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!("Saved project {} to {}", project.meta.job_id, path.display());
    Ok(())
}

/// Load a project from a file.
///
/// # Returns
///
/// * `Ok(Project)` - Successfully loaded project
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_project(path: &Path) -> CalcResult<Project> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let project: Project = serde_json::from_str(&contents)
        .map_err(|e| CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e)))?;

    validate_version(&project.meta.version)?;

    debug!(
        "Loaded project {} ({} loads) from {}",
        project.meta.job_id,
        project.loads.len(),
        path.display()
    );
    Ok(project)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // For 0.x versions a newer minor may carry breaking changes
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::beam::BeamConfig;
    use crate::loads::Load;
    use crate::materials::MaterialLibrary;
    use crate::sections::SectionProfile;
    use std::env::temp_dir;

    fn temp_project_path(name: &str) -> PathBuf {
        temp_dir().join(format!("beam_core_test_{}_{}.json", name, std::process::id()))
    }

    fn sample_project() -> Project {
        let steel = MaterialLibrary::builtin()
            .lookup("Structural Steel (ASTM A36)")
            .unwrap()
            .clone();
        let mut project = Project::new(
            "Test Engineer",
            "TEST-001",
            "Test Client",
            BeamConfig::simple(6.4, 1.2, 5.2),
            SectionProfile::IBeam {
                flange_width: 0.2,
                flange_thickness: 0.02,
                web_height: 0.3,
                web_thickness: 0.01,
            },
            steel,
        );
        project.add_load(Load::uniform(1.2, 5.2, -2000.0));
        project.add_load(Load::moment(3.2, -8000.0));
        project
    }

    #[test]
    fn test_tmp_path_generation() {
        let tmp = tmp_path_for(Path::new("/path/to/project.json"));
        assert_eq!(tmp, Path::new("/path/to/project.json.tmp"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_project_path("roundtrip");

        let project = sample_project();
        save_project(&project, &path).unwrap();

        let loaded = load_project(&path).unwrap();
        assert_eq!(loaded, project);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_project_path("atomic");
        let tmp_path = tmp_path_for(&path);

        save_project(&sample_project(), &path).unwrap();

        assert!(!tmp_path.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_newer_schema() {
        let path = temp_project_path("version");
        let mut project = sample_project();
        project.meta.version = "0.9.0".to_string();
        save_project(&project, &path).unwrap();

        let err = load_project(&path).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_errors() {
        let missing = load_project(Path::new("/nonexistent/dir/project.json")).unwrap_err();
        assert_eq!(missing.error_code(), "FILE_ERROR");

        let path = temp_project_path("garbage");
        fs::write(&path, "{ not json").unwrap();
        let garbage = load_project(&path).unwrap_err();
        assert_eq!(garbage.error_code(), "SERIALIZATION_ERROR");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());

        // Same major.minor should pass
        assert!(validate_version("0.1.0").is_ok());
        assert!(validate_version("0.1.5").is_ok());

        // Different major should fail
        assert!(validate_version("1.0.0").is_err());

        // Newer minor (in 0.x) should fail
        assert!(validate_version("0.2.0").is_err());

        assert!(validate_version("garbage").is_err());
    }
}
