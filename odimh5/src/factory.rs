/// Factory (C5): binds a file path to a version-specific Object handle
///
/// Grounds `OdimFactory` in `odimh5v21_classes.hpp`. Two factory instances
/// coexist, one per [`Version`], with identical shapes and disjoint
/// constant tables -- a file written by one factory is not promoted by the
/// other; [`Factory::open`] enforces that unless the version-check
/// override is set.

use std::path::Path;

use odimh5_types::{ObjectKind, Version};

use crate::error::Result;
use crate::tree::object::{Object, OpenMode};

pub struct Factory {
    version: Version,
}

impl Factory {
    pub const fn for_version(version: Version) -> Self {
        Factory { version }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Truncates and creates a bare object with only `Conventions` written.
    pub fn create(&self, path: impl AsRef<Path>) -> Result<Object> {
        Object::create(path, self.version)
    }

    pub fn create_polar_volume(&self, path: impl AsRef<Path>) -> Result<Object> {
        Object::create_kind(path, self.version, ObjectKind::Pvol)
    }

    pub fn create_image(&self, path: impl AsRef<Path>) -> Result<Object> {
        Object::create_kind(path, self.version, ObjectKind::Image)
    }

    pub fn create_composite(&self, path: impl AsRef<Path>) -> Result<Object> {
        Object::create_kind(path, self.version, ObjectKind::Comp)
    }

    pub fn create_xsec(&self, path: impl AsRef<Path>) -> Result<Object> {
        Object::create_kind(path, self.version, ObjectKind::Xsec)
    }

    /// Opens an existing file, validating `Conventions` against this
    /// factory's version (see `RADARLIB_SKIP_CHECK_VERSION` in
    /// [`crate::config`]).
    pub fn open(&self, path: impl AsRef<Path>, mode: OpenMode) -> Result<Object> {
        Object::open(path, self.version, mode)
    }
}

/// The v2.0 factory namespace.
pub const V20: Factory = Factory::for_version(Version::V20);

/// The v2.1 factory namespace.
pub const V21: Factory = Factory::for_version(Version::V21);
