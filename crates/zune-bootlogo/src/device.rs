/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Device resolution profiles and the advisory compatibility check
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// A device identifier and the logo resolution it expects
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DeviceProfile {
    pub id:     String,
    pub width:  u32,
    pub height: u32
}

impl DeviceProfile {
    pub fn new(id: &str, width: u32, height: u32) -> DeviceProfile {
        DeviceProfile {
            id: id.to_string(),
            width,
            height
        }
    }

    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Result of comparing an image against a device's expected resolution
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Compatibility {
    /// Image has exactly the device resolution
    Match,
    /// Image dimensions differ from the device resolution
    Mismatch {
        expected: (u32, u32),
        found:    (u32, u32)
    },
    /// No device was selected
    Unknown
}

impl Compatibility {
    /// Compare `dimensions` against `device`
    ///
    /// This never influences encoding or decoding.
    pub fn check(dimensions: (u32, u32), device: Option<&DeviceProfile>) -> Compatibility {
        match device {
            None => Compatibility::Unknown,
            Some(profile) if profile.dimensions() == dimensions => Compatibility::Match,
            Some(profile) => Compatibility::Mismatch {
                expected: profile.dimensions(),
                found:    dimensions
            }
        }
    }

    pub const fn is_match(&self) -> bool {
        matches!(self, Compatibility::Match)
    }
}

/// A lookup table from device identifier to profile
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DeviceProfiles {
    profiles: Vec<DeviceProfile>
}

impl DeviceProfiles {
    /// An empty table
    pub fn new() -> DeviceProfiles {
        DeviceProfiles::default()
    }

    /// Common panel resolutions, keyed by their size
    pub fn builtin() -> DeviceProfiles {
        let mut profiles = DeviceProfiles::new();

        for (id, width, height) in [
            ("panel-480x272", 480, 272),
            ("panel-800x480", 800, 480),
            ("panel-1024x600", 1024, 600),
            ("panel-1280x720", 1280, 720),
            ("panel-1920x1080", 1920, 1080)
        ] {
            profiles.insert(DeviceProfile::new(id, width, height));
        }
        profiles
    }

    /// Add a profile, replacing any existing profile with the same id
    pub fn insert(&mut self, profile: DeviceProfile) {
        match self.profiles.iter_mut().find(|p| p.id == profile.id) {
            Some(existing) => *existing = profile,
            None => self.profiles.push(profile)
        }
    }

    pub fn get(&self, id: &str) -> Option<&DeviceProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeviceProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Extend<DeviceProfile> for DeviceProfiles {
    fn extend<T: IntoIterator<Item = DeviceProfile>>(&mut self, iter: T) {
        for profile in iter {
            self.insert(profile);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compatibility_verdicts() {
        let device = DeviceProfile::new("panel", 800, 480);

        assert_eq!(Compatibility::check((800, 480), None), Compatibility::Unknown);
        assert_eq!(
            Compatibility::check((800, 480), Some(&device)),
            Compatibility::Match
        );
        assert_eq!(
            Compatibility::check((480, 800), Some(&device)),
            Compatibility::Mismatch {
                expected: (800, 480),
                found:    (480, 800)
            }
        );
    }

    #[test]
    fn insert_replaces_same_id() {
        let mut profiles = DeviceProfiles::builtin();
        let count = profiles.len();

        profiles.insert(DeviceProfile::new("panel-800x480", 640, 480));
        assert_eq!(profiles.len(), count);
        assert_eq!(profiles.get("panel-800x480").map(|p| p.width), Some(640));

        profiles.extend([DeviceProfile::new("custom", 1, 1)]);
        assert_eq!(profiles.len(), count + 1);
        assert!(profiles.get("missing").is_none());
    }
}
