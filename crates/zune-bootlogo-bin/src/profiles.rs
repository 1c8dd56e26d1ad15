/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Device profile configuration
use std::fs::read;
use std::path::Path;

use log::{debug, info, trace};
use serde::Deserialize;
use zune_bootlogo::{DeviceProfile, DeviceProfiles};

use crate::errors::CliErrors;

#[derive(Clone, Deserialize, Debug)]
pub struct ProfileEntry {
    pub id:      String,
    pub width:   u32,
    pub height:  u32,
    pub comment: Option<String>
}

impl ProfileEntry {
    pub fn to_profile(&self) -> DeviceProfile {
        DeviceProfile::new(&self.id, self.width, self.height)
    }
}

/// Parse a JSON array of profile entries
pub fn parse_profiles(contents: &[u8]) -> Result<Vec<DeviceProfile>, CliErrors> {
    let entries: Vec<ProfileEntry> = serde_json::from_slice(contents)?;

    for entry in entries.iter() {
        if let Some(comment) = &entry.comment {
            trace!("Profile {}: {}", entry.id, comment);
        }
    }
    Ok(entries.iter().map(ProfileEntry::to_profile).collect())
}

/// Built-in profiles extended by those in `file`, if any
pub fn load_profiles(file: Option<&Path>) -> Result<DeviceProfiles, CliErrors> {
    let mut profiles = DeviceProfiles::builtin();

    if let Some(path) = file {
        let contents = read(path).map_err(|e| CliErrors::Io(path.to_owned(), e))?;
        let extra = parse_profiles(&contents)?;

        info!("Loaded {} device profiles from {:?}", extra.len(), path);
        profiles.extend(extra);
    }
    debug!("{} device profiles known", profiles.len());

    Ok(profiles)
}

/// Look up `id`, an unknown id is an error
pub fn resolve_device<'a>(
    profiles: &'a DeviceProfiles, id: Option<&str>
) -> Result<Option<&'a DeviceProfile>, CliErrors> {
    match id {
        None => Ok(None),
        Some(id) => profiles
            .get(id)
            .map(Some)
            .ok_or_else(|| CliErrors::UnknownDevice(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_profiles_shadow_builtins() {
        let json = br#"[
            {"id": "panel-800x480", "width": 800, "height": 400, "comment": "cropped panel"},
            {"id": "kiosk", "width": 1080, "height": 1920}
        ]"#;
        let mut profiles = DeviceProfiles::builtin();
        profiles.extend(parse_profiles(json).unwrap());

        assert_eq!(
            profiles.get("panel-800x480").map(DeviceProfile::dimensions),
            Some((800, 400))
        );
        assert_eq!(
            profiles.get("kiosk").map(DeviceProfile::dimensions),
            Some((1080, 1920))
        );
    }

    #[test]
    fn malformed_profiles_are_errors() {
        assert!(matches!(
            parse_profiles(br#"[{"id": "x", "width": -1, "height": 2}]"#),
            Err(CliErrors::Json(_))
        ));
    }

    #[test]
    fn unknown_device_is_an_error() {
        let profiles = DeviceProfiles::builtin();

        assert!(resolve_device(&profiles, None).unwrap().is_none());
        assert!(resolve_device(&profiles, Some("panel-1280x720"))
            .unwrap()
            .is_some());
        assert!(matches!(
            resolve_device(&profiles, Some("nope")),
            Err(CliErrors::UnknownDevice(_))
        ));
    }
}
